//! Per-side card zones.
//!
//! ## Key Types
//!
//! - `PlayerState`: deck, hand, discard, prizes, bench, active slot and
//!   the once-per-turn flags for one side
//! - `Bench`: inline bench storage

pub mod state;

pub use state::{Bench, PlayerState};
