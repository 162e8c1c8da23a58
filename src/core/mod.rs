//! Core engine types: identities, sides, randomness, configuration,
//! commands, progression state and errors.
//!
//! Everything here is independent of the card rules; `rules` builds the
//! match engine on top of it.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use entity::{CardUid, EntityAllocator};
pub use player::{Side, SideMap};
pub use rng::{CoinSide, GameRng, RandomSource, SequenceRng};
pub use config::MatchConfig;
pub use action::{ActionRecord, Command, Target};
pub use state::{Outcome, Phase, WinReason};
pub use error::ActionError;
