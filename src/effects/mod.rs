//! Trainer effects.
//!
//! - `EffectKind`: the tagged set of built-in procedures a Supporter or Item
//!   can carry
//! - `resolve_effect`: the lookup table that runs a procedure against one
//!   side's zones
//! - `EffectOutcome`: what the procedure did, for events and logs
//!
//! Effects are data, not callbacks, so cards stay plain values.

mod effect;
mod resolver;

pub use effect::{EffectKind, EffectOutcome, NoEffectReason};
pub use resolver::resolve_effect;
