//! The match engine.
//!
//! `Match` owns both sides, the turn and phase machinery, the injected
//! `RandomSource`, the event queue and the command history. Every rule
//! lives in one of the submodules:
//!
//! - `setup`: dealing, the mulligan exchange, opponent auto-setup
//! - `actions`: benching, evolution, energy, trainers, promotion
//! - `combat`: attacks, knockouts, turn passing
//! - `legal`: enumerating the commands a side may issue
//! - `view`: read-only projections and the invariant audit
//!
//! Commands are validated before anything is touched, so a rejected
//! command never changes the match.

mod actions;
mod combat;
mod engine;
mod legal;
mod setup;
mod view;

pub use engine::{Match, MatchBuilder};
pub use view::{CardView, InvariantViolation, MatchView, OpponentView, PlayerView, PokemonView};
