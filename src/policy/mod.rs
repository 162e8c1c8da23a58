//! Opponent policies.
//!
//! A policy drives one side through a whole turn using the same commands
//! the human issues; it gets no special access to the engine. The engine
//! closes the turn afterwards if the policy left it open (see
//! `Match::run_opponent_turn`).

mod greedy;

pub use greedy::GreedyPolicy;

use crate::core::{RandomSource, Side};
use crate::rules::Match;

/// Decision procedure for a scripted side.
pub trait OpponentPolicy<R: RandomSource> {
    /// Take `side`'s actions for the current turn.
    ///
    /// Rejected commands are the policy's own business; they never change
    /// the match.
    fn play_turn(&mut self, game: &mut Match<R>, side: Side);
}
