//! # tcg-lite
//!
//! A two-player engine for a simplified Pokémon-style trading card game:
//! one human-controlled side against a scripted opponent, played to a
//! prize, deck-out or no-Pokémon finish.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every command is checked in full before
//!    anything moves, so a rejected command leaves the match untouched.
//!
//! 2. **Injected randomness**: shuffles, coin flips and random picks all go
//!    through one `RandomSource`. A seed reproduces a match exactly.
//!
//! 3. **No I/O**: the engine queues typed `GameEvent`s and writes to the
//!    `log` facade. Rendering is somebody else's job.
//!
//! ## Modules
//!
//! - `core`: ids, sides, randomness, configuration, commands, errors
//! - `cards`: card model and the fixed 60-card deck
//! - `effects`: trainer effect procedures
//! - `zones`: one side's deck, hand, discard, prizes, bench and active
//! - `rules`: the `Match` engine
//! - `events`: events emitted by the engine
//! - `policy`: scripted opponent behaviour
//!
//! ## Example
//!
//! ```
//! use tcg_lite::{GreedyPolicy, Match, Phase, Side, Target};
//!
//! let mut game = Match::new(7);
//! while game.mulligan_offered() {
//!     game.accept_mulligan().unwrap();
//! }
//!
//! if let Some(index) = game.player(Side::Human).find_in_hand(|c| c.is_basic_pokemon()) {
//!     game.bench(Side::Human, index).unwrap();
//!     game.choose_starting_active(0).unwrap();
//!     assert_eq!(game.phase(), Phase::Playing);
//!
//!     if let Some(energy) = game.player(Side::Human).find_in_hand(|c| c.is_energy()) {
//!         game.attach_energy(Side::Human, energy, Target::Active).unwrap();
//!     }
//!     game.end_turn(Side::Human).unwrap();
//!     game.run_opponent_turn(&mut GreedyPolicy).unwrap();
//! }
//! ```

pub mod core;
pub mod cards;
pub mod effects;
pub mod zones;
pub mod rules;
pub mod events;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    ActionError, ActionRecord, CardUid, CoinSide, Command, GameRng, MatchConfig, Outcome,
    Phase, RandomSource, SequenceRng, Side, SideMap, Target, WinReason,
};

pub use crate::cards::{Card, CardKind, Pokemon, PokemonCard, Stage, Trainer};

pub use crate::effects::{EffectKind, EffectOutcome};

pub use crate::zones::PlayerState;

pub use crate::rules::{InvariantViolation, Match, MatchBuilder, MatchView, OpponentView, PlayerView};

pub use crate::events::GameEvent;

pub use crate::policy::{GreedyPolicy, OpponentPolicy};
