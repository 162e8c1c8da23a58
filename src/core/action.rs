//! Command representation and action history.
//!
//! A `Command` is one validated intent from either side. The presentation
//! layer builds them from explicit indices (no implicit UI selection); the
//! opponent policy builds them from its own reading of the match. Both go
//! through the same `Match::apply` entry point.

use serde::{Deserialize, Serialize};

use super::player::Side;
use super::rng::CoinSide;

/// An in-play slot a command points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The active Pokémon.
    Active,
    /// A bench slot by index.
    Bench(usize),
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Active => write!(f, "active"),
            Target::Bench(i) => write!(f, "bench slot {}", i),
        }
    }
}

/// A complete player intent.
///
/// ## Example
///
/// ```
/// use tcg_lite::core::{Command, CoinSide, Target};
///
/// let attach = Command::AttachEnergy { hand_index: 2, target: Target::Bench(0) };
/// let draw = Command::PlaySupporter { hand_index: 0, call: Some(CoinSide::Heads) };
///
/// assert!(!attach.ends_turn());
/// assert!(Command::Attack.ends_turn());
/// # let _ = draw;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Take the offered mulligan.
    AcceptMulligan,
    /// Keep the current opening hand.
    DeclineMulligan,
    /// Put a Basic Pokémon from hand onto the bench.
    Bench { hand_index: usize },
    /// Setup only: move a bench Pokémon into the active slot and start play.
    ChooseStartingActive { bench_index: usize },
    /// Attach an Energy card from hand.
    AttachEnergy { hand_index: usize, target: Target },
    /// Evolve an in-play Pokémon with a Stage 1 card from hand.
    Evolve { hand_index: usize, target: Target },
    /// Play a Supporter. `call` is required when the card needs a coin flip.
    PlaySupporter { hand_index: usize, call: Option<CoinSide> },
    /// Play an Item. `call` is required when the card needs a coin flip.
    PlayItem { hand_index: usize, call: Option<CoinSide> },
    /// Fill an empty active slot from the bench.
    Promote { bench_index: usize },
    /// Attack with the active Pokémon. Ends the turn.
    Attack,
    /// End the turn without attacking.
    EndTurn,
}

impl Command {
    /// Whether applying this command hands the turn over.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Command::Attack | Command::EndTurn)
    }

    /// Short verb for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::AcceptMulligan => "accept-mulligan",
            Command::DeclineMulligan => "decline-mulligan",
            Command::Bench { .. } => "bench",
            Command::ChooseStartingActive { .. } => "choose-active",
            Command::AttachEnergy { .. } => "attach-energy",
            Command::Evolve { .. } => "evolve",
            Command::PlaySupporter { .. } => "play-supporter",
            Command::PlayItem { .. } => "play-item",
            Command::Promote { .. } => "promote",
            Command::Attack => "attack",
            Command::EndTurn => "end-turn",
        }
    }
}

/// A recorded command with metadata for history tracking.
///
/// Used for replay and debugging: replaying the same records against a
/// match built from the same seed reproduces it exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that issued the command.
    pub side: Side,

    /// The command applied.
    pub command: Command,

    /// Turn number when it was applied.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            side,
            command,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_turn() {
        assert!(Command::Attack.ends_turn());
        assert!(Command::EndTurn.ends_turn());
        assert!(!Command::Bench { hand_index: 0 }.ends_turn());
        assert!(!Command::Promote { bench_index: 0 }.ends_turn());
    }

    #[test]
    fn test_target_display() {
        assert_eq!(Target::Active.to_string(), "active");
        assert_eq!(Target::Bench(3).to_string(), "bench slot 3");
    }

    #[test]
    fn test_action_record() {
        let command = Command::Evolve { hand_index: 1, target: Target::Bench(0) };
        let record = ActionRecord::new(Side::Human, command.clone(), 3, 5);

        assert_eq!(record.side, Side::Human);
        assert_eq!(record.command, command);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_action_record_serialization() {
        let command = Command::PlayItem { hand_index: 4, call: Some(CoinSide::Tails) };
        let record = ActionRecord::new(Side::Opponent, command, 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
