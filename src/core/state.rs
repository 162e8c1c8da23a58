//! Match progression: phase and result.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Match phase. Moves strictly forward: Setup -> Playing -> Ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    Playing,
    Ended,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::Playing => write!(f, "playing"),
            Phase::Ended => write!(f, "ended"),
        }
    }
}

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner took their last prize card.
    AllPrizesTaken,
    /// The loser had to draw at turn start with an empty deck.
    DeckOut,
    /// The loser's active was knocked out with nothing on the bench.
    NoBenchToPromote,
    /// The loser had no Pokémon anywhere to put into play.
    NoPokemonAvailable,
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Side,
    pub reason: WinReason,
}

impl Outcome {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }

    /// The losing side.
    #[must_use]
    pub fn loser(&self) -> Side {
        self.winner.other()
    }
}
