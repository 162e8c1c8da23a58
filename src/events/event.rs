//! Game event types.
//!
//! Events describe what happened inside one command, in order. The engine
//! queues them; the presentation layer drains them to redraw and to fill
//! its log. Events about the opponent never carry hidden card contents
//! beyond what is already public (in-play cards, played trainers).

use serde::{Deserialize, Serialize};

use crate::core::{CardUid, CoinSide, Outcome, Side, Target};
use crate::effects::EffectOutcome;

/// Something that happened in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Opening hands and prizes were dealt.
    Dealt,

    /// The human's opening hand has no Basic and a mulligan is on offer.
    MulliganOffered,

    /// A side shuffled its hand back and redrew. `total` is the shared count.
    Mulligan { side: Side, total: u32 },

    /// The human kept a hand without a Basic.
    MulliganDeclined,

    /// The shared mulligan budget is used up.
    MulliganBudgetExhausted,

    /// Setup finished and play begins.
    SetupComplete,

    TurnStarted { side: Side, turn: u32 },

    TurnEnded { side: Side, turn: u32 },

    CardDrawn { side: Side },

    Benched { side: Side, card: CardUid },

    Promoted { side: Side, card: CardUid },

    Evolved { side: Side, target: Target, from: CardUid, into: CardUid },

    EnergyAttached { side: Side, target: Target, card: CardUid, total: u32 },

    TrainerPlayed { side: Side, card: CardUid, name: String },

    CoinFlipped { side: Side, call: CoinSide, result: CoinSide },

    /// A trainer failed its coin call and was discarded without effect.
    EffectSkipped { side: Side, card: CardUid },

    EffectResolved { side: Side, outcome: EffectOutcome },

    Attacked {
        side: Side,
        attacker: CardUid,
        defender: CardUid,
        damage: i32,
        remaining_hp: i32,
    },

    KnockedOut { side: Side, card: CardUid },

    PrizeTaken { side: Side, remaining: usize },

    /// A side had no active Pokémon and nothing to put there.
    NoActivePokemon { side: Side },

    MatchEnded(Outcome),
}

impl GameEvent {
    /// The side this event concerns, if any.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        match self {
            GameEvent::Mulligan { side, .. }
            | GameEvent::TurnStarted { side, .. }
            | GameEvent::TurnEnded { side, .. }
            | GameEvent::CardDrawn { side }
            | GameEvent::Benched { side, .. }
            | GameEvent::Promoted { side, .. }
            | GameEvent::Evolved { side, .. }
            | GameEvent::EnergyAttached { side, .. }
            | GameEvent::TrainerPlayed { side, .. }
            | GameEvent::CoinFlipped { side, .. }
            | GameEvent::EffectSkipped { side, .. }
            | GameEvent::EffectResolved { side, .. }
            | GameEvent::Attacked { side, .. }
            | GameEvent::KnockedOut { side, .. }
            | GameEvent::PrizeTaken { side, .. }
            | GameEvent::NoActivePokemon { side } => Some(*side),
            GameEvent::MulliganOffered | GameEvent::MulliganDeclined => Some(Side::Human),
            GameEvent::MatchEnded(outcome) => Some(outcome.winner),
            GameEvent::Dealt | GameEvent::MulliganBudgetExhausted | GameEvent::SetupComplete => None,
        }
    }
}
