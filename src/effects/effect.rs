//! Trainer effect tags and their reported outcomes.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardUid;

/// A built-in trainer procedure.
///
/// Cards carry one of these as plain data; `resolve_effect` is the single
/// lookup table that runs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Draw `count` cards (fewer if the deck runs out).
    Draw { count: u8 },
    /// Add energy to the active Pokémon.
    AddEnergyToActive { amount: u32 },
    /// Return the first bench Pokémon to hand.
    ReturnFirstBenchToHand,
    /// Discard `count` uniformly random hand cards (as many as available).
    DiscardRandom { count: u8 },
    /// Move one uniformly random discard card into hand.
    RetrieveRandomFromDiscard,
    /// Heal the active Pokémon, capped at max HP.
    HealActive { amount: i32 },
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectKind::Draw { count } => write!(f, "draw {}", count),
            EffectKind::AddEnergyToActive { amount } => write!(f, "add {} energy to active", amount),
            EffectKind::ReturnFirstBenchToHand => write!(f, "return first bench Pokémon to hand"),
            EffectKind::DiscardRandom { count } => write!(f, "discard {} random cards", count),
            EffectKind::RetrieveRandomFromDiscard => write!(f, "retrieve a random card from discard"),
            EffectKind::HealActive { amount } => write!(f, "heal {} HP on active", amount),
        }
    }
}

/// What an effect actually did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    Drew { count: usize },
    EnergyAdded { target: CardUid, amount: u32 },
    ReturnedToHand { card: CardUid },
    Discarded { cards: Vec<CardUid> },
    Retrieved { card: CardUid },
    Healed { target: CardUid, amount: i32 },
    /// The effect had nothing to act on.
    NoEffect { reason: NoEffectReason },
}

/// Why an effect resolved as a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoEffectReason {
    NoActive,
    BenchEmpty,
    HandEmpty,
    DiscardEmpty,
}
