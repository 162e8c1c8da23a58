//! Rejections for illegal commands.
//!
//! Every variant is recoverable: a rejected command never mutates the match.
//! Empty-resource conditions (drawing from an empty deck mid-effect,
//! retrieving from an empty discard) are not errors; they are no-ops or
//! game-ending events reported through `GameEvent`.

use thiserror::Error;

use super::action::Target;
use super::player::Side;
use super::state::Phase;

/// Why a command was rejected.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    #[error("match is over")]
    MatchEnded,

    #[error("not allowed during {actual} (needs {expected})")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("it is not {0}'s turn")]
    NotYourTurn(Side),

    #[error("hand index {index} out of range (hand has {len} cards)")]
    HandIndexOutOfRange { index: usize, len: usize },

    #[error("bench index {index} out of range (bench has {len} Pokémon)")]
    BenchIndexOutOfRange { index: usize, len: usize },

    #[error("selected card is not {expected}")]
    WrongCardKind { expected: &'static str },

    #[error("only Basic Pokémon can be put onto the bench")]
    NotBasic,

    #[error("bench is full")]
    BenchFull,

    #[error("no Pokémon in {0}")]
    EmptyTarget(Target),

    #[error("only a Basic Pokémon can evolve")]
    NotEvolvable,

    #[error("cannot evolve a Pokémon that entered play this turn")]
    SameTurnEvolution,

    #[error("energy already attached this turn")]
    EnergyAlreadyAttached,

    #[error("supporter already used this turn")]
    SupporterAlreadyUsed,

    #[error("no active Pokémon")]
    NoActivePokemon,

    #[error("active Pokémon needs at least {required} energy")]
    NotEnoughEnergy { required: u32 },

    #[error("opponent has no active Pokémon to attack")]
    NoDefendingPokemon,

    #[error("active slot is already occupied")]
    ActiveOccupied,

    #[error("bench is empty")]
    BenchEmpty,

    #[error("this card needs a coin call (heads or tails)")]
    CoinCallRequired,

    #[error("answer the mulligan offer first")]
    MulliganPending,

    #[error("no mulligan is on offer")]
    NoMulliganOffered,
}
