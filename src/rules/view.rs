//! Read-only projections of a match, and the invariant audit.
//!
//! `MatchView` is what a presentation layer renders for one side: its own
//! zones in full, the other side reduced to counts plus the face-up
//! Pokémon in play.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::engine::Match;
use crate::cards::{Card, PokemonCard, Stage};
use crate::core::{CardUid, Outcome, Phase, RandomSource, Side};
use crate::zones::PlayerState;

/// A card as shown in a hand or discard list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardUid,
    pub label: String,
    pub kind: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            label: card.label().to_string(),
            kind: card.kind.kind_name().to_string(),
        }
    }
}

/// An in-play Pokémon. `hp` is floored at zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonView {
    pub id: CardUid,
    pub name: String,
    pub stage: Stage,
    pub hp: i32,
    pub max_hp: i32,
    pub energy: u32,
    pub attack_name: String,
    pub damage: i32,
}

impl From<&PokemonCard> for PokemonView {
    fn from(card: &PokemonCard) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            stage: card.stage,
            hp: card.displayed_hp(),
            max_hp: card.max_hp,
            energy: card.energy,
            attack_name: card.attack_name.clone(),
            damage: card.damage,
        }
    }
}

/// The viewing side's own zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub hand: Vec<CardView>,
    pub active: Option<PokemonView>,
    pub bench: Vec<PokemonView>,
    pub discard: Vec<CardView>,
    pub deck_count: usize,
    pub prize_count: usize,
    pub energy_attached_this_turn: bool,
    pub supporter_used_this_turn: bool,
}

impl From<&PlayerState> for PlayerView {
    fn from(player: &PlayerState) -> Self {
        Self {
            name: player.name.clone(),
            hand: player.hand.iter().map(CardView::from).collect(),
            active: player.active.as_ref().map(PokemonView::from),
            bench: player.bench.iter().map(PokemonView::from).collect(),
            discard: player.discard.iter().map(CardView::from).collect(),
            deck_count: player.deck.len(),
            prize_count: player.prizes.len(),
            energy_attached_this_turn: player.energy_attached_this_turn,
            supporter_used_this_turn: player.supporter_used_this_turn,
        }
    }
}

/// The other side as the viewer may see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub name: String,
    pub active: Option<PokemonView>,
    pub bench: Vec<PokemonView>,
    pub hand_count: usize,
    pub deck_count: usize,
    pub discard_count: usize,
    pub prize_count: usize,
}

impl From<&PlayerState> for OpponentView {
    fn from(player: &PlayerState) -> Self {
        Self {
            name: player.name.clone(),
            active: player.active.as_ref().map(PokemonView::from),
            bench: player.bench.iter().map(PokemonView::from).collect(),
            hand_count: player.hand.len(),
            deck_count: player.deck.len(),
            discard_count: player.discard.len(),
            prize_count: player.prizes.len(),
        }
    }
}

/// Everything one side may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub viewer: Side,
    pub phase: Phase,
    pub turn: u32,
    pub current: Side,
    pub mulligan_offered: bool,
    pub mulligans: u32,
    pub outcome: Option<Outcome>,
    pub me: PlayerView,
    pub opponent: OpponentView,
}

/// A broken engine invariant.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{0} is in more than one zone")]
    DuplicateCard(CardUid),

    #[error("{side} holds {actual} cards but was dealt {expected}")]
    CardCountChanged { side: Side, expected: usize, actual: usize },

    #[error("{side} has {len} Pokémon on a bench of {capacity}")]
    BenchOverCapacity { side: Side, len: usize, capacity: usize },

    #[error("{taken} mulligans taken, limit is {limit}")]
    TooManyMulligans { taken: u32, limit: u32 },

    #[error("{0} is in play without an entry turn")]
    MissingEntryTurn(CardUid),

    #[error("{card} entered play on turn {entered}, now turn {turn}")]
    FutureEntryTurn { card: CardUid, entered: u32, turn: u32 },

    #[error("{0} is out of play but keeps in-play state")]
    StaleInPlayState(CardUid),
}

impl<R: RandomSource> Match<R> {
    /// Project the match for `viewer`.
    #[must_use]
    pub fn view(&self, viewer: Side) -> MatchView {
        MatchView {
            viewer,
            phase: self.phase,
            turn: self.turn,
            current: self.current,
            mulligan_offered: self.mulligan.offered,
            mulligans: self.mulligans,
            outcome: self.outcome,
            me: PlayerView::from(&self.players[viewer]),
            opponent: OpponentView::from(&self.players[viewer.other()]),
        }
    }

    /// Check the engine's structural invariants.
    pub fn audit(&self) -> Result<(), InvariantViolation> {
        if self.mulligans > self.config.max_mulligans {
            return Err(InvariantViolation::TooManyMulligans {
                taken: self.mulligans,
                limit: self.config.max_mulligans,
            });
        }

        let mut seen = FxHashSet::default();
        for (side, player) in self.players.iter() {
            for id in player.card_ids() {
                if !seen.insert(id) {
                    return Err(InvariantViolation::DuplicateCard(id));
                }
            }

            let expected = self.card_totals[side];
            let actual = player.card_count();
            if actual != expected {
                return Err(InvariantViolation::CardCountChanged { side, expected, actual });
            }

            if player.bench.len() > self.config.bench_capacity {
                return Err(InvariantViolation::BenchOverCapacity {
                    side,
                    len: player.bench.len(),
                    capacity: self.config.bench_capacity,
                });
            }

            for (_, pokemon) in player.in_play() {
                match pokemon.entered_play_on {
                    None => return Err(InvariantViolation::MissingEntryTurn(pokemon.id)),
                    Some(entered) if entered > self.turn => {
                        return Err(InvariantViolation::FutureEntryTurn {
                            card: pokemon.id,
                            entered,
                            turn: self.turn,
                        })
                    }
                    Some(_) => {}
                }
            }

            let out_of_play = player
                .deck
                .iter()
                .chain(player.hand.iter())
                .chain(player.discard.iter())
                .chain(player.prizes.iter());
            for card in out_of_play {
                if card.pokemon().is_some_and(|p| p.entered_play_on.is_some() || p.energy > 0) {
                    return Err(InvariantViolation::StaleInPlayState(card.id));
                }
            }
        }
        Ok(())
    }
}
