//! Main-phase actions: bench, evolve, attach energy, trainers, promote.
//!
//! Each action is a `check_*` / `do_*` pair. The check holds every rule
//! and touches nothing; the `do_*` half assumes the check passed.

use log::{debug, info};

use super::engine::Match;
use crate::cards::CardKind;
use crate::core::{ActionError, CoinSide, Phase, RandomSource, Side, Target};
use crate::effects::resolve_effect;
use crate::events::GameEvent;

impl<R: RandomSource> Match<R> {
    // === Bench ===

    pub(super) fn check_bench(&self, side: Side, hand_index: usize) -> Result<(), ActionError> {
        if self.phase == Phase::Setup {
            self.ensure_turn(side, Phase::Setup)?;
            if self.mulligan.offered {
                return Err(ActionError::MulliganPending);
            }
        } else {
            self.ensure_turn(side, Phase::Playing)?;
        }

        let player = &self.players[side];
        let pokemon = player
            .hand_card(hand_index)?
            .pokemon()
            .ok_or(ActionError::WrongCardKind { expected: "a Pokémon" })?;
        if !pokemon.is_basic() {
            return Err(ActionError::NotBasic);
        }
        if player.bench.len() >= self.config.bench_capacity {
            return Err(ActionError::BenchFull);
        }
        Ok(())
    }

    pub(super) fn do_bench(&mut self, side: Side, hand_index: usize) {
        let turn = self.turn;
        let player = &mut self.players[side];
        let Some(mut pokemon) = player.take_pokemon_from_hand(hand_index) else {
            return;
        };
        pokemon.enter_play(turn);
        let card = pokemon.id;
        debug!("{side} benches {} ({card})", pokemon.name);
        player.bench.push(pokemon);

        self.emit(GameEvent::Benched { side, card });
    }

    // === Evolve ===

    pub(super) fn check_evolve(&self, side: Side, hand_index: usize, target: Target) -> Result<(), ActionError> {
        self.ensure_turn(side, Phase::Playing)?;

        let player = &self.players[side];
        if !player.hand_card(hand_index)?.is_evolution() {
            return Err(ActionError::WrongCardKind {
                expected: "a Stage 1 Pokémon",
            });
        }
        let current = player.slot(target).ok_or(ActionError::EmptyTarget(target))?;
        if !current.is_basic() {
            return Err(ActionError::NotEvolvable);
        }
        if !current.can_evolve_on(self.turn) {
            return Err(ActionError::SameTurnEvolution);
        }
        Ok(())
    }

    /// Replace the target with the Stage 1 card. The Stage 1 keeps the
    /// Basic's damage and energy; the Basic goes to the discard pile.
    pub(super) fn do_evolve(&mut self, side: Side, hand_index: usize, target: Target) {
        let turn = self.turn;
        let player = &mut self.players[side];
        let Some(mut evolved) = player.take_pokemon_from_hand(hand_index) else {
            return;
        };
        let Some(prior) = player.slot(target) else {
            return;
        };
        evolved.evolve_from(prior, turn);

        let into = evolved.id;
        let name = evolved.name.clone();
        let Some(prior) = player.replace_slot(target, evolved) else {
            return;
        };
        let from = prior.id;
        info!("{side} evolves {} into {name}", prior.name);
        player.discard.push_back(prior.into_card());

        self.emit(GameEvent::Evolved {
            side,
            target,
            from,
            into,
        });
    }

    // === Energy ===

    pub(super) fn check_attach_energy(&self, side: Side, hand_index: usize, target: Target) -> Result<(), ActionError> {
        self.ensure_turn(side, Phase::Playing)?;

        let player = &self.players[side];
        if !player.hand_card(hand_index)?.is_energy() {
            return Err(ActionError::WrongCardKind {
                expected: "an Energy card",
            });
        }
        if player.slot(target).is_none() {
            return Err(ActionError::EmptyTarget(target));
        }
        if player.energy_attached_this_turn {
            return Err(ActionError::EnergyAlreadyAttached);
        }
        Ok(())
    }

    /// The Energy card is discarded; the target keeps a counter.
    pub(super) fn do_attach_energy(&mut self, side: Side, hand_index: usize, target: Target) {
        let player = &mut self.players[side];
        let Some(pokemon) = player.slot_mut(target) else {
            return;
        };
        pokemon.energy += 1;
        let total = pokemon.energy;

        let card = player.remove_from_hand(hand_index);
        let id = card.id;
        player.discard.push_back(card);
        player.energy_attached_this_turn = true;
        debug!("{side} attaches energy to {target} ({total} total)");

        self.emit(GameEvent::EnergyAttached {
            side,
            target,
            card: id,
            total,
        });
    }

    // === Trainers ===

    pub(super) fn check_play_supporter(
        &self,
        side: Side,
        hand_index: usize,
        call: Option<CoinSide>,
    ) -> Result<(), ActionError> {
        self.ensure_turn(side, Phase::Playing)?;

        let player = &self.players[side];
        let trainer = match &player.hand_card(hand_index)?.kind {
            CardKind::Supporter(trainer) => trainer,
            _ => return Err(ActionError::WrongCardKind { expected: "a Supporter" }),
        };
        if player.supporter_used_this_turn {
            return Err(ActionError::SupporterAlreadyUsed);
        }
        self.check_coin_call(side, trainer.requires_coin, call)
    }

    pub(super) fn check_play_item(&self, side: Side, hand_index: usize, call: Option<CoinSide>) -> Result<(), ActionError> {
        self.ensure_turn(side, Phase::Playing)?;

        let trainer = match &self.players[side].hand_card(hand_index)?.kind {
            CardKind::Item(trainer) => trainer,
            _ => return Err(ActionError::WrongCardKind { expected: "an Item" }),
        };
        self.check_coin_call(side, trainer.requires_coin, call)
    }

    /// The human must call coin-flip trainers; the opponent's call is
    /// made by the engine when absent.
    fn check_coin_call(&self, side: Side, requires_coin: bool, call: Option<CoinSide>) -> Result<(), ActionError> {
        if requires_coin && call.is_none() && side == Side::Human {
            return Err(ActionError::CoinCallRequired);
        }
        Ok(())
    }

    /// Play a Supporter or Item. The card leaves the hand first, resolves
    /// (or fails its flip) and lands in the discard pile.
    pub(super) fn do_play_trainer(&mut self, side: Side, hand_index: usize, call: Option<CoinSide>) {
        let card = self.players[side].remove_from_hand(hand_index);
        let Some(trainer) = card.trainer().cloned() else {
            self.players[side].hand.insert(hand_index, card);
            return;
        };
        let is_supporter = card.is_supporter();

        info!("{side} plays {}", trainer.name);
        self.emit(GameEvent::TrainerPlayed {
            side,
            card: card.id,
            name: trainer.name.clone(),
        });

        let succeeded = if trainer.requires_coin {
            let call = match call {
                Some(call) => call,
                None => self.rng.flip_coin(),
            };
            let result = self.rng.flip_coin();
            debug!("{side} calls {call}, coin shows {result}");
            self.emit(GameEvent::CoinFlipped { side, call, result });
            call == result
        } else {
            true
        };

        if succeeded {
            let outcome = resolve_effect(trainer.effect, &mut self.players[side], &mut self.rng);
            self.emit(GameEvent::EffectResolved { side, outcome });
        } else {
            info!("{} failed its coin flip", trainer.name);
            self.emit(GameEvent::EffectSkipped { side, card: card.id });
        }

        let player = &mut self.players[side];
        player.discard.push_back(card);
        if is_supporter {
            player.supporter_used_this_turn = true;
        }
    }

    // === Promote ===

    pub(super) fn check_promote(&self, side: Side, bench_index: usize) -> Result<(), ActionError> {
        self.ensure_turn(side, Phase::Playing)?;

        let player = &self.players[side];
        if player.active.is_some() {
            return Err(ActionError::ActiveOccupied);
        }
        if player.bench.is_empty() {
            return Err(ActionError::BenchEmpty);
        }
        if bench_index >= player.bench.len() {
            return Err(ActionError::BenchIndexOutOfRange {
                index: bench_index,
                len: player.bench.len(),
            });
        }
        Ok(())
    }

    pub(super) fn do_promote(&mut self, side: Side, bench_index: usize) {
        let card = self.players[side].promote(bench_index);
        debug!("{side} promotes {card}");
        self.emit(GameEvent::Promoted { side, card });
    }
}
