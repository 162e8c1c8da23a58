//! Attacks, knockouts and turn hand-over.

use log::{debug, info};

use super::engine::Match;
use crate::core::{ActionError, Phase, RandomSource, Side, WinReason};
use crate::events::GameEvent;

/// Energy an active Pokémon needs before it may attack.
const ATTACK_COST: u32 = 1;

impl<R: RandomSource> Match<R> {
    pub(super) fn check_attack(&self, side: Side) -> Result<(), ActionError> {
        self.ensure_turn(side, Phase::Playing)?;

        let attacker = self.players[side].active.as_ref().ok_or(ActionError::NoActivePokemon)?;
        if attacker.energy < ATTACK_COST {
            return Err(ActionError::NotEnoughEnergy { required: ATTACK_COST });
        }
        if self.players[side.other()].active.is_none() {
            return Err(ActionError::NoDefendingPokemon);
        }
        Ok(())
    }

    /// Deal the attack's damage, resolve a knockout, then pass the turn
    /// unless the match is over.
    pub(super) fn do_attack(&mut self, side: Side) {
        let (own, foe) = self.players.split_mut(side);
        let (Some(attacker), Some(defender)) = (own.active.as_ref(), foe.active.as_mut()) else {
            return;
        };

        defender.take_damage(attacker.damage);
        let event = GameEvent::Attacked {
            side,
            attacker: attacker.id,
            defender: defender.id,
            damage: attacker.damage,
            remaining_hp: defender.displayed_hp(),
        };
        info!(
            "{side}'s {} uses {} on {} for {} ({} HP left)",
            attacker.name,
            attacker.attack_name,
            defender.name,
            attacker.damage,
            defender.displayed_hp()
        );
        let knocked_out = defender.is_knocked_out();
        self.emit(event);

        if knocked_out {
            self.knock_out(side);
        }
        if self.phase == Phase::Playing {
            self.pass_turn();
        }
    }

    /// The defender's active is knocked out: discard it, pay a prize,
    /// promote a replacement and check for a winner.
    fn knock_out(&mut self, attacker: Side) {
        let defender = attacker.other();

        if let Some(fallen) = self.players[defender].active.take() {
            let card = fallen.id;
            info!("{defender}'s {} is knocked out", fallen.name);
            self.players[defender].discard.push_back(fallen.into_card());
            self.emit(GameEvent::KnockedOut { side: defender, card });
        }

        if self.players[attacker].take_prize().is_some() {
            let remaining = self.players[attacker].prizes.len();
            debug!("{attacker} takes a prize, {remaining} left");
            self.emit(GameEvent::PrizeTaken { side: attacker, remaining });
        }

        if self.players[defender].bench.is_empty() {
            self.end_match(attacker, WinReason::NoBenchToPromote);
            return;
        }
        let card = self.players[defender].promote(0);
        self.emit(GameEvent::Promoted { side: defender, card });

        if self.players[attacker].prizes.is_empty() {
            self.end_match(attacker, WinReason::AllPrizesTaken);
        }
    }

    /// Hand the turn to the other side.
    pub(super) fn pass_turn(&mut self) {
        let ending = self.current;
        self.emit(GameEvent::TurnEnded {
            side: ending,
            turn: self.turn,
        });

        self.current = ending.other();
        self.turn += 1;
        self.sequence = 0;
        self.start_turn(self.current, true);
    }

    /// Reset `side`'s turn flags and optionally draw. Drawing from an
    /// empty deck loses the match.
    pub(super) fn start_turn(&mut self, side: Side, draw: bool) {
        self.players[side].reset_turn_flags();
        debug!("turn {} begins for {side}", self.turn);
        self.emit(GameEvent::TurnStarted { side, turn: self.turn });

        if !draw {
            return;
        }
        match self.players[side].draw() {
            Some(_) => self.emit(GameEvent::CardDrawn { side }),
            None => {
                info!("{side} cannot draw");
                self.end_match(side.other(), WinReason::DeckOut);
            }
        }
    }
}
