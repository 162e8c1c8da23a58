//! The fixed greedy opponent.

use log::{debug, warn};

use super::OpponentPolicy;
use crate::cards::{Card, CardKind};
use crate::core::{RandomSource, Side, Target};
use crate::effects::EffectKind;
use crate::rules::Match;

/// Fixed one-pass pipeline, no look-ahead:
///
/// 1. fill an empty active slot (bench front, else a Basic from hand)
/// 2. attach the first Energy in hand to the active
/// 3. play a "Draw 3" Supporter
/// 4. attack if the active has energy
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn ensure_active<R: RandomSource>(game: &mut Match<R>, side: Side) {
        if game.player(side).active.is_some() {
            return;
        }

        if game.player(side).bench.is_empty() {
            let Some(index) = game.player(side).find_in_hand(Card::is_basic_pokemon) else {
                warn!("{side} has no Pokémon to make active");
                return;
            };
            if let Err(err) = game.bench(side, index) {
                debug!("{side} could not bench: {err}");
                return;
            }
        }

        if let Err(err) = game.promote(side, 0) {
            debug!("{side} could not promote: {err}");
        }
    }

    fn attach_energy<R: RandomSource>(game: &mut Match<R>, side: Side) {
        let player = game.player(side);
        if player.energy_attached_this_turn || player.active.is_none() {
            return;
        }
        let Some(index) = player.find_in_hand(Card::is_energy) else {
            return;
        };
        if let Err(err) = game.attach_energy(side, index, Target::Active) {
            debug!("{side} could not attach energy: {err}");
        }
    }

    fn play_draw_supporter<R: RandomSource>(game: &mut Match<R>, side: Side) {
        let player = game.player(side);
        if player.supporter_used_this_turn {
            return;
        }
        let Some(index) = player.find_in_hand(is_draw_three) else {
            return;
        };
        if let Err(err) = game.play_supporter(side, index, None) {
            debug!("{side} could not play supporter: {err}");
        }
    }

    fn attack<R: RandomSource>(game: &mut Match<R>, side: Side) {
        let ready = game.player(side).active.as_ref().is_some_and(|p| p.energy >= 1);
        if !ready {
            return;
        }
        if let Err(err) = game.attack(side) {
            debug!("{side} could not attack: {err}");
        }
    }
}

fn is_draw_three(card: &Card) -> bool {
    matches!(&card.kind, CardKind::Supporter(t) if t.effect == EffectKind::Draw { count: 3 })
}

impl<R: RandomSource> OpponentPolicy<R> for GreedyPolicy {
    fn play_turn(&mut self, game: &mut Match<R>, side: Side) {
        Self::ensure_active(game, side);
        Self::attach_energy(game, side);
        Self::play_draw_supporter(game, side);
        Self::attack(game, side);
    }
}
