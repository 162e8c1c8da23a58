//! Effect resolution - running a trainer procedure against one side.
//!
//! Resolution only touches the caller's own `PlayerState`. Once-per-turn
//! bookkeeping for Supporters belongs to the engine, not to the effects.

use log::debug;

use super::effect::{EffectKind, EffectOutcome, NoEffectReason};
use crate::core::rng::RandomSource;
use crate::zones::PlayerState;

/// Run `effect` for `player`.
pub fn resolve_effect<R: RandomSource>(
    effect: EffectKind,
    player: &mut PlayerState,
    rng: &mut R,
) -> EffectOutcome {
    let outcome = match effect {
        EffectKind::Draw { count } => EffectOutcome::Drew {
            count: player.draw_up_to(usize::from(count)),
        },

        EffectKind::AddEnergyToActive { amount } => match player.active.as_mut() {
            Some(active) => {
                active.energy += amount;
                EffectOutcome::EnergyAdded { target: active.id, amount }
            }
            None => EffectOutcome::NoEffect { reason: NoEffectReason::NoActive },
        },

        EffectKind::ReturnFirstBenchToHand => {
            if player.bench.is_empty() {
                EffectOutcome::NoEffect { reason: NoEffectReason::BenchEmpty }
            } else {
                let card = player.bench.remove(0).into_card();
                let id = card.id;
                player.hand.push_back(card);
                EffectOutcome::ReturnedToHand { card: id }
            }
        }

        EffectKind::DiscardRandom { count } => {
            if player.hand.is_empty() {
                EffectOutcome::NoEffect { reason: NoEffectReason::HandEmpty }
            } else {
                let mut cards = Vec::new();
                for _ in 0..count {
                    if player.hand.is_empty() {
                        break;
                    }
                    let index = rng.gen_index(player.hand.len());
                    let card = player.hand.remove(index);
                    cards.push(card.id);
                    player.discard.push_back(card);
                }
                EffectOutcome::Discarded { cards }
            }
        }

        EffectKind::RetrieveRandomFromDiscard => {
            if player.discard.is_empty() {
                EffectOutcome::NoEffect { reason: NoEffectReason::DiscardEmpty }
            } else {
                let index = rng.gen_index(player.discard.len());
                let card = player.discard.remove(index);
                let id = card.id;
                player.hand.push_back(card);
                EffectOutcome::Retrieved { card: id }
            }
        }

        EffectKind::HealActive { amount } => match player.active.as_mut() {
            Some(active) => EffectOutcome::Healed {
                target: active.id,
                amount: active.heal(amount),
            },
            None => EffectOutcome::NoEffect { reason: NoEffectReason::NoActive },
        },
    };

    debug!("{}: {} -> {:?}", player.name, effect, outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardKind, Pokemon};
    use crate::core::entity::CardUid;
    use crate::core::rng::SequenceRng;

    fn energy(id: u32) -> Card {
        Card::new(CardUid(id), CardKind::Energy)
    }

    fn basic(id: u32) -> Card {
        Card::new(CardUid(id), CardKind::Pokemon(Pokemon::basic("BasicMon-1", 60, "Tackle", 20)))
    }

    fn player() -> PlayerState {
        PlayerState::new("You", (0..10).map(energy).collect())
    }

    #[test]
    fn test_draw_three() {
        let mut p = player();
        let mut rng = SequenceRng::constant(0.0);

        let outcome = resolve_effect(EffectKind::Draw { count: 3 }, &mut p, &mut rng);

        assert_eq!(outcome, EffectOutcome::Drew { count: 3 });
        assert_eq!(p.hand.len(), 3);
        assert_eq!(p.deck.len(), 7);
    }

    #[test]
    fn test_draw_short_deck() {
        let mut p = PlayerState::new("You", vec![energy(1)]);
        let mut rng = SequenceRng::constant(0.0);

        let outcome = resolve_effect(EffectKind::Draw { count: 2 }, &mut p, &mut rng);
        assert_eq!(outcome, EffectOutcome::Drew { count: 1 });
    }

    #[test]
    fn test_add_energy_needs_active() {
        let mut p = player();
        let mut rng = SequenceRng::constant(0.0);

        let outcome = resolve_effect(EffectKind::AddEnergyToActive { amount: 2 }, &mut p, &mut rng);
        assert_eq!(outcome, EffectOutcome::NoEffect { reason: NoEffectReason::NoActive });

        p.active = Some(basic(20).into_pokemon().unwrap());
        let outcome = resolve_effect(EffectKind::AddEnergyToActive { amount: 2 }, &mut p, &mut rng);
        assert_eq!(outcome, EffectOutcome::EnergyAdded { target: CardUid(20), amount: 2 });
        assert_eq!(p.active.as_ref().unwrap().energy, 2);
    }

    #[test]
    fn test_return_first_bench() {
        let mut p = player();
        let mut rng = SequenceRng::constant(0.0);

        let outcome = resolve_effect(EffectKind::ReturnFirstBenchToHand, &mut p, &mut rng);
        assert_eq!(outcome, EffectOutcome::NoEffect { reason: NoEffectReason::BenchEmpty });

        let mut benched = basic(20).into_pokemon().unwrap();
        benched.enter_play(1);
        p.bench.push(benched);
        p.bench.push(basic(21).into_pokemon().unwrap());

        let outcome = resolve_effect(EffectKind::ReturnFirstBenchToHand, &mut p, &mut rng);
        assert_eq!(outcome, EffectOutcome::ReturnedToHand { card: CardUid(20) });
        assert_eq!(p.bench.len(), 1);

        let returned = p.hand.back().unwrap();
        assert_eq!(returned.pokemon().unwrap().entered_play_on, None);
    }

    #[test]
    fn test_discard_random_takes_what_exists() {
        let mut p = player();
        p.draw_up_to(1);
        let mut rng = SequenceRng::constant(0.0);

        let outcome = resolve_effect(EffectKind::DiscardRandom { count: 2 }, &mut p, &mut rng);

        assert_eq!(outcome, EffectOutcome::Discarded { cards: vec![CardUid(0)] });
        assert!(p.hand.is_empty());
        assert_eq!(p.discard.len(), 1);

        let outcome = resolve_effect(EffectKind::DiscardRandom { count: 2 }, &mut p, &mut rng);
        assert_eq!(outcome, EffectOutcome::NoEffect { reason: NoEffectReason::HandEmpty });
    }

    #[test]
    fn test_retrieve_uses_rng_pick() {
        let mut p = player();
        p.discard.push_back(energy(30));
        p.discard.push_back(energy(31));
        p.discard.push_back(energy(32));
        let mut rng = SequenceRng::constant(0.5);

        let outcome = resolve_effect(EffectKind::RetrieveRandomFromDiscard, &mut p, &mut rng);

        assert_eq!(outcome, EffectOutcome::Retrieved { card: CardUid(31) });
        assert_eq!(p.discard.len(), 2);
        assert_eq!(p.hand.len(), 1);
    }

    #[test]
    fn test_heal_active() {
        let mut p = player();
        let mut rng = SequenceRng::constant(0.0);
        let mut active = basic(20).into_pokemon().unwrap();
        active.take_damage(10);
        p.active = Some(active);

        let outcome = resolve_effect(EffectKind::HealActive { amount: 30 }, &mut p, &mut rng);
        assert_eq!(outcome, EffectOutcome::Healed { target: CardUid(20), amount: 10 });
        assert_eq!(p.active.as_ref().unwrap().hp, 60);
    }
}
