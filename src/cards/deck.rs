//! The fixed 60-card deck.
//!
//! Composition:
//! - 18 Basic Pokémon, names cycling over six templates, HP cycling
//!   60/70/80, "Tackle" for 20
//! - 6 Stage 1 Pokémon, 100 HP, "Strong Hit" for 50
//! - 20 Energy
//! - 6 Supporters: 2x Draw3, 2x Add2Energy, ReturnBench, Discard2
//! - 10 Items: 2x Draw2, 2x RetrieveDiscard, 2x Heal30, 4x AddEnergy
//!
//! Anything short of the target size is padded with Energy. The result is
//! shuffled with the match's `RandomSource`.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardKind, Trainer};
use super::instance::Pokemon;
use crate::core::entity::EntityAllocator;
use crate::core::rng::RandomSource;
use crate::effects::EffectKind;

const BASIC_COUNT: usize = 18;
const BASIC_TEMPLATES: usize = 6;
const STAGE1_COUNT: usize = 6;
const ENERGY_COUNT: usize = 20;

/// The fixed composition in list order, as card kinds.
#[must_use]
pub fn standard_kinds() -> Vec<CardKind> {
    let mut kinds = Vec::with_capacity(60);

    for i in 0..BASIC_COUNT {
        let name = format!("BasicMon-{}", i % BASIC_TEMPLATES + 1);
        let hp = 60 + (i % 3) as i32 * 10;
        kinds.push(CardKind::Pokemon(Pokemon::basic(name, hp, "Tackle", 20)));
    }

    for i in 0..STAGE1_COUNT {
        let name = format!("Stage1Mon-{}", i + 1);
        kinds.push(CardKind::Pokemon(Pokemon::stage1(name, 100, "Strong Hit", 50)));
    }

    kinds.extend(std::iter::repeat(CardKind::Energy).take(ENERGY_COUNT));

    let supporters = [
        ("Draw3", EffectKind::Draw { count: 3 }),
        ("Add2Energy", EffectKind::AddEnergyToActive { amount: 2 }),
        ("ReturnBench", EffectKind::ReturnFirstBenchToHand),
        ("Discard2", EffectKind::DiscardRandom { count: 2 }),
        ("Draw3", EffectKind::Draw { count: 3 }),
        ("Add2Energy", EffectKind::AddEnergyToActive { amount: 2 }),
    ];
    for (name, effect) in supporters {
        kinds.push(CardKind::Supporter(Trainer::new(name, effect)));
    }

    let items = [
        ("Draw2", EffectKind::Draw { count: 2 }, 2),
        ("RetrieveDiscard", EffectKind::RetrieveRandomFromDiscard, 2),
        ("Heal30", EffectKind::HealActive { amount: 30 }, 2),
        ("AddEnergy", EffectKind::AddEnergyToActive { amount: 1 }, 4),
    ];
    for (name, effect, copies) in items {
        for _ in 0..copies {
            kinds.push(CardKind::Item(Trainer::new(name, effect)));
        }
    }

    kinds
}

/// Allocate ids for a list of kinds, keeping their order.
pub fn instantiate(kinds: impl IntoIterator<Item = CardKind>, ids: &mut EntityAllocator) -> Vec<Card> {
    kinds.into_iter().map(|kind| Card::new(ids.alloc(), kind)).collect()
}

/// Build the standard deck padded to `size` with Energy, in list order.
#[must_use]
pub fn standard_deck(ids: &mut EntityAllocator, size: usize) -> Vec<Card> {
    let mut kinds = standard_kinds();
    if kinds.len() < size {
        kinds.resize(size, CardKind::Energy);
    }
    instantiate(kinds, ids)
}

/// Build and shuffle the standard deck.
pub fn build_deck<R: RandomSource>(rng: &mut R, ids: &mut EntityAllocator, size: usize) -> Vec<Card> {
    let mut deck = standard_deck(ids, size);
    rng.shuffle(&mut deck);
    deck
}

/// Count cards by label. Energy cards all count under "Energy".
#[must_use]
pub fn label_counts(cards: &[Card]) -> FxHashMap<&str, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card.label()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;

    #[test]
    fn test_standard_composition() {
        let mut ids = EntityAllocator::new();
        let deck = standard_deck(&mut ids, 60);

        assert_eq!(deck.len(), 60);
        assert_eq!(deck.iter().filter(|c| c.is_basic_pokemon()).count(), 18);
        assert_eq!(deck.iter().filter(|c| c.is_evolution()).count(), 6);
        assert_eq!(deck.iter().filter(|c| c.is_energy()).count(), 20);
        assert_eq!(deck.iter().filter(|c| c.is_supporter()).count(), 6);
        assert_eq!(deck.iter().filter(|c| c.is_item()).count(), 10);

        let counts = label_counts(&deck);
        assert_eq!(counts["BasicMon-1"], 3);
        assert_eq!(counts["Draw3"], 2);
        assert_eq!(counts["Add2Energy"], 2);
        assert_eq!(counts["ReturnBench"], 1);
        assert_eq!(counts["Discard2"], 1);
        assert_eq!(counts["AddEnergy"], 4);
    }

    #[test]
    fn test_basic_hp_cycles() {
        let kinds = standard_kinds();
        let hps: Vec<i32> = kinds[..6]
            .iter()
            .filter_map(|k| match k {
                CardKind::Pokemon(p) => Some(p.max_hp),
                _ => None,
            })
            .collect();

        assert_eq!(hps, vec![60, 70, 80, 60, 70, 80]);
    }

    #[test]
    fn test_padding_with_energy() {
        let mut ids = EntityAllocator::new();
        let deck = standard_deck(&mut ids, 64);

        assert_eq!(deck.len(), 64);
        assert_eq!(deck.iter().filter(|c| c.is_energy()).count(), 24);
    }

    #[test]
    fn test_unique_ids() {
        let mut ids = EntityAllocator::new();
        let a = standard_deck(&mut ids, 60);
        let b = standard_deck(&mut ids, 60);

        let mut all: Vec<_> = a.iter().chain(b.iter()).map(|c| c.id).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 120);
    }

    #[test]
    fn test_build_deck_shuffles() {
        let mut rng = GameRng::new(42);
        let mut ids = EntityAllocator::new();
        let deck = build_deck(&mut rng, &mut ids, 60);

        assert_eq!(deck.len(), 60);
        let ordered: Vec<_> = (0..60).map(crate::core::CardUid).collect();
        let shuffled: Vec<_> = deck.iter().map(|c| c.id).collect();
        assert_ne!(shuffled, ordered);
    }
}
