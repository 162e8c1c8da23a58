//! One side's zones and per-turn flags.
//!
//! Zones partition the side's cards: every card is in exactly one of deck,
//! hand, discard, prizes, bench or the active slot. Cards are only ever
//! moved, never created or dropped, so `card_count` is constant for the
//! whole match.
//!
//! The deck is drawn from the front. Prizes are taken from the back.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, PokemonCard};
use crate::core::action::Target;
use crate::core::entity::CardUid;
use crate::core::error::ActionError;
use crate::core::rng::RandomSource;

/// Bench storage. Five slots inline, matching the default capacity.
pub type Bench = SmallVec<[PokemonCard; 5]>;

/// Zones and turn flags for one side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Display name.
    pub name: String,

    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    pub discard: Vector<Card>,
    pub prizes: Vector<Card>,
    pub bench: Bench,
    pub active: Option<PokemonCard>,

    pub energy_attached_this_turn: bool,
    pub supporter_used_this_turn: bool,
}

impl PlayerState {
    /// Create a side holding `deck` (front = top) and nothing else.
    #[must_use]
    pub fn new(name: impl Into<String>, deck: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            deck: deck.into_iter().collect(),
            hand: Vector::new(),
            discard: Vector::new(),
            prizes: Vector::new(),
            bench: Bench::new(),
            active: None,
            energy_attached_this_turn: false,
            supporter_used_this_turn: false,
        }
    }

    // === Deck ===

    /// Draw the top card into hand. `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<CardUid> {
        let card = self.deck.pop_front()?;
        let id = card.id;
        self.hand.push_back(card);
        Some(id)
    }

    /// Draw up to `count` cards, stopping early on an empty deck.
    /// Returns the number drawn.
    pub fn draw_up_to(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.draw().is_some()).count()
    }

    /// Move the top `count` deck cards into the prize pile.
    pub fn set_aside_prizes(&mut self, count: usize) -> usize {
        let mut moved = 0;
        while moved < count {
            match self.deck.pop_front() {
                Some(card) => self.prizes.push_back(card),
                None => break,
            }
            moved += 1;
        }
        moved
    }

    /// Shuffle the whole hand back into the deck.
    pub fn shuffle_hand_into_deck<R: RandomSource>(&mut self, rng: &mut R) {
        let mut cards: Vec<Card> = self.deck.iter().cloned().collect();
        cards.extend(std::mem::take(&mut self.hand));
        rng.shuffle(&mut cards);
        self.deck = cards.into_iter().collect();
    }

    /// Remove and return the first deck card matching `pred`, searching
    /// from the bottom.
    pub fn search_deck_from_bottom(&mut self, pred: impl Fn(&Card) -> bool) -> Option<Card> {
        let index = self.deck.iter().rposition(pred)?;
        Some(self.deck.remove(index))
    }

    // === Prizes ===

    /// Move one prize card into hand.
    pub fn take_prize(&mut self) -> Option<CardUid> {
        let card = self.prizes.pop_back()?;
        let id = card.id;
        self.hand.push_back(card);
        Some(id)
    }

    // === Hand ===

    /// Borrow a hand card, validating the index.
    pub fn hand_card(&self, index: usize) -> Result<&Card, ActionError> {
        self.hand.get(index).ok_or(ActionError::HandIndexOutOfRange {
            index,
            len: self.hand.len(),
        })
    }

    /// Remove a hand card. The index must already be validated.
    pub fn remove_from_hand(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    /// Remove a hand card as an in-play Pokémon. Leaves the hand untouched
    /// and returns `None` if the index is out of range or not a Pokémon.
    pub fn take_pokemon_from_hand(&mut self, index: usize) -> Option<PokemonCard> {
        self.hand.get(index)?.pokemon()?;
        self.hand.remove(index).into_pokemon().ok()
    }

    #[must_use]
    pub fn has_basic_in_hand(&self) -> bool {
        self.hand.iter().any(Card::is_basic_pokemon)
    }

    /// Index of the first hand card matching `pred`.
    #[must_use]
    pub fn find_in_hand(&self, pred: impl Fn(&Card) -> bool) -> Option<usize> {
        self.hand.iter().position(pred)
    }

    // === In play ===

    /// Borrow the Pokémon in a slot.
    #[must_use]
    pub fn slot(&self, target: Target) -> Option<&PokemonCard> {
        match target {
            Target::Active => self.active.as_ref(),
            Target::Bench(i) => self.bench.get(i),
        }
    }

    /// Mutably borrow the Pokémon in a slot.
    pub fn slot_mut(&mut self, target: Target) -> Option<&mut PokemonCard> {
        match target {
            Target::Active => self.active.as_mut(),
            Target::Bench(i) => self.bench.get_mut(i),
        }
    }

    /// Put `pokemon` into an occupied slot, returning the previous occupant.
    pub fn replace_slot(&mut self, target: Target, pokemon: PokemonCard) -> Option<PokemonCard> {
        self.slot_mut(target).map(|slot| std::mem::replace(slot, pokemon))
    }

    /// Move a bench Pokémon into the empty active slot. Returns its id.
    /// The index must already be validated.
    pub fn promote(&mut self, bench_index: usize) -> CardUid {
        debug_assert!(self.active.is_none(), "promote into an occupied active slot");
        let pokemon = self.bench.remove(bench_index);
        let id = pokemon.id;
        self.active = Some(pokemon);
        id
    }

    /// Every in-play Pokémon with its slot, active first.
    pub fn in_play(&self) -> impl Iterator<Item = (Target, &PokemonCard)> {
        self.active
            .iter()
            .map(|p| (Target::Active, p))
            .chain(self.bench.iter().enumerate().map(|(i, p)| (Target::Bench(i), p)))
    }

    // === Turn flags ===

    pub fn reset_turn_flags(&mut self) {
        self.energy_attached_this_turn = false;
        self.supporter_used_this_turn = false;
    }

    // === Accounting ===

    /// Total cards across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hand.len()
            + self.discard.len()
            + self.bench.len()
            + usize::from(self.active.is_some())
            + self.prizes.len()
    }

    /// Ids of every card this side holds, in no particular order.
    pub fn card_ids(&self) -> impl Iterator<Item = CardUid> + '_ {
        self.deck
            .iter()
            .chain(self.hand.iter())
            .chain(self.discard.iter())
            .chain(self.prizes.iter())
            .map(|c| c.id)
            .chain(self.in_play().map(|(_, p)| p.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, Pokemon};
    use crate::core::rng::GameRng;

    fn basic(id: u32) -> Card {
        Card::new(CardUid(id), CardKind::Pokemon(Pokemon::basic("BasicMon-1", 60, "Tackle", 20)))
    }

    fn energy(id: u32) -> Card {
        Card::new(CardUid(id), CardKind::Energy)
    }

    fn player_with(deck: Vec<Card>) -> PlayerState {
        PlayerState::new("You", deck)
    }

    #[test]
    fn test_draw_from_front() {
        let mut p = player_with(vec![energy(1), energy(2), energy(3)]);

        assert_eq!(p.draw(), Some(CardUid(1)));
        assert_eq!(p.hand.len(), 1);
        assert_eq!(p.deck.len(), 2);
    }

    #[test]
    fn test_draw_up_to_stops_on_empty() {
        let mut p = player_with(vec![energy(1), energy(2)]);

        assert_eq!(p.draw_up_to(3), 2);
        assert!(p.deck.is_empty());
        assert_eq!(p.draw(), None);
    }

    #[test]
    fn test_prizes_set_aside_and_taken() {
        let mut p = player_with((0..10).map(energy).collect());
        p.draw_up_to(3);

        assert_eq!(p.set_aside_prizes(6), 6);
        assert_eq!(p.prizes.front().map(|c| c.id), Some(CardUid(3)));
        assert_eq!(p.deck.len(), 1);

        assert_eq!(p.take_prize(), Some(CardUid(8)));
        assert_eq!(p.prizes.len(), 5);
        assert_eq!(p.hand.len(), 4);
    }

    #[test]
    fn test_hand_card_out_of_range() {
        let p = player_with(vec![]);
        assert_eq!(
            p.hand_card(0),
            Err(ActionError::HandIndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_shuffle_hand_into_deck_conserves() {
        let mut rng = GameRng::new(7);
        let mut p = player_with((0..20).map(energy).collect());
        p.draw_up_to(7);

        p.shuffle_hand_into_deck(&mut rng);

        assert!(p.hand.is_empty());
        assert_eq!(p.deck.len(), 20);
        assert_eq!(p.card_count(), 20);
    }

    #[test]
    fn test_take_pokemon_from_hand() {
        let mut p = player_with(vec![energy(1), basic(2)]);
        p.draw_up_to(2);

        assert!(p.take_pokemon_from_hand(0).is_none());
        assert!(p.take_pokemon_from_hand(5).is_none());
        assert_eq!(p.hand.len(), 2);

        let mon = p.take_pokemon_from_hand(1).expect("basic in hand");
        assert_eq!(mon.id, CardUid(2));
        assert_eq!(p.hand.len(), 1);
    }

    #[test]
    fn test_search_deck_from_bottom() {
        let mut p = player_with(vec![basic(1), energy(2), basic(3), energy(4)]);

        let found = p.search_deck_from_bottom(Card::is_basic_pokemon);
        assert_eq!(found.map(|c| c.id), Some(CardUid(3)));
        assert_eq!(p.deck.len(), 3);
    }

    #[test]
    fn test_slots_and_promote() {
        let mut p = player_with(vec![]);
        p.bench.push(basic(1).into_pokemon().unwrap());
        p.bench.push(basic(2).into_pokemon().unwrap());

        assert!(p.slot(Target::Active).is_none());
        assert_eq!(p.slot(Target::Bench(1)).map(|m| m.id), Some(CardUid(2)));

        assert_eq!(p.promote(0), CardUid(1));
        assert_eq!(p.bench.len(), 1);
        assert_eq!(p.in_play().count(), 2);
        assert_eq!(p.card_count(), 2);
    }

    #[test]
    fn test_card_ids_cover_all_zones() {
        let mut p = player_with((0..10).map(energy).collect());
        p.draw_up_to(2);
        p.set_aside_prizes(3);
        p.discard.push_back(energy(50));
        p.active = Some(basic(60).into_pokemon().unwrap());

        let mut ids: Vec<_> = p.card_ids().collect();
        ids.sort();
        assert_eq!(ids.len(), p.card_count());
        assert_eq!(ids.len(), 12);
    }
}
