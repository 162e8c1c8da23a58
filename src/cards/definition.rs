//! Card values.
//!
//! A `Card` is an id plus one of four kinds. Pokémon carry their mutable
//! in-play fields inline (current HP, attached energy, entry turn); the other
//! kinds are plain data. Trainer effects are an `EffectKind` tag, never a
//! callback, so cards stay cloneable and serializable.

use serde::{Deserialize, Serialize};

use super::instance::{Pokemon, Stage};
use crate::core::entity::CardUid;
use crate::effects::EffectKind;

/// A Supporter or Item card body.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trainer {
    /// Card name (for display/debugging).
    pub name: String,

    /// Procedure run when the card resolves.
    pub effect: EffectKind,

    /// Whether the player must win a coin call for the effect to apply.
    pub requires_coin: bool,
}

impl Trainer {
    /// Create a trainer body that always resolves.
    #[must_use]
    pub fn new(name: impl Into<String>, effect: EffectKind) -> Self {
        Self {
            name: name.into(),
            effect,
            requires_coin: false,
        }
    }

    /// Require a coin call (builder pattern).
    #[must_use]
    pub fn with_coin(mut self) -> Self {
        self.requires_coin = true;
        self
    }
}

/// The four card kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Pokemon(Pokemon),
    Energy,
    Supporter(Trainer),
    Item(Trainer),
}

impl CardKind {
    /// Human-readable kind name.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            CardKind::Pokemon(_) => "Pokémon",
            CardKind::Energy => "Energy",
            CardKind::Supporter(_) => "Supporter",
            CardKind::Item(_) => "Item",
        }
    }
}

/// A physical card.
///
/// ## Example
///
/// ```
/// use tcg_lite::cards::{Card, CardKind, Pokemon};
/// use tcg_lite::core::CardUid;
///
/// let card = Card::new(CardUid(7), CardKind::Pokemon(Pokemon::basic("BasicMon-1", 60, "Tackle", 20)));
///
/// assert!(card.is_basic_pokemon());
/// assert_eq!(card.label(), "BasicMon-1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardUid,
    pub kind: CardKind,
}

impl Card {
    #[must_use]
    pub fn new(id: CardUid, kind: CardKind) -> Self {
        Self { id, kind }
    }

    /// The Pokémon body, if this is a Pokémon card.
    #[must_use]
    pub fn pokemon(&self) -> Option<&Pokemon> {
        match &self.kind {
            CardKind::Pokemon(p) => Some(p),
            _ => None,
        }
    }

    /// The trainer body, if this is a Supporter or Item.
    #[must_use]
    pub fn trainer(&self) -> Option<&Trainer> {
        match &self.kind {
            CardKind::Supporter(t) | CardKind::Item(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_energy(&self) -> bool {
        matches!(self.kind, CardKind::Energy)
    }

    #[must_use]
    pub fn is_supporter(&self) -> bool {
        matches!(self.kind, CardKind::Supporter(_))
    }

    #[must_use]
    pub fn is_item(&self) -> bool {
        matches!(self.kind, CardKind::Item(_))
    }

    #[must_use]
    pub fn is_basic_pokemon(&self) -> bool {
        self.pokemon().is_some_and(|p| p.stage == Stage::Basic)
    }

    /// Pokémon card that can only enter play by evolving.
    #[must_use]
    pub fn is_evolution(&self) -> bool {
        self.pokemon().is_some_and(|p| p.stage != Stage::Basic)
    }

    /// Display label: the card name, or the kind for Energy.
    #[must_use]
    pub fn label(&self) -> &str {
        match &self.kind {
            CardKind::Pokemon(p) => &p.name,
            CardKind::Supporter(t) | CardKind::Item(t) => &t.name,
            CardKind::Energy => "Energy",
        }
    }

    /// Convert into an in-play Pokémon, handing the card back if it is not one.
    pub fn into_pokemon(self) -> Result<PokemonCard, Card> {
        match self.kind {
            CardKind::Pokemon(pokemon) => Ok(PokemonCard { id: self.id, pokemon }),
            kind => Err(Card { id: self.id, kind }),
        }
    }
}

/// A Pokémon card occupying an active or bench slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonCard {
    pub id: CardUid,
    pub pokemon: Pokemon,
}

impl PokemonCard {
    /// Put the card back into a non-play zone, clearing in-play state.
    #[must_use]
    pub fn into_card(mut self) -> Card {
        self.pokemon.leave_play();
        Card {
            id: self.id,
            kind: CardKind::Pokemon(self.pokemon),
        }
    }
}

impl std::ops::Deref for PokemonCard {
    type Target = Pokemon;

    fn deref(&self) -> &Pokemon {
        &self.pokemon
    }
}

impl std::ops::DerefMut for PokemonCard {
    fn deref_mut(&mut self) -> &mut Pokemon {
        &mut self.pokemon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(id: u32) -> Card {
        Card::new(CardUid(id), CardKind::Pokemon(Pokemon::basic("BasicMon-1", 60, "Tackle", 20)))
    }

    #[test]
    fn test_kind_predicates() {
        let energy = Card::new(CardUid(1), CardKind::Energy);
        let item = Card::new(CardUid(2), CardKind::Item(Trainer::new("Heal30", EffectKind::HealActive { amount: 30 })));
        let stage1 = Card::new(
            CardUid(3),
            CardKind::Pokemon(Pokemon::stage1("Stage1Mon-1", 100, "Strong Hit", 50)),
        );

        assert!(energy.is_energy());
        assert!(item.is_item());
        assert!(!item.is_supporter());
        assert!(basic(0).is_basic_pokemon());
        assert!(stage1.is_evolution());
        assert!(!stage1.is_basic_pokemon());
        assert_eq!(energy.label(), "Energy");
        assert_eq!(item.label(), "Heal30");
    }

    #[test]
    fn test_into_pokemon_round_trip() {
        let in_play = basic(5).into_pokemon().expect("is a Pokémon");
        assert_eq!(in_play.id, CardUid(5));
        assert_eq!(in_play.hp, 60);

        let energy = Card::new(CardUid(6), CardKind::Energy);
        let rejected = energy.clone().into_pokemon().unwrap_err();
        assert_eq!(rejected, energy);
    }

    #[test]
    fn test_into_card_clears_play_state() {
        let mut in_play = basic(5).into_pokemon().unwrap();
        in_play.enter_play(3);
        in_play.energy = 2;
        in_play.take_damage(40);

        let card = in_play.into_card();
        let pokemon = card.pokemon().unwrap();
        assert_eq!(pokemon.entered_play_on, None);
        assert_eq!(pokemon.energy, 0);
        assert_eq!(pokemon.hp, pokemon.max_hp);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(
            CardUid(9),
            CardKind::Supporter(Trainer::new("Draw3", EffectKind::Draw { count: 3 }).with_coin()),
        );

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
