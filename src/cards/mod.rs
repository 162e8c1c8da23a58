//! Card model and deck construction.
//!
//! ## Key Types
//!
//! - `Card`: id plus `CardKind` (Pokémon, Energy, Supporter, Item)
//! - `Pokemon`: Pokémon body with in-play HP, energy and entry turn
//! - `PokemonCard`: a Pokémon occupying an active or bench slot
//! - `Trainer`: Supporter/Item body tagged with an `EffectKind`
//!
//! `deck` builds the fixed 60-card list.

pub mod definition;
pub mod instance;
pub mod deck;

pub use definition::{Card, CardKind, PokemonCard, Trainer};
pub use instance::{Pokemon, Stage};
pub use deck::{build_deck, instantiate, label_counts, standard_deck, standard_kinds};
