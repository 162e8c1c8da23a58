//! Pokémon card bodies and their in-play state.
//!
//! HP is kept signed: damage can push it below zero internally. Anything
//! displayed goes through `displayed_hp`, which floors at zero.

use serde::{Deserialize, Serialize};

/// Pokémon rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Can be put into play directly from hand.
    Basic,
    /// Enters play only by evolving an in-play Basic.
    Stage1,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Basic => write!(f, "Basic"),
            Stage::Stage1 => write!(f, "Stage1"),
        }
    }
}

/// A Pokémon card body.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,

    /// Current HP. May go negative after a big hit.
    pub hp: i32,

    pub max_hp: i32,

    /// The Pokémon's single attack.
    pub attack_name: String,
    pub damage: i32,

    pub stage: Stage,

    /// Attached energy count.
    pub energy: u32,

    /// Turn this card entered the active or bench slot.
    /// `None` whenever it is in the deck, hand, discard or prizes.
    pub entered_play_on: Option<u32>,
}

impl Pokemon {
    /// Create a Basic Pokémon at full HP.
    #[must_use]
    pub fn basic(name: impl Into<String>, hp: i32, attack_name: impl Into<String>, damage: i32) -> Self {
        Self::with_stage(name, hp, attack_name, damage, Stage::Basic)
    }

    /// Create a Stage 1 Pokémon at full HP.
    #[must_use]
    pub fn stage1(name: impl Into<String>, hp: i32, attack_name: impl Into<String>, damage: i32) -> Self {
        Self::with_stage(name, hp, attack_name, damage, Stage::Stage1)
    }

    fn with_stage(
        name: impl Into<String>,
        hp: i32,
        attack_name: impl Into<String>,
        damage: i32,
        stage: Stage,
    ) -> Self {
        Self {
            name: name.into(),
            hp,
            max_hp: hp,
            attack_name: attack_name.into(),
            damage,
            stage,
            energy: 0,
            entered_play_on: None,
        }
    }

    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.stage == Stage::Basic
    }

    /// HP floored at zero.
    #[must_use]
    pub fn displayed_hp(&self) -> i32 {
        self.hp.max(0)
    }

    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.hp <= 0
    }

    /// Subtract damage from current HP.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// Restore up to `amount` HP, capped at max. Returns the HP restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }

    /// Stamp the turn this Pokémon arrived in play.
    pub fn enter_play(&mut self, turn: u32) {
        self.entered_play_on = Some(turn);
    }

    /// Clear in-play state when the card leaves play.
    pub fn leave_play(&mut self) {
        self.entered_play_on = None;
        self.energy = 0;
        self.hp = self.max_hp;
    }

    /// Whether this Pokémon has been in play since before `turn`.
    #[must_use]
    pub fn can_evolve_on(&self, turn: u32) -> bool {
        self.entered_play_on.is_some_and(|entered| entered < turn)
    }

    /// Take over `prior`'s slot: damage and energy carry over and the
    /// entry turn is re-stamped.
    pub fn evolve_from(&mut self, prior: &Pokemon, turn: u32) {
        self.hp = self.max_hp.min(prior.hp);
        self.energy = prior.energy;
        self.entered_play_on = Some(turn);
    }
}
