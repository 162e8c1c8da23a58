//! Match configuration.
//!
//! The ruleset constants live here rather than being scattered through the
//! engine. `MatchConfig::default()` is the standard ruleset; the `with_*`
//! builders exist for scenario tests and variant tables.

use serde::{Deserialize, Serialize};

/// Ruleset constants for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cards in a built deck. Custom deck lists only need `minimum_deck()`.
    pub deck_size: usize,

    /// Cards drawn for an opening hand (and after each mulligan).
    pub opening_hand: usize,

    /// Prize cards set aside per side at setup.
    pub prize_count: usize,

    /// Maximum Pokémon on a bench.
    pub bench_capacity: usize,

    /// Mulligans allowed in total, shared by both sides.
    pub max_mulligans: u32,

    /// Upper bound on mulligan re-check rounds during setup.
    pub mulligan_rounds: u32,

    /// Whether the first player draws on turn 1.
    /// Every later turn start always draws.
    pub first_turn_draw: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck_size: 60,
            opening_hand: 7,
            prize_count: 6,
            bench_capacity: 5,
            max_mulligans: 3,
            mulligan_rounds: 5,
            first_turn_draw: false,
        }
    }
}

impl MatchConfig {
    /// Set the shared mulligan budget.
    #[must_use]
    pub fn with_max_mulligans(mut self, max: u32) -> Self {
        self.max_mulligans = max;
        self
    }

    /// Set the prize count.
    #[must_use]
    pub fn with_prize_count(mut self, count: usize) -> Self {
        self.prize_count = count;
        self
    }

    /// Set whether the first player draws on turn 1.
    #[must_use]
    pub fn with_first_turn_draw(mut self, draw: bool) -> Self {
        self.first_turn_draw = draw;
        self
    }

    /// Cards a deck must hold to cover the opening hand and prizes.
    #[must_use]
    pub fn minimum_deck(&self) -> usize {
        self.opening_hand + self.prize_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.deck_size, 60);
        assert_eq!(config.opening_hand, 7);
        assert_eq!(config.prize_count, 6);
        assert_eq!(config.bench_capacity, 5);
        assert_eq!(config.max_mulligans, 3);
        assert!(!config.first_turn_draw);
        assert_eq!(config.minimum_deck(), 13);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_max_mulligans(0)
            .with_prize_count(1)
            .with_first_turn_draw(true);

        assert_eq!(config.max_mulligans, 0);
        assert_eq!(config.prize_count, 1);
        assert!(config.first_turn_draw);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
