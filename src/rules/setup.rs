//! Dealing, mulligans and the transition into play.
//!
//! The human's mulligan is a question: when their opening hand has no
//! Basic the engine stops and waits for `AcceptMulligan` or
//! `DeclineMulligan`. The opponent mulligans automatically. Both draw on
//! one shared budget (`MatchConfig::max_mulligans`), and the exchange is
//! re-checked in rounds until nobody redraws or `mulligan_rounds` is hit.

use log::{debug, info, warn};

use super::engine::Match;
use crate::cards::{build_deck, instantiate, standard_deck, Card};
use crate::core::{ActionError, Phase, RandomSource, Side, WinReason};
use crate::events::GameEvent;
use crate::zones::PlayerState;

impl<R: RandomSource> Match<R> {
    /// Build both decks, draw opening hands, set prizes aside and start the
    /// mulligan exchange.
    pub(super) fn deal(&mut self) {
        for side in Side::ALL {
            let deck = match self.deck_lists[side].clone() {
                Some(kinds) => {
                    let mut cards = instantiate(kinds, &mut self.ids);
                    if self.shuffle_decks {
                        self.rng.shuffle(&mut cards);
                    }
                    cards
                }
                None if self.shuffle_decks => build_deck(&mut self.rng, &mut self.ids, self.config.deck_size),
                None => standard_deck(&mut self.ids, self.config.deck_size),
            };

            let mut state = PlayerState::new(side.to_string(), deck);
            state.draw_up_to(self.config.opening_hand);
            state.set_aside_prizes(self.config.prize_count);

            self.card_totals[side] = state.card_count();
            self.players[side] = state;
        }

        info!(
            "dealt {} cards each, {} prizes",
            self.config.opening_hand, self.config.prize_count
        );
        self.emit(GameEvent::Dealt);
        self.resolve_mulligans();
    }

    /// Whether `side` must redraw and still can.
    fn needs_mulligan(&self, side: Side) -> bool {
        !self.players[side].has_basic_in_hand() && self.mulligans < self.config.max_mulligans
    }

    /// Shuffle the hand back, redraw and charge the shared budget.
    fn mulligan_side(&mut self, side: Side) {
        let opening = self.config.opening_hand;
        let player = &mut self.players[side];
        player.shuffle_hand_into_deck(&mut self.rng);
        player.draw_up_to(opening);

        self.mulligans += 1;
        info!("{side} mulligans ({}/{})", self.mulligans, self.config.max_mulligans);
        self.emit(GameEvent::Mulligan {
            side,
            total: self.mulligans,
        });
    }

    /// Run mulligan rounds until nobody needs one, the budget runs out or
    /// the human has to answer an offer. A human left without a Basic loses.
    pub(super) fn resolve_mulligans(&mut self) {
        while self.mulligan.round < self.config.mulligan_rounds {
            if !self.mulligan.human_checked {
                self.mulligan.human_checked = true;
                if !self.mulligan.human_kept && self.needs_mulligan(Side::Human) {
                    self.mulligan.offered = true;
                    debug!("mulligan offered to {}", Side::Human);
                    self.emit(GameEvent::MulliganOffered);
                    return;
                }
            }

            let mut redrew = std::mem::take(&mut self.mulligan.human_redrew);
            if self.needs_mulligan(Side::Opponent) {
                self.mulligan_side(Side::Opponent);
                redrew = true;
            }

            self.mulligan.round += 1;
            self.mulligan.human_checked = false;
            if !redrew {
                break;
            }
        }

        if self.mulligans >= self.config.max_mulligans {
            warn!("mulligan budget of {} used up", self.config.max_mulligans);
            self.emit(GameEvent::MulliganBudgetExhausted);
        }

        // A kept hand with no Basic leaves nothing to put active.
        if !self.players[Side::Human].has_basic_in_hand() {
            warn!("{} keeps no Basic Pokémon", Side::Human);
            self.emit(GameEvent::NoActivePokemon { side: Side::Human });
            self.end_match(Side::Opponent, WinReason::NoPokemonAvailable);
        }
    }

    pub(super) fn check_mulligan_answer(&self, side: Side) -> Result<(), ActionError> {
        self.ensure_turn(side, Phase::Setup)?;
        if !self.mulligan.offered {
            return Err(ActionError::NoMulliganOffered);
        }
        Ok(())
    }

    pub(super) fn do_accept_mulligan(&mut self) {
        self.mulligan.offered = false;
        self.mulligan.human_redrew = true;
        self.mulligan_side(Side::Human);
        self.resolve_mulligans();
    }

    pub(super) fn do_decline_mulligan(&mut self) {
        self.mulligan.offered = false;
        self.mulligan.human_kept = true;
        info!("{} keeps a hand with no Basic", Side::Human);
        self.emit(GameEvent::MulliganDeclined);
        self.resolve_mulligans();
    }

    pub(super) fn check_choose_starting_active(&self, side: Side, bench_index: usize) -> Result<(), ActionError> {
        self.ensure_turn(side, Phase::Setup)?;
        if self.mulligan.offered {
            return Err(ActionError::MulliganPending);
        }
        let bench = &self.players[side].bench;
        if bench.is_empty() {
            return Err(ActionError::BenchEmpty);
        }
        if bench_index >= bench.len() {
            return Err(ActionError::BenchIndexOutOfRange {
                index: bench_index,
                len: bench.len(),
            });
        }
        Ok(())
    }

    /// Promote the human's pick, set up the opponent and start turn 1.
    pub(super) fn do_choose_starting_active(&mut self, bench_index: usize) {
        let card = self.players[Side::Human].promote(bench_index);
        self.emit(GameEvent::Promoted {
            side: Side::Human,
            card,
        });

        self.setup_opponent();
        if self.phase == Phase::Ended {
            return;
        }

        self.phase = Phase::Playing;
        self.current = Side::Human;
        for side in Side::ALL {
            self.players[side].reset_turn_flags();
        }
        info!("setup complete, {} goes first", Side::Human);
        self.emit(GameEvent::SetupComplete);

        let draw = self.config.first_turn_draw;
        self.start_turn(Side::Human, draw);
    }

    /// Bench the opponent's Basics, walking its hand from the back, and
    /// promote the first one benched. Falls back to the bottom-most Basic
    /// in its deck.
    fn setup_opponent(&mut self) {
        let side = Side::Opponent;
        let turn = self.turn;
        let capacity = self.config.bench_capacity;
        let player = &mut self.players[side];

        let mut benched = Vec::new();
        let mut i = player.hand.len();
        while i > 0 && player.bench.len() < capacity {
            i -= 1;
            if !player.hand[i].is_basic_pokemon() {
                continue;
            }
            if let Some(mut pokemon) = player.take_pokemon_from_hand(i) {
                pokemon.enter_play(turn);
                benched.push(pokemon.id);
                player.bench.push(pokemon);
            }
        }

        let promoted = if player.bench.is_empty() {
            let fallback = player
                .search_deck_from_bottom(Card::is_basic_pokemon)
                .and_then(|card| card.into_pokemon().ok());
            match fallback {
                Some(mut pokemon) => {
                    warn!("{side} has no Basic in hand, takes {} from its deck", pokemon.name);
                    pokemon.enter_play(turn);
                    let id = pokemon.id;
                    player.active = Some(pokemon);
                    Some(id)
                }
                None => None,
            }
        } else {
            Some(player.promote(0))
        };

        for card in benched {
            self.emit(GameEvent::Benched { side, card });
        }

        match promoted {
            Some(card) => self.emit(GameEvent::Promoted { side, card }),
            None => {
                warn!("{side} has no Basic Pokémon anywhere");
                self.emit(GameEvent::NoActivePokemon { side });
                self.end_match(side.other(), WinReason::NoPokemonAvailable);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::{CardKind, Pokemon};
    use crate::core::{ActionError, MatchConfig, Phase, SequenceRng, Side, WinReason};
    use crate::events::GameEvent;
    use crate::rules::{Match, MatchBuilder};

    fn basic() -> CardKind {
        CardKind::Pokemon(Pokemon::basic("BasicMon-1", 60, "Tackle", 20))
    }

    fn energy_deck(len: usize) -> Vec<CardKind> {
        vec![CardKind::Energy; len]
    }

    fn with_basic_at(index: usize, len: usize) -> Vec<CardKind> {
        let mut kinds = energy_deck(len);
        kinds[index] = basic();
        kinds
    }

    fn unshuffled(human: Vec<CardKind>, opponent: Vec<CardKind>) -> Match<SequenceRng> {
        MatchBuilder::new()
            .deck(Side::Human, human)
            .deck(Side::Opponent, opponent)
            .shuffle_decks(false)
            .build_with_rng(SequenceRng::constant(0.0))
    }

    #[test]
    fn test_no_offer_with_basic_in_hand() {
        let game = unshuffled(with_basic_at(0, 20), with_basic_at(0, 20));

        assert!(!game.mulligan_offered());
        assert_eq!(game.mulligan_count(), 0);
    }

    #[test]
    fn test_offer_and_decline() {
        let mut game = unshuffled(energy_deck(20), with_basic_at(0, 20));
        assert!(game.mulligan_offered());

        assert_eq!(game.bench(Side::Human, 0), Err(ActionError::MulliganPending));

        game.decline_mulligan().unwrap();
        assert!(!game.mulligan_offered());
        assert_eq!(game.mulligan_count(), 0);

        // Keeping a hand with no Basic loses the match.
        assert_eq!(game.phase(), Phase::Ended);
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.winner, Side::Opponent);
        assert_eq!(outcome.reason, WinReason::NoPokemonAvailable);
        assert!(game
            .events()
            .contains(&GameEvent::NoActivePokemon { side: Side::Human }));
        assert_eq!(game.decline_mulligan(), Err(ActionError::MatchEnded));
    }

    #[test]
    fn test_decline_without_offer_is_rejected() {
        let mut game = unshuffled(with_basic_at(0, 20), with_basic_at(0, 20));

        assert_eq!(game.decline_mulligan(), Err(ActionError::NoMulliganOffered));
        assert_eq!(game.phase(), Phase::Setup);
    }

    #[test]
    fn test_accept_redraws_seven() {
        // A constant-zero shuffle rotates the cards left by one, which moves
        // the Basic from the bottom of the remaining deck into the redraw.
        let mut game = unshuffled(with_basic_at(19, 20), with_basic_at(0, 20));
        assert!(game.mulligan_offered());

        game.accept_mulligan().unwrap();

        let human = game.player(Side::Human);
        assert_eq!(human.hand.len(), 7);
        assert_eq!(human.card_count(), 20);
        assert_eq!(game.mulligan_count(), 1);
    }

    #[test]
    fn test_opponent_mulligans_automatically() {
        let game = unshuffled(with_basic_at(0, 20), energy_deck(20));

        assert!(!game.mulligan_offered());
        assert_eq!(game.mulligan_count(), 3);
        assert!(game
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::Mulligan { side: Side::Opponent, total: 1 })));
        assert!(game.events().contains(&GameEvent::MulliganBudgetExhausted));
    }

    #[test]
    fn test_budget_is_shared() {
        let config = MatchConfig::default().with_max_mulligans(1);
        let mut game = MatchBuilder::new()
            .config(config)
            .deck(Side::Human, energy_deck(20))
            .deck(Side::Opponent, energy_deck(20))
            .shuffle_decks(false)
            .build_with_rng(SequenceRng::constant(0.0));

        game.accept_mulligan().unwrap();

        assert_eq!(game.mulligan_count(), 1);
        assert!(!game.mulligan_offered());
        assert_eq!(game.outcome().map(|o| o.winner), Some(Side::Opponent));
    }

    #[test]
    fn test_zero_budget_never_offers() {
        let config = MatchConfig::default().with_max_mulligans(0);
        let game = MatchBuilder::new()
            .config(config)
            .deck(Side::Human, energy_deck(20))
            .shuffle_decks(false)
            .build_with_rng(SequenceRng::constant(0.0));

        assert!(!game.mulligan_offered());
        assert_eq!(game.mulligan_count(), 0);
        assert_eq!(game.phase(), Phase::Ended);
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.winner, Side::Opponent);
        assert_eq!(outcome.reason, WinReason::NoPokemonAvailable);
        assert!(game.legal_commands(Side::Human).is_empty());
    }

    #[test]
    fn test_choose_starting_active_requires_bench() {
        let mut game = unshuffled(with_basic_at(0, 20), with_basic_at(0, 20));

        assert_eq!(game.choose_starting_active(0), Err(ActionError::BenchEmpty));

        game.bench(Side::Human, 0).unwrap();
        assert_eq!(
            game.choose_starting_active(1),
            Err(ActionError::BenchIndexOutOfRange { index: 1, len: 1 })
        );

        game.choose_starting_active(0).unwrap();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.current_side(), Side::Human);
        assert!(game.player(Side::Human).active.is_some());
        assert!(game.player(Side::Human).bench.is_empty());
    }

    #[test]
    fn test_opponent_benches_hand_basics() {
        let mut opponent = energy_deck(20);
        opponent[1] = basic();
        opponent[4] = CardKind::Pokemon(Pokemon::basic("BasicMon-2", 80, "Tackle", 20));
        let mut game = unshuffled(with_basic_at(0, 20), opponent);

        game.bench(Side::Human, 0).unwrap();
        game.choose_starting_active(0).unwrap();

        // The hand is walked from the back, so the later Basic goes active.
        let computer = game.player(Side::Opponent);
        assert_eq!(computer.active.as_ref().map(|p| p.max_hp), Some(80));
        assert_eq!(computer.bench.len(), 1);
        assert_eq!(computer.bench[0].max_hp, 60);
        assert_eq!(computer.bench[0].entered_play_on, Some(1));
        assert!(!computer.has_basic_in_hand());
    }

    #[test]
    fn test_opponent_falls_back_to_deck() {
        // The opponent's only Basic sits below the opening hand and the
        // prizes; its empty hand is kept once the budget is gone.
        let config = MatchConfig::default().with_max_mulligans(0);
        let mut game = MatchBuilder::new()
            .config(config)
            .deck(Side::Human, with_basic_at(0, 20))
            .deck(Side::Opponent, with_basic_at(18, 20))
            .shuffle_decks(false)
            .build_with_rng(SequenceRng::constant(0.0));

        game.bench(Side::Human, 0).unwrap();
        game.choose_starting_active(0).unwrap();

        let computer = game.player(Side::Opponent);
        assert!(computer.active.is_some());
        assert_eq!(computer.deck.len(), 6);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_opponent_without_pokemon_loses() {
        let config = MatchConfig::default().with_max_mulligans(0);
        let mut game = MatchBuilder::new()
            .config(config)
            .deck(Side::Human, with_basic_at(0, 20))
            .deck(Side::Opponent, energy_deck(20))
            .shuffle_decks(false)
            .build_with_rng(SequenceRng::constant(0.0));

        game.bench(Side::Human, 0).unwrap();
        game.choose_starting_active(0).unwrap();

        assert_eq!(game.phase(), Phase::Ended);
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.winner, Side::Human);
        assert_eq!(outcome.reason, WinReason::NoPokemonAvailable);
    }

    #[test]
    fn test_opponent_cannot_act_in_setup() {
        let mut game = unshuffled(with_basic_at(0, 20), with_basic_at(0, 20));

        assert_eq!(game.bench(Side::Opponent, 0), Err(ActionError::NotYourTurn(Side::Opponent)));
    }
}
