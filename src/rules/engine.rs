//! Match state, construction and command dispatch.

use im::Vector;
use log::{debug, info, warn};

use crate::cards::CardKind;
use crate::core::{
    ActionError, ActionRecord, CoinSide, Command, EntityAllocator, GameRng, MatchConfig, Outcome, Phase,
    RandomSource, Side, SideMap, Target, WinReason,
};
use crate::events::GameEvent;
use crate::policy::OpponentPolicy;
use crate::zones::PlayerState;

/// Progress of the mulligan exchange during setup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct MulliganState {
    /// Completed re-check rounds.
    pub round: u32,
    /// The human's hand was already checked this round.
    pub human_checked: bool,
    /// The human redrew this round.
    pub human_redrew: bool,
    /// The human chose to keep a hand without a Basic.
    pub human_kept: bool,
    /// An offer is waiting for an answer.
    pub offered: bool,
}

/// A two-player match.
///
/// Generic over the randomness source so tests can script every shuffle
/// and coin flip. Matches built by `MatchBuilder::build` use `GameRng`.
///
/// ```
/// use tcg_lite::core::{Phase, Side};
/// use tcg_lite::rules::MatchBuilder;
///
/// let game = MatchBuilder::new().seed(42).build();
///
/// assert_eq!(game.phase(), Phase::Setup);
/// assert_eq!(game.player(Side::Human).prizes.len(), 6);
/// assert_eq!(game.player(Side::Opponent).card_count(), 60);
/// ```
#[derive(Clone, Debug)]
pub struct Match<R: RandomSource = GameRng> {
    pub(super) config: MatchConfig,
    pub(super) players: SideMap<PlayerState>,
    pub(super) current: Side,
    pub(super) turn: u32,
    pub(super) phase: Phase,
    /// Mulligans taken so far, shared by both sides.
    pub(super) mulligans: u32,
    pub(super) mulligan: MulliganState,
    pub(super) outcome: Option<Outcome>,
    pub(super) rng: R,
    pub(super) ids: EntityAllocator,
    /// Custom deck lists. `None` uses the standard deck.
    pub(super) deck_lists: SideMap<Option<Vec<CardKind>>>,
    pub(super) shuffle_decks: bool,
    /// Cards each side was dealt, for conservation checks.
    pub(super) card_totals: SideMap<usize>,
    pub(super) events: Vec<GameEvent>,
    pub(super) history: Vector<ActionRecord>,
    /// Commands applied so far this turn.
    pub(super) sequence: u32,
}

/// Builder for a `Match`.
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    config: MatchConfig,
    seed: u64,
    decks: SideMap<Option<Vec<CardKind>>>,
    shuffle_decks: bool,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            seed: 0,
            decks: SideMap::with_default(),
            shuffle_decks: true,
        }
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a fixed deck list for one side instead of the standard deck.
    /// The front of the list is the top of the deck when unshuffled.
    pub fn deck(mut self, side: Side, kinds: Vec<CardKind>) -> Self {
        self.decks[side] = Some(kinds);
        self
    }

    /// Whether decks are shuffled before dealing. Defaults to true.
    pub fn shuffle_decks(mut self, shuffle: bool) -> Self {
        self.shuffle_decks = shuffle;
        self
    }

    /// Build a match seeded with `GameRng`, dealt and waiting in setup.
    pub fn build(self) -> Match<GameRng> {
        let rng = GameRng::new(self.seed);
        self.build_with_rng(rng)
    }

    /// Build a match drawing randomness from `rng`.
    ///
    /// # Panics
    ///
    /// Panics if a custom deck list is shorter than the opening hand plus
    /// prizes.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> Match<R> {
        let minimum = self.config.minimum_deck();
        for (side, deck) in self.decks.iter() {
            if let Some(kinds) = deck {
                assert!(
                    kinds.len() >= minimum,
                    "{side} deck has {} cards, needs at least {minimum}",
                    kinds.len()
                );
            }
        }

        let mut game = Match {
            players: SideMap::new(|side| PlayerState::new(side.to_string(), Vec::new())),
            config: self.config,
            current: Side::Human,
            turn: 1,
            phase: Phase::Setup,
            mulligans: 0,
            mulligan: MulliganState::default(),
            outcome: None,
            rng,
            ids: EntityAllocator::new(),
            deck_lists: self.decks,
            shuffle_decks: self.shuffle_decks,
            card_totals: SideMap::with_default(),
            events: Vec::new(),
            history: Vector::new(),
            sequence: 0,
        };
        game.deal();
        game
    }
}

impl Match<GameRng> {
    /// Standard match with both sides on the standard deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        MatchBuilder::new().seed(seed).build()
    }
}

impl<R: RandomSource> Match<R> {
    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn number, starting at 1 when play begins.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The side allowed to act.
    #[must_use]
    pub fn current_side(&self) -> Side {
        self.current
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    /// Direct access to a side's zones.
    ///
    /// Bypasses every rule. Meant for arranging scenarios in tests and
    /// tooling, not for play.
    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.players[side]
    }

    /// Mulligans taken so far by both sides together.
    #[must_use]
    pub fn mulligan_count(&self) -> u32 {
        self.mulligans
    }

    /// Whether the human must answer a mulligan offer before anything else.
    #[must_use]
    pub fn mulligan_offered(&self) -> bool {
        self.mulligan.offered
    }

    /// Every accepted command, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Events queued since the last drain.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Throw the current match away and deal a fresh one with the same
    /// configuration, deck lists and randomness source.
    pub fn restart(&mut self) {
        info!("restarting match");
        self.ids = EntityAllocator::new();
        self.current = Side::Human;
        self.turn = 1;
        self.phase = Phase::Setup;
        self.mulligans = 0;
        self.mulligan = MulliganState::default();
        self.outcome = None;
        self.events.clear();
        self.history = Vector::new();
        self.sequence = 0;
        self.deal();
    }

    // === Commands ===

    /// Validate and apply a command for `side`.
    ///
    /// On success the command is appended to the history. On error the
    /// match is unchanged.
    pub fn apply(&mut self, side: Side, command: Command) -> Result<(), ActionError> {
        self.check(side, &command)?;

        let (turn, sequence) = (self.turn, self.sequence);
        debug!("{side}: {} (turn {turn}, #{sequence})", command.name());

        match command {
            Command::AcceptMulligan => self.do_accept_mulligan(),
            Command::DeclineMulligan => self.do_decline_mulligan(),
            Command::Bench { hand_index } => self.do_bench(side, hand_index),
            Command::ChooseStartingActive { bench_index } => self.do_choose_starting_active(bench_index),
            Command::AttachEnergy { hand_index, target } => self.do_attach_energy(side, hand_index, target),
            Command::Evolve { hand_index, target } => self.do_evolve(side, hand_index, target),
            Command::PlaySupporter { hand_index, call } | Command::PlayItem { hand_index, call } => {
                self.do_play_trainer(side, hand_index, call)
            }
            Command::Promote { bench_index } => self.do_promote(side, bench_index),
            Command::Attack => self.do_attack(side),
            Command::EndTurn => self.pass_turn(),
        }

        self.history.push_back(ActionRecord::new(side, command, turn, sequence));
        if self.turn == turn {
            self.sequence += 1;
        }
        Ok(())
    }

    /// Validate a command without applying it.
    pub fn check(&self, side: Side, command: &Command) -> Result<(), ActionError> {
        match *command {
            Command::AcceptMulligan | Command::DeclineMulligan => self.check_mulligan_answer(side),
            Command::Bench { hand_index } => self.check_bench(side, hand_index),
            Command::ChooseStartingActive { bench_index } => self.check_choose_starting_active(side, bench_index),
            Command::AttachEnergy { hand_index, target } => self.check_attach_energy(side, hand_index, target),
            Command::Evolve { hand_index, target } => self.check_evolve(side, hand_index, target),
            Command::PlaySupporter { hand_index, call } => self.check_play_supporter(side, hand_index, call),
            Command::PlayItem { hand_index, call } => self.check_play_item(side, hand_index, call),
            Command::Promote { bench_index } => self.check_promote(side, bench_index),
            Command::Attack => self.check_attack(side),
            Command::EndTurn => self.ensure_turn(side, Phase::Playing),
        }
    }

    pub fn accept_mulligan(&mut self) -> Result<(), ActionError> {
        self.apply(Side::Human, Command::AcceptMulligan)
    }

    pub fn decline_mulligan(&mut self) -> Result<(), ActionError> {
        self.apply(Side::Human, Command::DeclineMulligan)
    }

    pub fn bench(&mut self, side: Side, hand_index: usize) -> Result<(), ActionError> {
        self.apply(side, Command::Bench { hand_index })
    }

    pub fn choose_starting_active(&mut self, bench_index: usize) -> Result<(), ActionError> {
        self.apply(Side::Human, Command::ChooseStartingActive { bench_index })
    }

    pub fn attach_energy(&mut self, side: Side, hand_index: usize, target: Target) -> Result<(), ActionError> {
        self.apply(side, Command::AttachEnergy { hand_index, target })
    }

    pub fn evolve(&mut self, side: Side, hand_index: usize, target: Target) -> Result<(), ActionError> {
        self.apply(side, Command::Evolve { hand_index, target })
    }

    pub fn play_supporter(
        &mut self,
        side: Side,
        hand_index: usize,
        call: Option<CoinSide>,
    ) -> Result<(), ActionError> {
        self.apply(side, Command::PlaySupporter { hand_index, call })
    }

    pub fn play_item(&mut self, side: Side, hand_index: usize, call: Option<CoinSide>) -> Result<(), ActionError> {
        self.apply(side, Command::PlayItem { hand_index, call })
    }

    pub fn promote(&mut self, side: Side, bench_index: usize) -> Result<(), ActionError> {
        self.apply(side, Command::Promote { bench_index })
    }

    /// Attack with the active Pokémon. Ends the turn unless the attack
    /// ended the match.
    pub fn attack(&mut self, side: Side) -> Result<(), ActionError> {
        self.apply(side, Command::Attack)
    }

    pub fn end_turn(&mut self, side: Side) -> Result<(), ActionError> {
        self.apply(side, Command::EndTurn)
    }

    /// Let `policy` play the opponent's turn, then end the turn if the
    /// policy left it open.
    pub fn run_opponent_turn<P>(&mut self, policy: &mut P) -> Result<(), ActionError>
    where
        P: OpponentPolicy<R> + ?Sized,
    {
        self.ensure_turn(Side::Opponent, Phase::Playing)?;
        info!("{} plays turn {}", Side::Opponent, self.turn);

        policy.play_turn(self, Side::Opponent);

        if self.phase == Phase::Playing && self.current == Side::Opponent {
            if self.players[Side::Opponent].active.is_none() {
                warn!("{} ends its turn without an active Pokémon", Side::Opponent);
                self.emit(GameEvent::NoActivePokemon { side: Side::Opponent });
            }
            self.apply(Side::Opponent, Command::EndTurn)?;
        }
        Ok(())
    }

    // === Shared helpers ===

    /// Require that `side` may act in `phase` right now.
    pub(super) fn ensure_turn(&self, side: Side, phase: Phase) -> Result<(), ActionError> {
        if self.phase == Phase::Ended {
            return Err(ActionError::MatchEnded);
        }
        if self.phase != phase {
            return Err(ActionError::WrongPhase {
                expected: phase,
                actual: self.phase,
            });
        }
        if self.current != side {
            return Err(ActionError::NotYourTurn(side));
        }
        Ok(())
    }

    pub(super) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(super) fn end_match(&mut self, winner: Side, reason: WinReason) {
        if self.phase == Phase::Ended {
            return;
        }
        let outcome = Outcome { winner, reason };
        info!("{winner} wins ({reason:?}) on turn {}", self.turn);
        self.phase = Phase::Ended;
        self.outcome = Some(outcome);
        self.emit(GameEvent::MatchEnded(outcome));
    }
}
