//! Scripted opponent tests.
//!
//! Whole matches between greedy sides on seeded standard decks, checking
//! that every match ends and the engine invariants hold throughout.

use tcg_lite::{GameEvent, GreedyPolicy, Match, OpponentPolicy, Phase, Side};

const MAX_TURNS: u32 = 300;

/// Set up the human side, or `None` if its hand never found a Basic.
fn set_up(seed: u64) -> Option<Match> {
    let mut game = Match::new(seed);
    while game.mulligan_offered() {
        game.accept_mulligan().unwrap();
    }

    let basics: Vec<usize> = game
        .player(Side::Human)
        .hand
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_basic_pokemon())
        .map(|(i, _)| i)
        .collect();
    let first = *basics.first()?;
    game.bench(Side::Human, first).ok()?;
    game.choose_starting_active(0).ok()?;
    Some(game)
}

/// Play both sides with the greedy policy until the match ends.
fn play_out(game: &mut Match) {
    let mut policy = GreedyPolicy::new();
    while !game.is_over() {
        assert!(game.turn() < MAX_TURNS, "match did not finish");

        match game.current_side() {
            Side::Opponent => game.run_opponent_turn(&mut policy).unwrap(),
            Side::Human => {
                policy.play_turn(game, Side::Human);
                if !game.is_over() && game.current_side() == Side::Human {
                    game.end_turn(Side::Human).unwrap();
                }
            }
        }
        assert_eq!(game.audit(), Ok(()));
    }
}

#[test]
fn test_greedy_matches_finish() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut finished = 0;
    for seed in 0..20 {
        let Some(mut game) = set_up(seed) else {
            continue;
        };
        play_out(&mut game);

        let outcome = game.outcome().expect("ended match has an outcome");
        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.drain_events().last(), Some(&GameEvent::MatchEnded(outcome)));
        finished += 1;
    }
    assert!(finished > 0);
}

#[test]
fn test_turn_counter_is_shared() {
    let Some(mut game) = set_up(11) else {
        return;
    };
    let mut policy = GreedyPolicy::new();

    game.end_turn(Side::Human).unwrap();
    assert_eq!(game.turn(), 2);

    game.run_opponent_turn(&mut policy).unwrap();
    if !game.is_over() {
        assert_eq!(game.turn(), 3);
        assert_eq!(game.current_side(), Side::Human);
    }
}

#[test]
fn test_opponent_draws_once_per_turn() {
    let Some(mut game) = set_up(5) else {
        return;
    };
    let deck_before = game.player(Side::Opponent).deck.len();

    game.end_turn(Side::Human).unwrap();

    // Only the turn-start draw; nothing else has touched the deck yet.
    assert_eq!(game.player(Side::Opponent).deck.len(), deck_before - 1);
    let draws = game
        .events()
        .iter()
        .filter(|e| matches!(e, GameEvent::CardDrawn { side: Side::Opponent }))
        .count();
    assert_eq!(draws, 1);
}

#[test]
fn test_policy_is_deterministic() {
    let (Some(mut a), Some(mut b)) = (set_up(99), set_up(99)) else {
        return;
    };
    play_out(&mut a);
    play_out(&mut b);

    assert_eq!(a.outcome(), b.outcome());
    assert_eq!(a.history(), b.history());
}
