//! Full-game tests.
//!
//! These play complete dealt games and check the invariants that must hold
//! between rounds: no card is created or destroyed, and every game ends.

use war_game::cards::{Deck, DECK_SIZE};
use war_game::core::{Seat, WarError};
use war_game::events::{EventLog, GameEvent, NullObserver};
use war_game::rules::{GameResult, WarGame, WarGameBuilder};

const ROUND_CAP: u32 = 20_000;

fn game(seed: u64) -> WarGame {
    WarGameBuilder::new()
        .player_name("tester")
        .seed(seed)
        .max_rounds(ROUND_CAP)
        .build()
        .unwrap()
}

/// Hands plus abandoned cards stay at 52 after every round.
#[test]
fn test_card_count_conserved_every_round() {
    for seed in 0..20 {
        let mut g = game(seed);
        assert_eq!(g.card_total(), DECK_SIZE);

        while !g.is_finished() && g.round() < ROUND_CAP {
            g.play_round(&mut NullObserver);
            assert_eq!(g.card_total(), DECK_SIZE, "seed {seed}, round {}", g.round());
        }
    }
}

/// Every game ends: a round aborts, the hands repeat, or the cap is hit.
#[test]
fn test_games_terminate() {
    for seed in 0..50 {
        let mut g = game(seed);
        let summary = g.run(&mut NullObserver);

        assert!(
            g.is_finished() || summary.cycled || summary.hit_round_cap,
            "seed {seed}"
        );
        assert!(summary.rounds <= ROUND_CAP);
        assert!(summary.longest_war_chain <= summary.wars);
    }
}

/// With no round cap, games still end. Seeds 4 and 11 deal hands that
/// cycle.
#[test]
fn test_uncapped_games_terminate() {
    for seed in (0..20).chain([4, 11, 20, 25]) {
        let mut g = WarGameBuilder::new()
            .player_name("tester")
            .seed(seed)
            .build()
            .unwrap();
        assert_eq!(g.config().max_rounds, None);

        let summary = g.run(&mut NullObserver);

        assert!(!summary.hit_round_cap, "seed {seed}");
        assert_ne!(g.is_finished(), summary.cycled, "seed {seed}");
        assert_eq!(g.card_total(), DECK_SIZE, "seed {seed}");
    }

    for seed in [4, 11] {
        let mut g = WarGameBuilder::new()
            .player_name("tester")
            .seed(seed)
            .build()
            .unwrap();
        let mut log = EventLog::new();
        let summary = g.run(&mut log);

        assert!(summary.cycled, "seed {seed}");
        assert_eq!(log.count("cycle_detected"), 1);
        assert_eq!(log.count("round_aborted"), 0);
    }
}

/// The reported winner holds strictly more cards.
#[test]
fn test_winner_matches_final_counts() {
    for seed in 0..20 {
        let mut g = game(seed);
        let summary = g.run(&mut NullObserver);
        let counts = summary.final_counts;

        match summary.result {
            GameResult::Winner(seat) => {
                assert!(counts[seat] > counts[seat.opponent()]);
                assert_eq!(summary.winner_name.as_deref(), Some(g.engine().name(seat)));
            }
            GameResult::Draw => {
                assert_eq!(counts[Seat::Human], counts[Seat::Computer]);
                assert!(summary.winner_name.is_none());
            }
        }
    }
}

/// Same seed, same game.
#[test]
fn test_seeded_games_replay() {
    let mut a = game(99);
    let mut b = game(99);

    let mut log_a = EventLog::new();
    let mut log_b = EventLog::new();
    let sa = a.run(&mut log_a);
    let sb = b.run(&mut log_b);

    assert_eq!(sa, sb);
    assert_eq!(log_a.events(), log_b.events());
}

/// Event stream is bracketed by start and end, one start per round.
#[test]
fn test_event_stream_shape() {
    let mut g = game(5);
    let mut log = EventLog::new();
    let summary = g.run(&mut log);

    assert!(matches!(
        log.events().first(),
        Some(GameEvent::GameStarted { seed: 5, .. })
    ));
    assert!(matches!(log.events().last(), Some(GameEvent::GameOver { .. })));
    assert_eq!(log.count("round_started") as u32, summary.rounds);
    assert_eq!(log.count("war_declared") as u32, summary.wars);
}

/// A custom deck must hold exactly the 52 distinct cards.
#[test]
fn test_custom_deck_validation() {
    let mut cards = Deck::standard().cards().to_vec();
    cards.truncate(50);
    assert!(matches!(
        Deck::from_cards(cards),
        Err(WarError::MalformedDeck { actual: 50, .. })
    ));

    let mut reversed = Deck::standard().cards().to_vec();
    reversed.reverse();
    let deck = Deck::from_cards(reversed).unwrap();
    let g = WarGameBuilder::new()
        .player_name("tester")
        .seed(1)
        .deck(deck)
        .build()
        .unwrap();
    assert_eq!(g.card_total(), DECK_SIZE);
}

/// Playing on after the end moves nothing.
#[test]
fn test_round_after_finish_is_inert() {
    let mut g = WarGame::from_hands("tester", vec!["AS".parse().unwrap()], Vec::new());
    g.run(&mut NullObserver);
    let before = g.snapshot();

    let outcome = g.play_round(&mut NullObserver);
    assert!(!outcome.should_continue());
    assert_eq!(g.snapshot().hands, before.hands);
}
