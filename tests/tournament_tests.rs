//! Integration tests for round-robin scheduling and full tournament runs.

use nash_sim::agent::simplex::{is_distribution, SIMPLEX_TOLERANCE};
use nash_sim::agent::Player;
use nash_sim::core::{HistoryPolicy, PlayerId, TournamentConfig};
use nash_sim::game::{parse_game, GameDefinition, PayoffEvaluator};
use nash_sim::tournament::{round_robin_game_count, run_tournament, simulate, TournamentRunner};
use nash_sim::Error;
use proptest::prelude::*;

fn coordination() -> GameDefinition {
    GameDefinition::from_pairs(
        "Coordination",
        vec!["A".to_string(), "B".to_string()],
        vec![vec![(3, 3), (0, 0)], vec![(0, 0), (3, 3)]],
    )
    .unwrap()
}

fn rock_paper_scissors() -> GameDefinition {
    parse_game(
        "3
         Rock Paper Scissors
         Rock      0 0  -1 1   1 -1
         Paper     1 -1  0 0  -1 1
         Scissors -1 1   1 -1  0 0",
    )
    .unwrap()
}

fn population(count: usize, choices: usize) -> Vec<Player> {
    Player::population(count, choices, &TournamentConfig::default()).unwrap()
}

// =============================================================================
// Pairing Cardinality
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_round_robin_cardinality(players in 0usize..12, sessions in 0u32..4) {
        let game = coordination();
        let mut pop = population(players, 2);
        let mut runner = TournamentRunner::new(&game, 1);

        let games = runner.run_sessions(&mut pop, sessions).unwrap();

        let per_session = round_robin_game_count(players) as u64;
        prop_assert_eq!(games, per_session * u64::from(sessions));
        for player in &pop {
            let expected = u64::from(sessions) * (players as u64 - 1);
            prop_assert_eq!(player.num_games(), expected);
        }
    }
}

#[test]
fn test_single_round_robin_game_count() {
    let game = coordination();
    let mut runner = TournamentRunner::new(&game, 42);
    let mut pop = population(6, 2);

    assert_eq!(runner.run_round_robin(&mut pop).unwrap(), 15);
    assert!(pop.iter().all(|p| p.num_games() == 5));
}

// =============================================================================
// Coordination Scenario
// =============================================================================

#[test]
fn test_coordination_first_game() {
    let game = coordination();
    let mut runner = TournamentRunner::new(&game, 42);
    let mut pop = population(2, 2);

    assert_eq!(runner.run_sessions(&mut pop, 1).unwrap(), 1);

    let (a, b) = (&pop[0], &pop[1]);
    assert_eq!(a.num_games(), 1);
    assert_eq!(b.num_games(), 1);

    // Both players started from a zero baseline. A matched pair pays 3 and
    // reinforces the chosen strategy; a mismatch pays 0 and changes nothing.
    assert_eq!(a.total_score(), b.total_score());
    for p in [a, b] {
        if p.total_score() == 3 {
            assert!(p.preferences().iter().any(|&w| w > 0.5));
        } else {
            assert_eq!(p.total_score(), 0);
            assert_eq!(p.preferences(), &[0.5, 0.5]);
        }
    }
}

#[test]
fn test_coordination_both_pick_first_strategy() {
    let mut a = Player::new(PlayerId::new(0), 2);
    let mut b = Player::new(PlayerId::new(1), 2);
    let (pa, pb) = coordination().lookup(0, 0).unwrap();

    a.update_preferences(0, pa).unwrap();
    b.update_preferences(0, pb).unwrap();

    for p in [&a, &b] {
        assert!(p.preferences()[0] > 0.5);
        assert!((p.preferences()[0] - 0.53 / 1.03).abs() < 1e-12);
        assert_eq!(p.num_games(), 1);
    }
}

#[test]
fn test_coordination_population_tends_to_coordinate() {
    let game = coordination();
    let config = TournamentConfig::new()
        .with_population(6)
        .with_sessions(200)
        .with_seed(7);

    let report = run_tournament(&game, &config).unwrap();

    // Everyone drifts toward one convention; mean weight leaves the midpoint
    let mean = report.mean_preferences();
    assert!((mean[0] - 0.5).abs() > 0.3, "mean stayed near 0.5: {:?}", mean);
}

// =============================================================================
// Full Runs
// =============================================================================

#[test]
fn test_run_tournament_report() {
    let game = rock_paper_scissors();
    let config = TournamentConfig::new().with_population(5).with_sessions(20);

    let report = run_tournament(&game, &config).unwrap();

    assert_eq!(report.title, "Rock Paper Scissors");
    assert_eq!(report.strategy_names, vec!["Rock", "Paper", "Scissors"]);
    assert_eq!(report.stats.sessions, 20);
    assert_eq!(report.stats.games, config.total_games());
    assert_eq!(report.players.len(), 5);
    for summary in &report.players {
        assert_eq!(summary.num_games, 80);
        assert!(is_distribution(&summary.preferences, SIMPLEX_TOLERANCE));
        let expected_avg = summary.total_score as f64 / summary.num_games as f64;
        assert_eq!(summary.average_score, expected_avg);
    }

    // Zero-sum game
    let total: i64 = report.players.iter().map(|p| p.total_score).sum();
    assert_eq!(total, 0);
}

#[test]
fn test_same_seed_same_run() {
    let game = rock_paper_scissors();
    let config = TournamentConfig::new().with_population(4).with_sessions(25).with_seed(123);

    let first = run_tournament(&game, &config).unwrap();
    let second = run_tournament(&game, &config).unwrap();

    assert_eq!(first.players, second.players);
    assert_eq!(first.rng_state, second.rng_state);
}

#[test]
fn test_different_seed_different_run() {
    let game = rock_paper_scissors();
    let config = TournamentConfig::new().with_population(4).with_sessions(25);

    let first = run_tournament(&game, &config.clone().with_seed(1)).unwrap();
    let second = run_tournament(&game, &config.with_seed(2)).unwrap();

    assert_ne!(first.players, second.players);
}

#[test]
fn test_zero_sessions_plays_nothing() {
    let game = coordination();
    let config = TournamentConfig::new().with_population(3).with_sessions(0);

    let report = run_tournament(&game, &config).unwrap();

    assert_eq!(report.stats.games, 0);
    for summary in &report.players {
        assert_eq!(summary.preferences, vec![0.5, 0.5]);
        assert_eq!(summary.average_score, 0.0);
    }
}

#[test]
fn test_invalid_config_aborts_before_play() {
    let game = coordination();
    let config = TournamentConfig::new().with_population(1);

    assert!(matches!(
        run_tournament(&game, &config),
        Err(Error::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_simulate_keeps_histories() {
    let game = coordination();
    let config = TournamentConfig::new()
        .with_population(3)
        .with_sessions(10)
        .with_history(HistoryPolicy::full());

    let simulation = simulate(&game, &config).unwrap();

    for player in &simulation.players {
        assert_eq!(player.history().len(), 20);
    }
    assert_eq!(simulation.report.players.len(), 3);
}

#[test]
fn test_report_serializes() {
    let game = coordination();
    let config = TournamentConfig::new().with_population(2).with_sessions(3);
    let report = run_tournament(&game, &config).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["title"], "Coordination");
    assert_eq!(json["players"].as_array().unwrap().len(), 2);
    assert_eq!(json["config"]["sessions"], 3);
}
