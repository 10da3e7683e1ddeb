//! Integration tests for loading game definition files.

use std::io::Write;

use nash_sim::game::{load_game, PayoffEvaluator};
use nash_sim::tournament::run_tournament;
use nash_sim::{Error, TournamentConfig};

fn write_game(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Well-formed Files
// =============================================================================

#[test]
fn test_load_prisoners_dilemma() {
    let file = write_game(
        "# Classic payoffs\n\
         2\n\
         Prisoner's Dilemma\n\
         \n\
         # own/opponent pairs against Cooperate, then Defect\n\
         Cooperate 3 3 0 5\n\
         Defect 5 0 1 1\n",
    );

    let game = load_game(file.path()).unwrap();

    assert_eq!(game.title(), "Prisoner's Dilemma");
    assert_eq!(game.num_choices(), 2);
    assert_eq!(game.strategy_names(), &["Cooperate", "Defect"]);
    assert_eq!(game.lookup(0, 1).unwrap(), (0, 5));
    assert_eq!(game.lookup(1, 0).unwrap(), (5, 0));
}

#[test]
fn test_windows_line_endings() {
    let file = write_game("2\r\nChicken\r\nSwerve 0 0 -1 1\r\nStraight 1 -1 -10 -10\r\n");

    let game = load_game(file.path()).unwrap();

    assert_eq!(game.title(), "Chicken");
    assert_eq!(game.lookup(1, 1).unwrap(), (-10, -10));
}

#[test]
fn test_loaded_game_runs() {
    let file = write_game("2\nStag Hunt\nStag 4 4 0 3\nHare 3 0 3 3\n");
    let game = load_game(file.path()).unwrap();
    let config = TournamentConfig::new().with_population(3).with_sessions(5);

    let report = run_tournament(&game, &config).unwrap();

    assert_eq!(report.stats.games, 15);
    assert_eq!(report.strategy_names, vec!["Stag", "Hare"]);
}

#[test]
fn test_display_dump_lists_matrix() {
    let file = write_game("2\nStag Hunt\nStag 4 4 0 3\nHare 3 0 3 3\n");
    let game = load_game(file.path()).unwrap();

    let dump = game.to_string();

    assert!(dump.contains("Title: Stag Hunt"));
    assert!(dump.contains("Stag: (4, 4) (0, 3)"));
    assert!(dump.contains("Hare: (3, 0) (3, 3)"));
}

// =============================================================================
// Malformed Files
// =============================================================================

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    match load_game(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_wrong_payoff_count_is_fatal() {
    let file = write_game("2\nBroken\nA 1 1 1 1\nB 1 1 1 1 1\n");

    match load_game(file.path()) {
        Err(Error::PayoffCount { line, strategy, expected, got }) => {
            assert_eq!(line, 4);
            assert_eq!(strategy, "B");
            assert_eq!(expected, 4);
            assert_eq!(got, 5);
        }
        other => panic!("expected PayoffCount, got {:?}", other),
    }
}

#[test]
fn test_missing_header_fields() {
    let file = write_game("# nothing but comments\n");
    assert!(matches!(load_game(file.path()), Err(Error::EmptyGame)));

    let file = write_game("3\n");
    assert!(matches!(
        load_game(file.path()),
        Err(Error::MissingHeader { field: "title" })
    ));
}

#[test]
fn test_too_many_rows() {
    let file = write_game("1\nSolo\nA 1 1\nB 2 2\n");
    assert!(matches!(
        load_game(file.path()),
        Err(Error::StrategyCount { expected: 1, got: 2 })
    ));
}

#[test]
fn test_huge_strategy_count() {
    let file = write_game("1000000000000000000\nBig\nA 1 1\n");

    let err = load_game(file.path()).unwrap_err();

    assert!(matches!(
        err,
        Error::PayoffCount { .. } | Error::InvalidChoiceCount { .. }
    ));
}
