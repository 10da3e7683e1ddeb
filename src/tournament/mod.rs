//! Tournament scheduling and execution.
//!
//! ## Overview
//!
//! - **Pairing**: ascending round-robin over all unordered player pairs
//! - **TournamentRunner**: plays games, feeds payoffs back to players
//! - **Reports**: final per-player summaries and exportable histories
//!
//! ## Usage
//!
//! ```
//! use nash_sim::core::TournamentConfig;
//! use nash_sim::game::parse_game;
//! use nash_sim::tournament::run_tournament;
//!
//! let game = parse_game("2\nStag Hunt\nStag 4 4 0 3\nHare 3 0 3 3\n").unwrap();
//! let config = TournamentConfig::new().with_population(4).with_sessions(10);
//!
//! let report = run_tournament(&game, &config).unwrap();
//! assert_eq!(report.stats.games, 60);
//! assert!(report.players.iter().all(|p| p.num_games == 30));
//! ```

pub mod pairing;
pub mod report;
pub mod runner;
pub mod stats;

pub use pairing::{round_robin_game_count, round_robin_pairs};
pub use report::{HistoryExport, PlayerHistory, PlayerSummary, TournamentReport};
pub use runner::{GameRecord, TournamentRunner};
pub use stats::TournamentStats;

use crate::agent::Player;
use crate::core::TournamentConfig;
use crate::error::Result;
use crate::game::{GameDefinition, PayoffEvaluator};

/// Result of `simulate`: the report plus the players themselves.
pub struct Simulation {
    pub report: TournamentReport,
    pub players: Vec<Player>,
}

/// Run a full tournament and keep the final players, histories included.
pub fn simulate(game: &GameDefinition, config: &TournamentConfig) -> Result<Simulation> {
    config.validate()?;

    log::info!(
        "starting '{}': {} players, {} sessions, seed {}",
        game.title(),
        config.population,
        config.sessions,
        config.seed
    );

    let mut players = Player::population(config.population, game.num_choices(), config)?;
    let mut runner = TournamentRunner::new(game, config.seed);
    let games = runner.run_sessions(&mut players, config.sessions)?;

    let stats = runner.stats().clone();
    log::info!(
        "finished {} games in {:.3}s ({:.0} games/s, {} resets)",
        games,
        stats.elapsed_us as f64 / 1_000_000.0,
        stats.games_per_second(),
        stats.resets
    );

    let report = TournamentReport {
        title: game.title().to_string(),
        strategy_names: game.strategy_names().to_vec(),
        config: config.clone(),
        stats,
        rng_state: runner.rng_state(),
        players: players.iter().map(PlayerSummary::from).collect(),
    };

    Ok(Simulation { report, players })
}

/// Run a full tournament: build the population, play every session, summarise.
pub fn run_tournament(game: &GameDefinition, config: &TournamentConfig) -> Result<TournamentReport> {
    simulate(game, config).map(|simulation| simulation.report)
}
