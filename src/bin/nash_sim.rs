//! nash-sim - run an adaptive-strategy tournament on a game definition file
//!
//! Prints the parsed game, runs the configured number of round-robin
//! sessions, then prints each player's final preferences and average score.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use nash_sim::core::{HistoryPolicy, TournamentConfig, DEFAULT_LEARNING_SCALE};
use nash_sim::tournament::{simulate, HistoryExport};

#[derive(Parser)]
#[command(name = "nash-sim")]
#[command(version, about = "Simulate adaptive mixed strategies in a two-player game", long_about = None)]
struct Cli {
    /// Game definition file
    game_file: PathBuf,

    /// Number of players in the population
    #[arg(short, long, default_value_t = 10)]
    players: usize,

    /// Number of round-robin sessions
    #[arg(short, long, default_value_t = 100)]
    sessions: u32,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Divisor applied to payoff minus average before it moves a preference
    #[arg(long, default_value_t = DEFAULT_LEARNING_SCALE)]
    learning_scale: f64,

    /// Record a preference snapshot every N games (0 disables)
    #[arg(long)]
    history_interval: Option<u32>,

    /// Keep at most N snapshots per player
    #[arg(long)]
    history_capacity: Option<usize>,

    /// Write recorded preference histories as JSON
    #[arg(long)]
    history_out: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn history_policy(&self) -> HistoryPolicy {
        let default_interval = if self.history_out.is_some() { 1 } else { 0 };
        HistoryPolicy {
            interval: self.history_interval.unwrap_or(default_interval),
            capacity: self.history_capacity,
        }
    }

    fn config(&self) -> TournamentConfig {
        TournamentConfig::new()
            .with_population(self.players)
            .with_sessions(self.sessions)
            .with_seed(self.seed)
            .with_learning_scale(self.learning_scale)
            .with_history(self.history_policy())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let game = nash_sim::load_game(&cli.game_file)
        .with_context(|| format!("loading game from {}", cli.game_file.display()))?;
    println!("{}", game);

    let config = cli.config();
    let simulation = simulate(&game, &config).context("running tournament")?;
    println!("{}", simulation.report);

    if let Some(path) = &cli.history_out {
        HistoryExport::new(&game, &simulation.players)
            .write_json(path)
            .with_context(|| format!("exporting history to {}", path.display()))?;
    }

    Ok(())
}
