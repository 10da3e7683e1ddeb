//! # nash-sim
//!
//! Repeated play of a two-player normal-form game among a population of
//! adaptive agents, to observe empirically whether mixed strategies drift
//! toward a Nash equilibrium.
//!
//! ## Design Principles
//!
//! 1. **Empirical, not analytical**: Nothing here solves for equilibria or
//!    checks convergence. Runs are Monte-Carlo samples.
//!
//! 2. **Reproducible**: All randomness flows from one seeded `GameRng`
//!    owned by the tournament. Same seed, same run.
//!
//! 3. **Typed at the boundary**: Game files are validated once into an
//!    immutable `GameDefinition`; the core never sees malformed data.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration
//! - `game`: Payoff matrix, lookup, and the text definition format
//! - `agent`: Adaptive players and their preference history
//! - `tournament`: Round-robin scheduling, runner, reports
//! - `error`: Crate-wide error type

pub mod core;
pub mod error;
pub mod game;
pub mod agent;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, HistoryPolicy, PlayerId, TournamentConfig};

pub use crate::error::{Error, Result};

pub use crate::game::{load_game, parse_game, GameDefinition, PayoffEvaluator};

pub use crate::agent::{Player, PreferenceHistory, Snapshot};

pub use crate::tournament::{
    run_tournament, simulate, GameRecord, HistoryExport, PlayerSummary, Simulation,
    TournamentReport, TournamentRunner, TournamentStats,
};
