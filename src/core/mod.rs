//! Core simulator types: player ids, RNG, configuration.
//!
//! These are shared by the game, agent, and tournament modules and carry no
//! game-specific behavior.

pub mod player;
pub mod rng;
pub mod config;

pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use config::{
    check_learning_scale, check_population_size, HistoryPolicy, TournamentConfig,
    DEFAULT_LEARNING_SCALE,
};
