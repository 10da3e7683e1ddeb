//! Error types for the simulator.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::PlayerId;

/// Main error type for the simulator.
///
/// Game-definition and file errors abort a run before any game is played.
/// Strategy-index errors indicate a broken internal contract.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("game definition is empty")]
    EmptyGame,

    #[error("game definition is missing the {field} line")]
    MissingHeader { field: &'static str },

    #[error("line {line}: strategy count '{value}' must be a positive integer")]
    InvalidChoiceCount { line: usize, value: String },

    #[error("line {line}: payoff '{token}' is not an integer")]
    InvalidPayoff { line: usize, token: String },

    #[error("line {line}: strategy '{strategy}' has {got} payoffs, expected {expected}")]
    PayoffCount {
        line: usize,
        strategy: String,
        expected: usize,
        got: usize,
    },

    #[error("payoff row {row} has {got} cells, expected {expected}")]
    MatrixShape {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("game declares {expected} strategies but defines {got}")]
    StrategyCount { expected: usize, got: usize },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("strategy index {index} is out of range (game has {num_choices} strategies)")]
    StrategyOutOfRange { index: usize, num_choices: usize },

    #[error("{player} has {got} strategies but the game has {expected}")]
    ChoiceMismatch {
        player: PlayerId,
        expected: usize,
        got: usize,
    },

    #[error("{player} total score overflowed adding payoff {payoff}")]
    ScoreOverflow { player: PlayerId, payoff: i64 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
