//! Adaptive agents.
//!
//! - `simplex`: probability-vector maintenance
//! - `history`: policy-governed snapshots of past preferences
//! - `player`: the reinforcement rule and strategy sampling

pub mod history;
pub mod player;
pub mod simplex;

pub use history::{PreferenceHistory, Snapshot};
pub use player::Player;
