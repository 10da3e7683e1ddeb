//! Tournament configuration.
//!
//! - `HistoryPolicy`: whether and how often players record preference snapshots
//! - `TournamentConfig`: everything a run needs besides the game itself
//!
//! Both are serializable so a report can carry the exact settings that
//! produced it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default divisor applied to `payoff - baseline` before it moves a preference.
pub const DEFAULT_LEARNING_SCALE: f64 = 100.0;

/// Check a learning-rate divisor, returning it unchanged if usable.
///
/// The divisor must be positive and finite; zero or NaN would poison the
/// preference vector on the next update.
pub fn check_learning_scale(scale: f64) -> Result<f64> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(Error::InvalidConfiguration {
            message: format!("learning scale must be positive and finite, got {}", scale),
        })
    }
}

/// Check that a population size fits the player id range.
pub fn check_population_size(count: usize) -> Result<u32> {
    u32::try_from(count).map_err(|_| Error::InvalidConfiguration {
        message: format!("population of {} exceeds the player id range", count),
    })
}

/// Snapshot recording policy for a player's preference history.
///
/// History grows linearly with games played, so recording is off unless a
/// caller asks for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPolicy {
    /// Record a snapshot after every `interval`-th game. 0 disables recording.
    pub interval: u32,

    /// Maximum snapshots retained. The oldest is evicted when full.
    /// `None` for unlimited.
    pub capacity: Option<usize>,
}

impl HistoryPolicy {
    /// No recording.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            interval: 0,
            capacity: None,
        }
    }

    /// One snapshot per game, unbounded.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            interval: 1,
            capacity: None,
        }
    }

    /// One snapshot every `interval` games.
    #[must_use]
    pub const fn every(interval: u32) -> Self {
        Self {
            interval,
            capacity: None,
        }
    }

    /// Retain at most `capacity` snapshots.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Whether any snapshots will be recorded.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.interval > 0
    }
}

/// Complete tournament configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Number of players in the population.
    pub population: usize,

    /// Number of round-robin sessions to play.
    pub sessions: u32,

    /// Seed for the tournament RNG.
    /// Same seed produces an identical run.
    pub seed: u64,

    /// Learning-rate divisor. Larger values make preferences move more slowly.
    pub learning_scale: f64,

    /// Preference snapshot recording.
    pub history: HistoryPolicy,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            population: 10,
            sessions: 100,
            seed: 42,
            learning_scale: DEFAULT_LEARNING_SCALE,
            history: HistoryPolicy::disabled(),
        }
    }
}

impl TournamentConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size.
    #[must_use]
    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    /// Set the number of sessions.
    #[must_use]
    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.sessions = sessions;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the learning-rate divisor.
    #[must_use]
    pub fn with_learning_scale(mut self, scale: f64) -> Self {
        self.learning_scale = scale;
        self
    }

    /// Set the history recording policy.
    #[must_use]
    pub fn with_history(mut self, history: HistoryPolicy) -> Self {
        self.history = history;
        self
    }

    /// Total games the run will play: `sessions × P(P-1)/2`.
    #[must_use]
    pub fn total_games(&self) -> u64 {
        let p = self.population as u64;
        u64::from(self.sessions) * (p * p.saturating_sub(1) / 2)
    }

    /// Check that the configuration describes a runnable tournament.
    pub fn validate(&self) -> Result<()> {
        if self.population < 2 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "population must have at least 2 players, got {}",
                    self.population
                ),
            });
        }
        check_population_size(self.population)?;
        check_learning_scale(self.learning_scale)?;
        if self.history.capacity == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "history capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
