//! Tournament run statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected while running sessions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentStats {
    /// Round-robin sessions completed.
    pub sessions: u64,

    /// Games played across all sessions.
    pub games: u64,

    /// Uniform resets after a preference collapse, summed over players.
    pub resets: u64,

    /// Total time spent playing (microseconds).
    pub elapsed_us: u64,
}

impl TournamentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate games per second.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        if self.elapsed_us == 0 {
            0.0
        } else {
            self.games as f64 / (self.elapsed_us as f64 / 1_000_000.0)
        }
    }
}
