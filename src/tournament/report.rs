//! Run summaries and history export.
//!
//! `TournamentReport` is what a caller prints at the end of a run.
//! `HistoryExport` hands each player's recorded preference trajectory to an
//! external plotting tool as JSON; nothing here renders anything.

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::agent::Player;
use crate::core::{GameRngState, PlayerId, TournamentConfig};
use crate::error::{Error, Result};
use crate::game::GameDefinition;

use super::stats::TournamentStats;

/// Final state of one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub preferences: Vec<f64>,
    pub average_score: f64,
    pub total_score: i64,
    pub num_games: u64,
    pub resets: u64,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            preferences: player.preferences().to_vec(),
            average_score: player.average_score(),
            total_score: player.total_score(),
            num_games: player.num_games(),
            resets: player.resets(),
        }
    }
}

/// Summary of a completed tournament.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentReport {
    pub title: String,
    pub strategy_names: Vec<String>,
    pub config: TournamentConfig,
    pub stats: TournamentStats,
    /// RNG position after the last game.
    pub rng_state: GameRngState,
    pub players: Vec<PlayerSummary>,
}

impl TournamentReport {
    /// Mean of the players' final preference vectors.
    #[must_use]
    pub fn mean_preferences(&self) -> Vec<f64> {
        let n = self.strategy_names.len();
        let mut mean = vec![0.0; n];
        if self.players.is_empty() {
            return mean;
        }
        for player in &self.players {
            for (m, p) in mean.iter_mut().zip(&player.preferences) {
                *m += p;
            }
        }
        let count = self.players.len() as f64;
        mean.iter_mut().for_each(|m| *m /= count);
        mean
    }
}

impl std::fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}: {} players, {} sessions, {} games",
            self.title,
            self.players.len(),
            self.stats.sessions,
            self.stats.games
        )?;
        for player in &self.players {
            write!(f, "  {:<10}", player.id.to_string())?;
            for (name, p) in self.strategy_names.iter().zip(&player.preferences) {
                write!(f, " {}={:.3}", name, p)?;
            }
            writeln!(f, "  avg score {:.3}", player.average_score)?;
        }
        write!(f, "  {:<10}", "mean")?;
        for (name, p) in self.strategy_names.iter().zip(self.mean_preferences()) {
            write!(f, " {}={:.3}", name, p)?;
        }
        writeln!(f)
    }
}

/// Recorded trajectory of one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerHistory {
    pub id: PlayerId,
    pub snapshots: Vec<Vec<f64>>,
}

/// Preference trajectories of a whole population, for plotting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryExport {
    pub title: String,
    pub strategy_names: Vec<String>,
    pub players: Vec<PlayerHistory>,
}

impl HistoryExport {
    /// Collect the recorded histories of `players`.
    pub fn new(game: &GameDefinition, players: &[Player]) -> Self {
        Self {
            title: game.title().to_string(),
            strategy_names: game.strategy_names().to_vec(),
            players: players
                .iter()
                .map(|p| PlayerHistory {
                    id: p.id(),
                    snapshots: p.history().to_vecs(),
                })
                .collect(),
        }
    }

    /// Write the export as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("wrote preference history to {}", path.display());
        Ok(())
    }
}
