//! Tournament runner: repeated round-robin sessions over a population.
//!
//! Within a game the row player draws first, then the column player, then
//! the payoffs are looked up and the row player updates before the column
//! player. Games run one at a time in pairing order, so the seed alone
//! determines every draw.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::agent::Player;
use crate::core::{GameRng, GameRngState, PlayerId};
use crate::error::{Error, Result};
use crate::game::PayoffEvaluator;

use super::pairing::{pair_mut, round_robin_pairs};
use super::stats::TournamentStats;

/// Outcome of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub row: PlayerId,
    pub column: PlayerId,
    pub row_strategy: usize,
    pub column_strategy: usize,
    pub row_payoff: i64,
    pub column_payoff: i64,
}

/// Drives games between players of a population.
///
/// Borrows the game and owns the run's random stream.
pub struct TournamentRunner<'g, G: PayoffEvaluator> {
    game: &'g G,
    rng: GameRng,
    stats: TournamentStats,
}

impl<'g, G: PayoffEvaluator> TournamentRunner<'g, G> {
    /// Create a runner with a fresh RNG from `seed`.
    pub fn new(game: &'g G, seed: u64) -> Self {
        Self::with_rng(game, GameRng::new(seed))
    }

    /// Create a runner continuing an existing random stream.
    pub fn with_rng(game: &'g G, rng: GameRng) -> Self {
        Self {
            game,
            rng,
            stats: TournamentStats::new(),
        }
    }

    /// Play one game between two players and feed the payoffs back.
    pub fn play_game(&mut self, row: &mut Player, column: &mut Player) -> Result<GameRecord> {
        self.check_player(row)?;
        self.check_player(column)?;

        let row_strategy = row.choose_strategy(&mut self.rng);
        let column_strategy = column.choose_strategy(&mut self.rng);
        let (row_payoff, column_payoff) = self.game.lookup(row_strategy, column_strategy)?;

        let resets_before = row.resets() + column.resets();
        row.update_preferences(row_strategy, row_payoff)?;
        column.update_preferences(column_strategy, column_payoff)?;
        self.stats.resets += row.resets() + column.resets() - resets_before;
        self.stats.games += 1;

        let record = GameRecord {
            row: row.id(),
            column: column.id(),
            row_strategy,
            column_strategy,
            row_payoff,
            column_payoff,
        };
        log::trace!(
            "{} vs {}: strategies ({}, {}) payoffs ({}, {})",
            record.row,
            record.column,
            row_strategy,
            column_strategy,
            row_payoff,
            column_payoff
        );
        Ok(record)
    }

    /// Play every unordered pair of players exactly once.
    ///
    /// Returns the number of games played, `P(P-1)/2`.
    pub fn run_round_robin(&mut self, players: &mut [Player]) -> Result<u64> {
        for player in players.iter() {
            self.check_player(player)?;
        }

        let start = Instant::now();
        let mut games = 0;
        for (i, j) in round_robin_pairs(players.len()) {
            let (row, column) = pair_mut(players, i, j);
            self.play_game(row, column)?;
            games += 1;
        }
        self.stats.sessions += 1;
        self.stats.elapsed_us += start.elapsed().as_micros() as u64;
        Ok(games)
    }

    /// Run `num_sessions` round-robins back to back.
    ///
    /// Player state carries over between sessions. Returns the total number
    /// of games played.
    pub fn run_sessions(&mut self, players: &mut [Player], num_sessions: u32) -> Result<u64> {
        let mut games = 0;
        for session in 0..num_sessions {
            games += self.run_round_robin(players)?;
            log::debug!(
                "session {}/{} complete ({} games so far)",
                session + 1,
                num_sessions,
                games
            );
        }
        Ok(games)
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &TournamentStats {
        &self.stats
    }

    /// Current position of the random stream, for resuming a run.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The game being played.
    pub fn game(&self) -> &'g G {
        self.game
    }

    fn check_player(&self, player: &Player) -> Result<()> {
        let expected = self.game.num_choices();
        if player.num_choices() != expected {
            return Err(Error::ChoiceMismatch {
                player: player.id(),
                expected,
                got: player.num_choices(),
            });
        }
        Ok(())
    }
}
