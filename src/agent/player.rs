//! Adaptive player holding a mixed strategy.
//!
//! After each game the player compares its payoff to its own running
//! average and shifts probability toward the strategy it played when the
//! payoff beat the average, away from it otherwise:
//!
//! ```text
//! baseline = total_score / num_games        (0 before the first game)
//! delta    = (payoff - baseline) / learning_scale
//! p[s]     = clip(p[s] + delta, 0, 1)
//! p        = p / sum(p)                     (uniform if sum is 0)
//! ```
//!
//! The zero baseline on the first game means an opening positive payoff
//! always reinforces the strategy played. That bootstrap is kept as is.
//!
//! There is no convergence guarantee. Depending on the payoffs and the scale
//! the vector may drift toward an equilibrium, oscillate, or collapse onto a
//! pure strategy.

use crate::core::{
    check_learning_scale, check_population_size, GameRng, HistoryPolicy, PlayerId,
    TournamentConfig, DEFAULT_LEARNING_SCALE,
};
use crate::error::{Error, Result};

use super::history::PreferenceHistory;
use super::simplex;

/// A player adapting a probability vector over its strategies.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    preferences: Vec<f64>,
    total_score: i64,
    num_games: u64,
    learning_scale: f64,
    /// Times the vector collapsed to zero and was reset to uniform.
    resets: u64,
    history: PreferenceHistory,
}

impl Player {
    /// Create a player with uniform preferences over `num_choices` strategies.
    ///
    /// Panics if `num_choices` is zero. A parsed `GameDefinition` always has
    /// at least one strategy (an empty definition is `Error::EmptyGame`), and
    /// `Player::population` rejects zero with an error instead.
    pub fn new(id: PlayerId, num_choices: usize) -> Self {
        assert!(num_choices > 0, "Must have at least 1 strategy");

        Self {
            id,
            preferences: simplex::uniform(num_choices),
            total_score: 0,
            num_games: 0,
            learning_scale: DEFAULT_LEARNING_SCALE,
            resets: 0,
            history: PreferenceHistory::default(),
        }
    }

    /// Set the learning-rate divisor.
    ///
    /// Fails with `InvalidConfiguration` unless `scale` is positive and finite.
    pub fn with_learning_scale(mut self, scale: f64) -> Result<Self> {
        self.learning_scale = check_learning_scale(scale)?;
        Ok(self)
    }

    /// Set the history recording policy.
    #[must_use]
    pub fn with_history(mut self, policy: HistoryPolicy) -> Self {
        self.history = PreferenceHistory::new(policy);
        self
    }

    /// Create `count` fresh players with ids `0..count`, configured from `config`.
    pub fn population(
        count: usize,
        num_choices: usize,
        config: &TournamentConfig,
    ) -> Result<Vec<Self>> {
        if num_choices == 0 {
            return Err(Error::InvalidConfiguration {
                message: "players need at least one strategy".to_string(),
            });
        }
        let count = check_population_size(count)?;
        let learning_scale = check_learning_scale(config.learning_scale)?;

        Ok(PlayerId::all(count)
            .map(|id| {
                let mut player = Self::new(id, num_choices).with_history(config.history);
                player.learning_scale = learning_scale;
                player
            })
            .collect())
    }

    /// Draw a strategy index according to the current preferences.
    ///
    /// Falls back to a uniform draw if the preferences carry no mass.
    pub fn choose_strategy(&self, rng: &mut GameRng) -> usize {
        rng.choose_weighted(&self.preferences)
            .unwrap_or_else(|| rng.gen_range_usize(0..self.preferences.len()))
    }

    /// Reinforce `strategy` by how far `payoff` beat this player's average.
    ///
    /// Fails without modifying the player if `strategy` is out of range or
    /// the payoff would overflow the running total.
    pub fn update_preferences(&mut self, strategy: usize, payoff: i64) -> Result<()> {
        let num_choices = self.num_choices();
        if strategy >= num_choices {
            return Err(Error::StrategyOutOfRange {
                index: strategy,
                num_choices,
            });
        }
        let total_score = self
            .total_score
            .checked_add(payoff)
            .ok_or(Error::ScoreOverflow {
                player: self.id,
                payoff,
            })?;

        let delta = (payoff as f64 - self.average_score()) / self.learning_scale;
        simplex::nudge(&mut self.preferences, strategy, delta);

        if simplex::renormalize(&mut self.preferences) {
            self.resets += 1;
            log::debug!("{} preferences collapsed, reset to uniform", self.id);
        }

        self.history.observe(&self.preferences);
        self.total_score = total_score;
        self.num_games += 1;
        Ok(())
    }

    /// Mean payoff per game, or 0 before any game.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.num_games > 0 {
            self.total_score as f64 / self.num_games as f64
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn num_choices(&self) -> usize {
        self.preferences.len()
    }

    #[must_use]
    pub fn preferences(&self) -> &[f64] {
        &self.preferences
    }

    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    #[must_use]
    pub fn num_games(&self) -> u64 {
        self.num_games
    }

    #[must_use]
    pub fn learning_scale(&self) -> f64 {
        self.learning_scale
    }

    /// Number of uniform resets after a zero-sum collapse.
    #[must_use]
    pub fn resets(&self) -> u64 {
        self.resets
    }

    #[must_use]
    pub fn history(&self) -> &PreferenceHistory {
        &self.history
    }
}
