//! Game definition and payoff lookup.
//!
//! A `GameDefinition` is validated once at construction and is immutable
//! afterwards. The tournament only sees it through `PayoffEvaluator`.

use serde::Serialize;

use crate::error::{Error, Result};

/// Payoff lookup for a two-player normal-form game.
///
/// The tournament calls into `PayoffEvaluator` but never reads the matrix
/// directly, so tests can supply their own evaluators.
pub trait PayoffEvaluator {
    /// Number of strategies available to each player.
    fn num_choices(&self) -> usize;

    /// Payoffs for a game where the row player chose `row` and the column
    /// player chose `column`.
    ///
    /// Returns `(payoff_to_row, payoff_to_column)`.
    fn lookup(&self, row: usize, column: usize) -> Result<(i64, i64)>;
}

/// Immutable description of a two-player game.
///
/// ## Example
///
/// ```
/// use nash_sim::game::{GameDefinition, PayoffEvaluator};
///
/// let game = GameDefinition::from_pairs(
///     "Coordination",
///     vec!["Left".to_string(), "Right".to_string()],
///     vec![vec![(3, 3), (0, 0)], vec![(0, 0), (3, 3)]],
/// )
/// .unwrap();
///
/// assert_eq!(game.num_choices(), 2);
/// assert_eq!(game.lookup(1, 1).unwrap(), (3, 3));
/// assert!(game.lookup(2, 0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameDefinition {
    title: String,
    strategy_names: Vec<String>,
    /// Row-major `num_choices × num_choices` cells.
    payoffs: Vec<(i64, i64)>,
}

impl GameDefinition {
    /// Create a game from interleaved payoff rows.
    ///
    /// Each row holds `2 × num_choices` integers: the (row, column) payoff
    /// pair against each column strategy in order.
    pub fn new(
        title: impl Into<String>,
        strategy_names: Vec<String>,
        rows: Vec<Vec<i64>>,
    ) -> Result<Self> {
        let n = strategy_names.len();
        let matrix = rows
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                if values.len() != 2 * n {
                    return Err(Error::MatrixShape {
                        row,
                        expected: 2 * n,
                        got: values.len(),
                    });
                }
                Ok(values.chunks_exact(2).map(|c| (c[0], c[1])).collect())
            })
            .collect::<Result<Vec<Vec<_>>>>()?;

        Self::from_pairs(title, strategy_names, matrix)
    }

    /// Create a game from a square matrix of payoff pairs.
    pub fn from_pairs(
        title: impl Into<String>,
        strategy_names: Vec<String>,
        matrix: Vec<Vec<(i64, i64)>>,
    ) -> Result<Self> {
        let n = strategy_names.len();
        if n == 0 {
            return Err(Error::EmptyGame);
        }
        if matrix.len() != n {
            return Err(Error::StrategyCount {
                expected: n,
                got: matrix.len(),
            });
        }

        let mut payoffs = Vec::with_capacity(n * n);
        for (row, cells) in matrix.into_iter().enumerate() {
            if cells.len() != n {
                return Err(Error::MatrixShape {
                    row,
                    expected: n,
                    got: cells.len(),
                });
            }
            payoffs.extend(cells);
        }

        Ok(Self {
            title: title.into(),
            strategy_names,
            payoffs,
        })
    }

    /// Display label for the game.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Strategy labels in index order.
    #[must_use]
    pub fn strategy_names(&self) -> &[String] {
        &self.strategy_names
    }

    /// Label of a single strategy.
    #[must_use]
    pub fn strategy_name(&self, index: usize) -> Option<&str> {
        self.strategy_names.get(index).map(String::as_str)
    }

    /// Payoff pairs for one row strategy against every column strategy.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[(i64, i64)]> {
        let n = self.num_choices();
        (index < n).then(|| &self.payoffs[index * n..(index + 1) * n])
    }
}

impl PayoffEvaluator for GameDefinition {
    fn num_choices(&self) -> usize {
        self.strategy_names.len()
    }

    fn lookup(&self, row: usize, column: usize) -> Result<(i64, i64)> {
        let n = self.num_choices();
        for index in [row, column] {
            if index >= n {
                return Err(Error::StrategyOutOfRange {
                    index,
                    num_choices: n,
                });
            }
        }
        Ok(self.payoffs[row * n + column])
    }
}

impl std::fmt::Display for GameDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Number of strategies per player: {}", self.num_choices())?;
        writeln!(f)?;
        writeln!(f, "Strategies:")?;
        for name in &self.strategy_names {
            writeln!(f, "  - {}", name)?;
        }
        writeln!(f)?;
        writeln!(f, "Payoff Matrix:")?;
        for (i, name) in self.strategy_names.iter().enumerate() {
            write!(f, "{}:", name)?;
            for (own, other) in self.row(i).unwrap_or_default() {
                write!(f, " ({}, {})", own, other)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
