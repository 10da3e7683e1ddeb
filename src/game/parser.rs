//! Text format for game definitions.
//!
//! ```text
//! # comments and blank lines are ignored
//! 2
//! Prisoner's Dilemma
//! Cooperate 3 3 0 5
//! Defect    5 0 1 1
//! ```
//!
//! The first meaningful line is the strategy count, the second the title.
//! Each following line is a strategy name and `2 × count` integers: the
//! (own, opponent) payoff pair against each opposing strategy in order.

use std::path::Path;
use std::str::FromStr;

use super::definition::GameDefinition;
use crate::error::{Error, Result};

/// Parse a game definition from text.
pub fn parse_game(source: &str) -> Result<GameDefinition> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (count_line, count) = lines.next().ok_or(Error::EmptyGame)?;
    // Each row carries 2 × count payoffs, so that product must fit too
    let (num_choices, payoffs_per_row) = count
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .and_then(|n| n.checked_mul(2).map(|per_row| (n, per_row)))
        .ok_or_else(|| Error::InvalidChoiceCount {
            line: count_line,
            value: count.to_string(),
        })?;

    let (_, title) = lines.next().ok_or(Error::MissingHeader { field: "title" })?;

    // The count is untrusted; grow with the rows actually present
    let mut strategy_names = Vec::new();
    let mut rows = Vec::new();

    for (line, text) in lines {
        let mut tokens = text.split_whitespace();
        // Filtered lines are non-empty, so there is always a first token
        let name = tokens.next().unwrap_or_default().to_string();

        let payoffs = tokens
            .map(|token| {
                token.parse::<i64>().map_err(|_| Error::InvalidPayoff {
                    line,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if payoffs.len() != payoffs_per_row {
            return Err(Error::PayoffCount {
                line,
                strategy: name,
                expected: payoffs_per_row,
                got: payoffs.len(),
            });
        }

        strategy_names.push(name);
        rows.push(payoffs);
    }

    if strategy_names.len() != num_choices {
        return Err(Error::StrategyCount {
            expected: num_choices,
            got: strategy_names.len(),
        });
    }

    let game = GameDefinition::new(title, strategy_names, rows)?;
    log::debug!("parsed game '{}' with {} strategies", game.title(), num_choices);
    Ok(game)
}

/// Read and parse a game definition file.
pub fn load_game(path: impl AsRef<Path>) -> Result<GameDefinition> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_game(&source)
}

impl FromStr for GameDefinition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_game(s)
    }
}
