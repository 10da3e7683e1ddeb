//! Game definitions: the payoff matrix, its lookup, and the text format.
//!
//! The tournament only depends on `PayoffEvaluator`; `GameDefinition` is the
//! standard implementation, built either directly or from a definition file.

pub mod definition;
pub mod parser;

pub use definition::{GameDefinition, PayoffEvaluator};
pub use parser::{load_game, parse_game};
