//! Library Errors
//!
//! Typed failures for line scanning and score table construction.

use thiserror::Error;

use crate::parser::Bracket;

/// Failure while scanning a line of bracket characters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A character outside the eight bracket symbols
    #[error("unknown character {found:?} at line {line}, column {column}")]
    UnknownCharacter {
        /// 1-based row number (0 when the line was classified on its own)
        line: usize,
        /// 1-based character column
        column: usize,
        found: char,
    },
}

impl SyntaxError {
    /// Attach a row number to an error produced by single-line scanning
    pub fn at_line(self, line: usize) -> Self {
        match self {
            SyntaxError::UnknownCharacter { column, found, .. } => {
                SyntaxError::UnknownCharacter {
                    line,
                    column,
                    found,
                }
            }
        }
    }
}

/// Failure while building a score table from its file representation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("score table '{table}' has no [{section}] points for '{bracket}'")]
    MissingPoints {
        table: String,
        section: &'static str,
        bracket: char,
    },

    #[error("score table '{table}' has unknown key {key:?} in [{section}]")]
    UnknownKey {
        table: String,
        section: &'static str,
        key: String,
    },

    #[error("score table '{table}' gives [{section}] points for '{bracket}' more than once")]
    DuplicateKey {
        table: String,
        section: &'static str,
        bracket: Bracket,
    },

    #[error("score table '{table}' has a completion multiplier of zero")]
    ZeroMultiplier { table: String },
}
