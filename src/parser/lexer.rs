//! Bracket Lexer
//!
//! Turns a line into bracket tokens. Anything that is not one of the
//! eight bracket characters is rejected here, so later stages never see it.

use crate::error::SyntaxError;
use crate::parser::bracket::{Bracket, Side};

/// A bracket token with its 1-based column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub bracket: Bracket,
    pub side: Side,
    pub column: usize,
}

impl Token {
    /// The character this token was read from
    pub fn as_char(&self) -> char {
        match self.side {
            Side::Open => self.bracket.opener(),
            Side::Close => self.bracket.closer(),
        }
    }
}

/// Tokenize a line of bracket characters
///
/// The line is expected to be trimmed already. Errors carry line 0;
/// callers that know the row number attach it with `SyntaxError::at_line`.
pub fn tokenize_line(line: &str) -> Result<Vec<Token>, SyntaxError> {
    line.chars()
        .enumerate()
        .map(|(idx, ch)| match Bracket::from_char(ch) {
            Some((bracket, side)) => Ok(Token {
                bracket,
                side,
                column: idx + 1,
            }),
            None => Err(SyntaxError::UnknownCharacter {
                line: 0,
                column: idx + 1,
                found: ch,
            }),
        })
        .collect()
}
