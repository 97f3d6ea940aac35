//! Bracket Parser
//!
//! Bracket vocabulary and line tokenization.
//! Classification lives in `validation`, scoring in `scoring`.

pub mod bracket;
pub mod lexer;

pub use bracket::{Bracket, Side};
pub use lexer::{tokenize_line, Token};
