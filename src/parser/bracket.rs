//! Bracket Vocabulary
//!
//! The four bracket pairs and the two sides a bracket character can have.
//! Pure data, no scanning logic.

use serde::Serialize;
use std::fmt;

/// One of the four recognized bracket pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bracket {
    /// `(` `)`
    Round,
    /// `[` `]`
    Square,
    /// `{` `}`
    Curly,
    /// `<` `>`
    Angle,
}

/// Which side of a pair a character is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Open,
    Close,
}

impl Bracket {
    /// All pairs, in table order
    pub const ALL: [Bracket; 4] = [
        Bracket::Round,
        Bracket::Square,
        Bracket::Curly,
        Bracket::Angle,
    ];

    /// Look up the pair and side of a character
    pub fn from_char(ch: char) -> Option<(Bracket, Side)> {
        let found = match ch {
            '(' => (Bracket::Round, Side::Open),
            ')' => (Bracket::Round, Side::Close),
            '[' => (Bracket::Square, Side::Open),
            ']' => (Bracket::Square, Side::Close),
            '{' => (Bracket::Curly, Side::Open),
            '}' => (Bracket::Curly, Side::Close),
            '<' => (Bracket::Angle, Side::Open),
            '>' => (Bracket::Angle, Side::Close),
            _ => return None,
        };
        Some(found)
    }

    pub fn opener(self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
            Bracket::Angle => '<',
        }
    }

    pub fn closer(self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
            Bracket::Angle => '>',
        }
    }

    /// Position of this pair in per-bracket lookup arrays
    pub fn index(self) -> usize {
        match self {
            Bracket::Round => 0,
            Bracket::Square => 1,
            Bracket::Curly => 2,
            Bracket::Angle => 3,
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.opener(), self.closer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_table() {
        assert_eq!(Bracket::Round.closer(), ')');
        assert_eq!(Bracket::Square.closer(), ']');
        assert_eq!(Bracket::Curly.closer(), '}');
        assert_eq!(Bracket::Angle.closer(), '>');
    }

    #[test]
    fn test_from_char_both_sides() {
        for bracket in Bracket::ALL {
            assert_eq!(
                Bracket::from_char(bracket.opener()),
                Some((bracket, Side::Open))
            );
            assert_eq!(
                Bracket::from_char(bracket.closer()),
                Some((bracket, Side::Close))
            );
        }
    }

    #[test]
    fn test_from_char_rejects_others() {
        assert_eq!(Bracket::from_char('a'), None);
        assert_eq!(Bracket::from_char(' '), None);
        assert_eq!(Bracket::from_char('|'), None);
    }

    #[test]
    fn test_indices_are_distinct() {
        let indices: Vec<usize> = Bracket::ALL.iter().map(|b| b.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
