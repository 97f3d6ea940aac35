//! Validation Engine
//!
//! Line classification separated from tokenizing and scoring concerns.

use serde::Serialize;

use crate::error::SyntaxError;
use crate::input::{split_rows, Row};
use crate::parser::{tokenize_line, Bracket, Side, Token};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message for a corrupted or incomplete line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub severity: Severity,
}

/// Classification of a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LineStatus {
    /// Every opener was closed by its own closer
    Valid,
    /// The first closer that did not match the innermost open bracket
    Corrupted {
        /// Pair that was open at that point, `None` if nothing was open
        expected: Option<Bracket>,
        found: Bracket,
        column: usize,
    },
    /// Openers left at the end of the line
    Incomplete {
        /// Closers needed to finish the line, innermost first
        completion: Vec<Bracket>,
    },
}

impl LineStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, LineStatus::Valid)
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(self, LineStatus::Corrupted { .. })
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, LineStatus::Incomplete { .. })
    }

    /// The completion sequence rendered as closing characters
    pub fn completion_string(&self) -> Option<String> {
        match self {
            LineStatus::Incomplete { completion } => {
                Some(completion.iter().map(|b| b.closer()).collect())
            }
            _ => None,
        }
    }
}

/// Classification of one input row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub line: usize,
    #[serde(flatten)]
    pub status: LineStatus,
}

/// Result of validating a document or a list of lines
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidationResult {
    pub lines: Vec<LineReport>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified line and the diagnostic it implies
    pub fn push(&mut self, line: usize, status: LineStatus) {
        match &status {
            LineStatus::Valid => {}
            LineStatus::Corrupted {
                expected,
                found,
                column,
            } => {
                let message = match expected {
                    Some(expected) => format!(
                        "Expected '{}', but found '{}' instead",
                        expected.closer(),
                        found.closer()
                    ),
                    None => format!("Unexpected '{}' with no open bracket", found.closer()),
                };
                self.add(line, *column, message, Severity::Error);
            }
            LineStatus::Incomplete { .. } => {
                let missing = status.completion_string().unwrap_or_default();
                self.add(
                    line,
                    0,
                    format!("Incomplete line, missing '{}'", missing),
                    Severity::Warning,
                );
            }
        }
        self.lines.push(LineReport { line, status });
    }

    fn add(&mut self, line: usize, column: usize, message: String, severity: Severity) {
        self.diagnostics.push(Diagnostic {
            line,
            column,
            message,
            severity,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn corrupted(&self) -> impl Iterator<Item = &LineReport> {
        self.lines.iter().filter(|r| r.status.is_corrupted())
    }

    pub fn incomplete(&self) -> impl Iterator<Item = &LineReport> {
        self.lines.iter().filter(|r| r.status.is_incomplete())
    }
}

/// Classify an already tokenized line
///
/// The open-bracket stack lives only for the duration of this call.
pub fn classify_tokens(tokens: &[Token]) -> LineStatus {
    let mut stack: Vec<Bracket> = Vec::new();

    for token in tokens {
        match token.side {
            Side::Open => stack.push(token.bracket),
            Side::Close => match stack.pop() {
                Some(open) if open == token.bracket => {}
                expected => {
                    return LineStatus::Corrupted {
                        expected,
                        found: token.bracket,
                        column: token.column,
                    };
                }
            },
        }
    }

    if stack.is_empty() {
        LineStatus::Valid
    } else {
        stack.reverse();
        LineStatus::Incomplete { completion: stack }
    }
}

/// Classify a single line
///
/// The whole line is tokenized first, so an unknown character anywhere
/// in it is an error even if corruption occurs earlier.
pub fn classify_line(line: &str) -> Result<LineStatus, SyntaxError> {
    let tokens = tokenize_line(line.trim())?;
    Ok(classify_tokens(&tokens))
}

/// Validate pre-split rows
pub fn validate_rows(rows: &[Row<'_>]) -> Result<ValidationResult, SyntaxError> {
    let mut result = ValidationResult::new();

    for row in rows {
        let status = classify_line(row.text).map_err(|e| e.at_line(row.number))?;
        log::debug!("line {}: {:?}", row.number, status);
        result.push(row.number, status);
    }

    Ok(result)
}

/// Validate a list of lines, numbering them from 1
pub fn validate_lines<S: AsRef<str>>(lines: &[S]) -> Result<ValidationResult, SyntaxError> {
    let rows: Vec<Row<'_>> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| Row {
            number: idx + 1,
            text: line.as_ref().trim(),
        })
        .collect();
    validate_rows(&rows)
}

/// Validate a whole block of input text
pub fn validate_document(content: &str) -> Result<ValidationResult, SyntaxError> {
    validate_rows(&split_rows(content))
}
