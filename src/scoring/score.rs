//! Corruption and completion scoring.

use serde::Serialize;

use super::schema::ScoreTable;
use crate::error::SyntaxError;
use crate::parser::Bracket;
use crate::validation::{validate_lines, LineStatus, ValidationResult};

/// Both puzzle answers for one validated input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scores {
    /// Sum of penalties over corrupted lines
    pub corrupted: u64,
    /// Middle completion score over incomplete lines
    pub completion: u64,
}

/// Penalty a single classified line contributes to the corruption score
pub fn corruption_penalty(status: &LineStatus, table: &ScoreTable) -> u64 {
    match status {
        LineStatus::Corrupted { found, .. } => table.corruption_penalty(*found),
        LineStatus::Valid | LineStatus::Incomplete { .. } => 0,
    }
}

/// Score a completion sequence: multiply the running total, then add points
///
/// Saturates at `u64::MAX`; about 27 pending closers are enough to overflow.
pub fn completion_score(completion: &[Bracket], table: &ScoreTable) -> u64 {
    completion.iter().fold(0u64, |score, bracket| {
        score
            .saturating_mul(table.completion_multiplier())
            .saturating_add(table.completion_points(*bracket))
    })
}

/// Middle value of the scores, 0 when there are none
///
/// With an even count the upper of the two middle values is returned.
pub fn middle_score(mut scores: Vec<u64>) -> u64 {
    if scores.is_empty() {
        return 0;
    }
    scores.sort_unstable();
    scores[scores.len() / 2]
}

impl Scores {
    /// Score an already validated input
    ///
    /// Both totals saturate at `u64::MAX` instead of overflowing.
    pub fn from_validation(result: &ValidationResult, table: &ScoreTable) -> Self {
        let corrupted = result
            .lines
            .iter()
            .map(|report| corruption_penalty(&report.status, table))
            .fold(0u64, u64::saturating_add);

        let completion = middle_score(
            result
                .lines
                .iter()
                .filter_map(|report| match &report.status {
                    LineStatus::Incomplete { completion } => Some(completion_score(completion, table)),
                    _ => None,
                })
                .collect(),
        );

        Self {
            corrupted,
            completion,
        }
    }
}

/// Sum the corruption penalties of `lines` using the built-in table
pub fn score_corrupted<S: AsRef<str>>(lines: &[S]) -> Result<u64, SyntaxError> {
    score_corrupted_with(lines, &ScoreTable::aoc_2021())
}

pub fn score_corrupted_with<S: AsRef<str>>(
    lines: &[S],
    table: &ScoreTable,
) -> Result<u64, SyntaxError> {
    let result = validate_lines(lines)?;
    Ok(Scores::from_validation(&result, table).corrupted)
}

/// Middle completion score of the incomplete `lines` using the built-in table
pub fn score_incomplete<S: AsRef<str>>(lines: &[S]) -> Result<u64, SyntaxError> {
    score_incomplete_with(lines, &ScoreTable::aoc_2021())
}

pub fn score_incomplete_with<S: AsRef<str>>(
    lines: &[S],
    table: &ScoreTable,
) -> Result<u64, SyntaxError> {
    let result = validate_lines(lines)?;
    Ok(Scores::from_validation(&result, table).completion)
}
