//! Result summary and its text and JSON renderings.

use anyhow::Result;
use serde::Serialize;
use std::fmt::{self, Write};

use crate::config::{Format, Part};
use crate::scoring::{ScoreTable, Scores};
use crate::validation::{LineReport, LineStatus, ValidationResult};

/// Line counts per classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub valid: usize,
    pub corrupted: usize,
    pub incomplete: usize,
}

/// Everything the binary prints for one input
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub table: String,
    pub counts: StatusCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrupted_score: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_score: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LineReport>,
}

impl Report {
    pub fn new(result: &ValidationResult, table: &ScoreTable, part: Part, verbose: bool) -> Self {
        let scores = Scores::from_validation(result, table);
        let mut counts = StatusCounts::default();
        for report in &result.lines {
            match report.status {
                LineStatus::Valid => counts.valid += 1,
                LineStatus::Corrupted { .. } => counts.corrupted += 1,
                LineStatus::Incomplete { .. } => counts.incomplete += 1,
            }
        }

        let (corrupted_score, completion_score) = match part {
            Part::One => (Some(scores.corrupted), None),
            Part::Two => (None, Some(scores.completion)),
            Part::Both => (Some(scores.corrupted), Some(scores.completion)),
        };

        Self {
            table: table.name.clone(),
            counts,
            corrupted_score,
            completion_score,
            lines: if verbose { result.lines.clone() } else { Vec::new() },
        }
    }

    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
            Format::Text => Ok(self.render_text()?),
        }
    }

    /// Plain text: per-line details first (verbose only), then one score
    /// per line. A single requested part prints as a bare integer.
    fn render_text(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();

        for report in &self.lines {
            match &report.status {
                LineStatus::Valid => writeln!(out, "{}: valid", report.line)?,
                LineStatus::Corrupted {
                    expected: Some(expected),
                    found,
                    column,
                } => writeln!(
                    out,
                    "{}: corrupted at column {}, expected '{}' found '{}'",
                    report.line,
                    column,
                    expected.closer(),
                    found.closer()
                )?,
                LineStatus::Corrupted {
                    expected: None,
                    found,
                    column,
                } => writeln!(
                    out,
                    "{}: corrupted at column {}, unexpected '{}'",
                    report.line,
                    column,
                    found.closer()
                )?,
                LineStatus::Incomplete { .. } => writeln!(
                    out,
                    "{}: incomplete, complete with '{}'",
                    report.line,
                    report.status.completion_string().unwrap_or_default()
                )?,
            }
        }

        match (self.corrupted_score, self.completion_score) {
            (Some(score), None) | (None, Some(score)) => writeln!(out, "{}", score)?,
            (Some(corrupted), Some(completion)) => {
                writeln!(out, "part 1: {}", corrupted)?;
                writeln!(out, "part 2: {}", completion)?;
            }
            (None, None) => {}
        }

        Ok(out)
    }
}
