//! Validation Engine
//!
//! Clean separation of line classification from tokenizing and scoring.

pub mod engine;

pub use engine::{
    classify_line, classify_tokens, validate_document, validate_lines, validate_rows, Diagnostic,
    LineReport, LineStatus, Severity,
};

// Re-export common types
pub use engine::ValidationResult;
