//! Syntax Scoring
//!
//! Classifies lines of bracket characters as valid, corrupted or incomplete
//! and computes the corruption and completion scores over a whole input.
//!
//! This library provides:
//! - Bracket tokenizing and line classification
//! - Corruption penalties and completion scores
//! - Score tables loaded from TOML
//! - Configuration management

pub mod config;
pub mod error;
pub mod input;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use error::{SyntaxError, TableError};
pub use parser::{tokenize_line, Bracket};
pub use scoring::{score_corrupted, score_incomplete, ScoreTable, TableRegistry};
pub use validation::{classify_line, validate_document, LineStatus, ValidationResult};
