//! Scoring
//!
//! Score tables and the two puzzle scores computed from classified lines.

pub mod registry;
pub mod schema;
pub mod score;

pub use registry::{LoadedTable, TablePriority, TableRegistry};
pub use schema::{ScoreTable, TableFile, TableMeta};
pub use score::{
    completion_score, corruption_penalty, middle_score, score_corrupted, score_corrupted_with,
    score_incomplete, score_incomplete_with, Scores,
};
