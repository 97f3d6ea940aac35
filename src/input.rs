//! Puzzle input loading.
//!
//! Rows are split on `\n` with a trailing `\r` dropped, so files written with
//! either Unix or Windows separators read the same. Rows are trimmed and
//! blank rows are skipped.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// A non-blank input row and its 1-based position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Split text into trimmed, non-blank rows
pub fn split_rows(content: &str) -> Vec<Row<'_>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let text = line.trim();
            if text.is_empty() {
                None
            } else {
                Some(Row {
                    number: idx + 1,
                    text,
                })
            }
        })
        .collect()
}

/// Read puzzle input from a file, or from stdin when `path` is `None` or `-`
pub fn load_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read input from stdin")?;
            Ok(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_rows() {
        let rows = split_rows("  ()\n\t[]  \n");
        assert_eq!(
            rows,
            vec![
                Row {
                    number: 1,
                    text: "()"
                },
                Row {
                    number: 2,
                    text: "[]"
                },
            ]
        );
    }

    #[test]
    fn test_split_skips_blank_rows_and_keeps_numbering() {
        let rows = split_rows("()\n\n   \n<>");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].number, 4);
        assert_eq!(rows[1].text, "<>");
    }

    #[test]
    fn test_split_handles_crlf() {
        let unix = split_rows("(]\n{}\n");
        let windows = split_rows("(]\r\n{}\r\n");
        assert_eq!(unix, windows);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_rows("").is_empty());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = load_input(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
