//! Score Table Schema
//!
//! File types as they appear in TOML, and the runtime table they convert into.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::TableError;
use crate::parser::Bracket;

fn default_multiplier() -> u64 {
    5
}

/// Root score table file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TableFile {
    pub table: TableMeta,
    pub corrupted: HashMap<String, u64>,
    pub completion: HashMap<String, u64>,
}

/// Score table metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TableMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_multiplier")]
    pub completion_multiplier: u64,
}

/// Runtime score table (indexed by `Bracket::index`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    corrupted: [u64; 4],
    completion: [u64; 4],
    completion_multiplier: u64,
}

impl ScoreTable {
    /// Name of the built-in table
    pub const DEFAULT_NAME: &'static str = "aoc-2021";

    /// The points from the Advent of Code 2021 puzzle
    pub fn aoc_2021() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            version: Some("1".to_string()),
            description: Some("Syntax scoring points from Advent of Code 2021, day 10".to_string()),
            corrupted: [3, 57, 1197, 25137],
            completion: [1, 2, 3, 4],
            completion_multiplier: 5,
        }
    }

    /// Penalty for a corrupted line whose first illegal closer is `bracket`
    pub fn corruption_penalty(&self, bracket: Bracket) -> u64 {
        self.corrupted[bracket.index()]
    }

    /// Points for appending the closer of `bracket` during completion
    pub fn completion_points(&self, bracket: Bracket) -> u64 {
        self.completion[bracket.index()]
    }

    pub fn completion_multiplier(&self) -> u64 {
        self.completion_multiplier
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::aoc_2021()
    }
}

/// Resolve a `[section]` map into per-bracket points
///
/// Keys may name either side of a pair, so `"("` and `")"` are the same entry
/// and giving both is an error.
fn resolve_points(
    table: &str,
    section: &'static str,
    entries: &HashMap<String, u64>,
) -> Result<[u64; 4], TableError> {
    let mut points: [Option<u64>; 4] = [None; 4];

    // Sorted so the reported error does not depend on map order
    let mut keys: Vec<(&String, &u64)> = entries.iter().collect();
    keys.sort();

    for (key, value) in keys {
        let mut chars = key.chars();
        let bracket = match (chars.next(), chars.next()) {
            (Some(ch), None) => Bracket::from_char(ch).map(|(bracket, _)| bracket),
            _ => None,
        };
        let Some(bracket) = bracket else {
            return Err(TableError::UnknownKey {
                table: table.to_string(),
                section,
                key: key.clone(),
            });
        };
        if points[bracket.index()].replace(*value).is_some() {
            return Err(TableError::DuplicateKey {
                table: table.to_string(),
                section,
                bracket,
            });
        }
    }

    let mut resolved = [0; 4];
    for bracket in Bracket::ALL {
        resolved[bracket.index()] =
            points[bracket.index()].ok_or_else(|| TableError::MissingPoints {
                table: table.to_string(),
                section,
                bracket: bracket.closer(),
            })?;
    }
    Ok(resolved)
}

impl TryFrom<TableFile> for ScoreTable {
    type Error = TableError;

    fn try_from(file: TableFile) -> Result<Self, Self::Error> {
        let name = file.table.name;
        if file.table.completion_multiplier == 0 {
            return Err(TableError::ZeroMultiplier { table: name });
        }

        let corrupted = resolve_points(&name, "corrupted", &file.corrupted)?;
        let completion = resolve_points(&name, "completion", &file.completion)?;

        Ok(Self {
            name,
            version: file.table.version,
            description: file.table.description,
            corrupted,
            completion,
            completion_multiplier: file.table.completion_multiplier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ScoreTable, TableError> {
        let file: TableFile = toml::from_str(content).expect("valid TOML");
        ScoreTable::try_from(file)
    }

    #[test]
    fn test_embedded_table_matches_builtin() {
        let table = parse(include_str!("../../resources/tables/aoc-2021.score-table.toml"))
            .expect("embedded table");
        assert_eq!(table, ScoreTable::aoc_2021());
    }

    #[test]
    fn test_opener_keys_are_accepted() {
        let table = parse(
            r#"
[table]
name = "openers"

[corrupted]
"(" = 1
"[" = 2
"{" = 3
"<" = 4

[completion]
")" = 10
"]" = 20
"}" = 30
">" = 40
"#,
        )
        .expect("opener keys");

        assert_eq!(table.corruption_penalty(Bracket::Curly), 3);
        assert_eq!(table.completion_points(Bracket::Angle), 40);
        assert_eq!(table.completion_multiplier(), 5);
    }

    #[test]
    fn test_missing_points_rejected() {
        let err = parse(
            r#"
[table]
name = "partial"

[corrupted]
")" = 3

[completion]
")" = 1
"]" = 2
"}" = 3
">" = 4
"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TableError::MissingPoints {
                section: "corrupted",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse(
            r#"
[table]
name = "weird"

[corrupted]
")" = 3
"]" = 57
"}" = 1197
">" = 25137
"|" = 9

[completion]
")" = 1
"]" = 2
"}" = 3
">" = 4
"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            TableError::UnknownKey {
                table: "weird".to_string(),
                section: "corrupted",
                key: "|".to_string(),
            }
        );
    }

    #[test]
    fn test_both_sides_of_a_pair_rejected() {
        let content = r#"
[table]
name = "twice"

[corrupted]
"(" = 1
")" = 2
"]" = 57
"}" = 1197
">" = 25137

[completion]
")" = 1
"]" = 2
"}" = 3
">" = 4
"#;

        // Same outcome on every parse, whatever the map order
        for _ in 0..50 {
            assert_eq!(
                parse(content).unwrap_err(),
                TableError::DuplicateKey {
                    table: "twice".to_string(),
                    section: "corrupted",
                    bracket: Bracket::Round,
                }
            );
        }
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let err = parse(
            r#"
[table]
name = "flat"
completion_multiplier = 0

[corrupted]
")" = 3
"]" = 57
"}" = 1197
">" = 25137

[completion]
")" = 1
"]" = 2
"}" = 3
">" = 4
"#,
        )
        .unwrap_err();

        assert!(matches!(err, TableError::ZeroMultiplier { .. }));
    }
}
