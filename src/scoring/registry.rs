//! Score Table Registry
//!
//! In-memory registry of score tables with source priorities.
//! Loading priority: built-in < user-global < workspace.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::schema::{ScoreTable, TableFile};
use crate::config::Config;

/// Where a table came from; later variants override earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TablePriority {
    BuiltIn,
    UserGlobal,
    Workspace,
}

/// A table together with its source
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    pub table: ScoreTable,
    pub priority: TablePriority,
    pub source_path: Option<PathBuf>,
}

/// Registry of named score tables and the active selection
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: HashMap<String, LoadedTable>,
    active_table: Option<String>,
    fallback: ScoreTable,
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRegistry {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            active_table: None,
            fallback: ScoreTable::aoc_2021(),
        }
    }

    /// Registry holding only the embedded tables
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.add_builtin_tables();
        registry
    }

    /// Build the registry for a run: embedded tables, then the configured
    /// directories, then the effective selection
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::with_builtin();

        if let Some(dir) = &config.user_table_dir {
            registry.load_tables_from_directory(dir, TablePriority::UserGlobal)?;
        }
        for dir in &config.workspace_table_dirs {
            registry.load_tables_from_directory(dir, TablePriority::Workspace)?;
        }
        log::info!("Loaded {} score tables", registry.tables.len());

        // Priority: CLI > Project Config > Built-in Default
        if let Some(name) = &config.cli_table {
            if registry.set_active_table(name) {
                return Ok(registry);
            }
            log::warn!("CLI-specified table '{}' not found, falling back", name);
        }

        if let Some(name) = &config.project_table {
            if registry.set_active_table(name) {
                return Ok(registry);
            }
            let config_path = config
                .project_config_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| crate::config::PROJECT_CONFIG_FILE.to_string());
            log::warn!(
                "Project table '{}' from {} not found, falling back",
                name,
                config_path
            );
        }

        registry.set_active_table(ScoreTable::DEFAULT_NAME);
        Ok(registry)
    }

    /// Add a table unless a higher-priority one with the same name exists
    pub fn add_table(&mut self, loaded: LoadedTable) -> bool {
        let should_load = match self.tables.get(&loaded.table.name) {
            Some(existing) => loaded.priority >= existing.priority,
            None => true,
        };

        if should_load {
            self.tables.insert(loaded.table.name.clone(), loaded);
        }
        should_load
    }

    /// Add the tables embedded in the binary
    pub fn add_builtin_tables(&mut self) {
        let embedded_toml = include_str!("../../resources/tables/aoc-2021.score-table.toml");

        let table = match parse_table_content(embedded_toml, None) {
            Ok(table) => table,
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded score table: {:#}. Using compiled-in points.",
                    e
                );
                ScoreTable::aoc_2021()
            }
        };

        self.add_table(LoadedTable {
            table,
            priority: TablePriority::BuiltIn,
            source_path: None,
        });
    }

    /// Load every `*.toml` file in `dir`
    ///
    /// A missing directory is not an error. Files that fail to load are
    /// logged and skipped. Returns how many tables were added.
    pub fn load_tables_from_directory(&mut self, dir: &Path, priority: TablePriority) -> Result<usize> {
        if !dir.exists() {
            return Ok(0);
        }

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read table directory: {}", dir.display()))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("toml"))
            .collect();
        paths.sort();

        let mut added = 0;
        for path in paths {
            match self.load_table_file(&path, priority) {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(e) => log::error!("Failed to load score table {}: {:#}", path.display(), e),
            }
        }

        Ok(added)
    }

    /// Load a single table file
    pub fn load_table_file(&mut self, path: &Path, priority: TablePriority) -> Result<bool> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read score table: {}", path.display()))?;
        let table = parse_table_content(&content, Some(path))?;

        log::debug!("Loaded score table '{}' from {}", table.name, path.display());
        Ok(self.add_table(LoadedTable {
            table,
            priority,
            source_path: Some(path.to_path_buf()),
        }))
    }

    /// Set the active table
    pub fn set_active_table(&mut self, name: &str) -> bool {
        if self.tables.contains_key(name) {
            self.active_table = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// The active table, or the compiled-in points when nothing is selected
    pub fn active_table(&self) -> &ScoreTable {
        self.active_table
            .as_ref()
            .and_then(|name| self.tables.get(name))
            .map(|loaded| &loaded.table)
            .unwrap_or(&self.fallback)
    }

    pub fn get_table(&self, name: &str) -> Option<&LoadedTable> {
        self.tables.get(name)
    }

    /// List all available table names, sorted
    pub fn list_tables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Parse score table content from a TOML string
fn parse_table_content(content: &str, source_path: Option<&Path>) -> Result<ScoreTable> {
    let file: TableFile = toml::from_str(content).with_context(|| match source_path {
        Some(path) => format!("Failed to parse score table TOML: {}", path.display()),
        None => "Failed to parse built-in score table TOML".to_string(),
    })?;
    Ok(ScoreTable::try_from(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Bracket;

    #[test]
    fn test_builtin_table_is_registered() {
        let registry = TableRegistry::with_builtin();
        let loaded = registry.get_table("aoc-2021").expect("built-in table");

        assert_eq!(loaded.priority, TablePriority::BuiltIn);
        assert!(loaded.source_path.is_none());
        assert_eq!(registry.list_tables(), vec!["aoc-2021"]);
    }

    #[test]
    fn test_active_table_falls_back_to_builtin_points() {
        let registry = TableRegistry::new();
        assert_eq!(registry.active_table().corruption_penalty(Bracket::Angle), 25137);
    }

    #[test]
    fn test_set_unknown_active_table() {
        let mut registry = TableRegistry::with_builtin();
        assert!(!registry.set_active_table("missing"));
        assert!(registry.set_active_table("aoc-2021"));
        assert_eq!(registry.active_table().name, "aoc-2021");
    }

    #[test]
    fn test_lower_priority_does_not_override() {
        let mut registry = TableRegistry::new();
        let mut workspace = ScoreTable::aoc_2021();
        workspace.description = Some("workspace copy".to_string());

        assert!(registry.add_table(LoadedTable {
            table: workspace,
            priority: TablePriority::Workspace,
            source_path: None,
        }));
        assert!(!registry.add_table(LoadedTable {
            table: ScoreTable::aoc_2021(),
            priority: TablePriority::BuiltIn,
            source_path: None,
        }));

        let loaded = registry.get_table("aoc-2021").expect("table");
        assert_eq!(loaded.priority, TablePriority::Workspace);
        assert_eq!(loaded.table.description.as_deref(), Some("workspace copy"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let mut registry = TableRegistry::new();
        let added = registry
            .load_tables_from_directory(Path::new("/definitely/not/a/dir"), TablePriority::UserGlobal)
            .expect("missing dir is fine");
        assert_eq!(added, 0);
    }
}
