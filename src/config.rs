//! Configuration management for the syntax scorer.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project configuration file (`.syntax-scoring.toml`)
//! - Score table directory configuration

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Project configuration file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".syntax-scoring.toml";

/// Which puzzle answer to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    /// Sum of corruption penalties
    #[value(name = "1", alias = "corrupted")]
    One,
    /// Middle completion score
    #[value(name = "2", alias = "completion")]
    Two,
    Both,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Command-line arguments for the syntax scorer
#[derive(Debug, Parser)]
#[command(name = "syntax-score")]
#[command(about = "Score corrupted and incomplete lines of bracket syntax")]
#[command(version)]
pub struct Args {
    /// Input file, one line of brackets per row (stdin if omitted or '-')
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "1", help = "Puzzle part to answer (1, 2, both)")]
    pub part: Part,

    /// Explicitly specify the score table to use
    #[arg(long, help = "Score table to use (e.g., 'aoc-2021')")]
    pub table: Option<String>,

    /// Custom directory to search for score table files
    #[arg(long, help = "Directory containing score table TOML files")]
    pub table_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,

    /// Include per-line classification in the output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level, used when RUST_LOG is not set
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Contents of `.syntax-scoring.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Score table to use for this project
    pub table: Option<String>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file, `None` for stdin
    pub input: Option<PathBuf>,
    pub part: Part,
    pub format: Format,
    pub verbose: bool,
    /// Table name explicitly set via command line
    pub cli_table: Option<String>,
    /// Table name from the project config file
    pub project_table: Option<String>,
    /// Project config file that was loaded, if any
    pub project_config_path: Option<PathBuf>,
    /// User-global table directory
    pub user_table_dir: Option<PathBuf>,
    /// Workspace table directories, lowest priority first
    pub workspace_table_dirs: Vec<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, reading project
    /// configuration from the current directory
    pub fn from_args(args: Args) -> Result<Self> {
        let workspace = std::env::current_dir().context("Failed to determine current directory")?;
        Self::from_args_in(args, &workspace)
    }

    /// Create configuration from explicit arguments and a workspace directory
    /// (useful for testing)
    pub fn from_args_in(args: Args, workspace: &Path) -> Result<Self> {
        let project_path = workspace.join(PROJECT_CONFIG_FILE);
        let (project, project_config_path) = if project_path.is_file() {
            (load_project_config(&project_path)?, Some(project_path))
        } else {
            (ProjectConfig::default(), None)
        };

        // Add default user config directory
        let user_table_dir = dirs::config_dir().map(|dir| dir.join("syntax-scoring").join("tables"));

        let mut workspace_table_dirs = vec![workspace.join(".syntax-scoring").join("tables")];

        // Add user-specified directory if provided
        if let Some(custom_dir) = args.table_dir {
            workspace_table_dirs.push(custom_dir);
        }

        Ok(Config {
            input: args.input,
            part: args.part,
            format: args.format,
            verbose: args.verbose,
            cli_table: args.table,
            project_table: project.table,
            project_config_path,
            user_table_dir,
            workspace_table_dirs,
            log_level: args.log_level,
        })
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config_path.is_some()
    }
}

/// Parse a project configuration file
pub fn load_project_config(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project config: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse project config: {}", path.display()))
}
