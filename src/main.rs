use anyhow::{Context, Result};
use env_logger::Env;

use syntax_scoring::config::Config;
use syntax_scoring::input::load_input;
use syntax_scoring::report::Report;
use syntax_scoring::scoring::TableRegistry;
use syntax_scoring::validation::validate_document;

fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    let registry = TableRegistry::from_config(&config)?;
    let table = registry.active_table();
    log::info!("Using score table '{}'", table.name);

    let content = load_input(config.input.as_deref())?;
    let result = validate_document(&content).context("Failed to validate input")?;
    log::info!(
        "Classified {} lines ({} corrupted, {} incomplete)",
        result.lines.len(),
        result.corrupted().count(),
        result.incomplete().count()
    );

    let report = Report::new(&result, table, config.part, config.verbose);
    print!("{}", report.render(config.format)?);

    Ok(())
}
