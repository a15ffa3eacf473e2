// In app/src/main.rs

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use app_config::Settings;
use clap::{Parser, Subcommand};
use strategies::StdoutSink;
use tracing_subscriber::prelude::*;

mod scenario;
use crate::scenario::Scenario;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Watches a stock price and lets traders react to it.")]
struct Cli {
    /// Read settings from this TOML file instead of the layered `config/` lookup.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `app.log_level` (e.g., "info", "debug").
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Registers the configured traders and drives the price scenario. The default.
    Run,

    /// Lists the configured traders and their strategies.
    Traders,
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => app_config::load_settings_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => app_config::load_settings()?,
    };

    let log_level = cli.log_level.as_deref().unwrap_or(&settings.app.log_level);
    init_tracing(log_level)?;

    tracing::info!("Starting stock-watch");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_app(&settings)?,
        Commands::Traders => print_traders(&settings),
    }

    tracing::info!("stock-watch has finished successfully.");

    Ok(())
}

/// Installs the log subscriber. Logs go to stderr so stdout carries only trade lines.
fn init_tracing(log_level: &str) -> Result<()> {
    let level: tracing::Level = log_level
        .parse()
        .with_context(|| format!("Invalid log level: {}", log_level))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();

    Ok(())
}

// --- "Run" Subcommand Logic ---

fn run_app(settings: &Settings) -> Result<()> {
    let mut scenario = Scenario::build(&settings.traders, Rc::new(StdoutSink))?;
    tracing::info!(traders = settings.traders.len(), steps = settings.scenario.len(), "Scenario ready.");

    scenario.run(&settings.scenario)?;

    if let Some(price) = scenario.stock().price() {
        tracing::info!(%price, observers = scenario.stock().observer_count(), "Scenario complete.");
    }
    Ok(())
}

// --- "Traders" Subcommand Logic ---

fn print_traders(settings: &Settings) {
    for trader in &settings.traders {
        println!("{}: {}", trader.name, trader.strategy);
    }
}
