// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, ScenarioStep, Settings, TraderConfig};

/// Loads the application settings from various sources.
///
/// Layers, later ones winning:
/// 1. Built-in defaults (the John/Alice scenario).
/// 2. An optional `config/base.toml` file.
/// 3. An optional environment-specific file (e.g., `config/development.toml`).
/// 4. Environment variables (e.g., `APP__APP__LOG_LEVEL=debug`).
pub fn load_settings() -> Result<Settings> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        .add_source(File::with_name("config/base").required(false))
        .add_source(File::with_name(&format!("config/{}", environment)).required(false))
        // The prefix is `APP`, separator is `__`.
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;

    Ok(settings)
}

/// Loads the settings from a single TOML file, bypassing the layered lookup.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Parses settings from TOML text. Missing sections fall back to their defaults.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    Ok(settings)
}
