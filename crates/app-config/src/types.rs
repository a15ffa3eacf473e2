// In crates/app-config/src/types.rs

use serde::Deserialize;

use core_types::Price;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    #[serde(default)]
    pub app: AppSettings,

    /// Traders to create, registered with the stock in declaration order.
    #[serde(default = "default_traders")]
    pub traders: Vec<TraderConfig>,

    /// The steps driven against the stock once every trader is registered.
    #[serde(default = "default_scenario")]
    pub scenario: Vec<ScenarioStep>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            traders: default_traders(),
            scenario: default_scenario(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

/// Configuration for a single trader.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TraderConfig {
    pub name: String,
    /// Name of the trading strategy, e.g. `"aggressive"`.
    pub strategy: String,
}

/// One action of the scenario driver.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    SetPrice { price: Price },
    Register { trader: String },
    Remove { trader: String },
}

/// Helper functions for serde defaults
fn default_log_level() -> String { "warn".to_string() }

fn default_traders() -> Vec<TraderConfig> {
    vec![
        TraderConfig { name: "John".to_string(), strategy: "aggressive".to_string() },
        TraderConfig { name: "Alice".to_string(), strategy: "conservative".to_string() },
    ]
}

fn default_scenario() -> Vec<ScenarioStep> {
    let price = |value: i64| ScenarioStep::SetPrice { price: Price(value.into()) };
    vec![
        price(100),
        price(105),
        price(95),
        ScenarioStep::Remove { trader: "Alice".to_string() },
        price(110),
    ]
}
