//! Configuration management for the Retail Forecast server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with RFE_ prefix

use std::collections::HashMap;

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    ForecastEngine, ForecastHorizon, ForecastResult, Season, SeasonalMultiplierTable,
    DEFAULT_SAFETY_BUFFER_DAYS,
};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Forecast engine configuration
    pub forecast: ForecastConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Days of cover added to every category reorder quantity
    pub safety_buffer_days: u32,

    /// Horizon used when a request does not name one
    pub default_horizon_days: ForecastHorizon,

    /// Per-category overrides merged over the standard multiplier table
    #[serde(default)]
    pub multipliers: HashMap<String, HashMap<Season, Decimal>>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("RFE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("forecast.safety_buffer_days", i64::from(DEFAULT_SAFETY_BUFFER_DAYS))?
            .set_default("forecast.default_horizon_days", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RFE_ prefix)
            .add_source(
                Environment::with_prefix("RFE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ForecastConfig {
    /// Build the engine, rejecting invalid multipliers or buffer lengths
    pub fn build_engine(&self) -> ForecastResult<ForecastEngine> {
        let table = SeasonalMultiplierTable::standard().with_overrides(&self.multipliers)?;
        ForecastEngine::new(table, self.safety_buffer_days)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            safety_buffer_days: DEFAULT_SAFETY_BUFFER_DAYS,
            default_horizon_days: ForecastHorizon::Days30,
            multipliers: HashMap::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            forecast: ForecastConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_forecast_config_builds_standard_engine() {
        let engine = ForecastConfig::default().build_engine().unwrap();
        assert_eq!(engine.safety_buffer_days(), 15);
        assert_eq!(engine.multipliers(), &SeasonalMultiplierTable::standard());
    }

    #[test]
    fn test_overrides_applied_to_engine() {
        let mut config = ForecastConfig::default();
        config.multipliers.insert(
            "Frames".to_string(),
            HashMap::from([(Season::Festival, Decimal::new(150, 2))]),
        );
        let engine = config.build_engine().unwrap();
        assert_eq!(
            engine.multipliers().multiplier_for("Frames", Season::Festival),
            Decimal::new(150, 2)
        );
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut config = ForecastConfig::default();
        config.multipliers.insert(
            "Frames".to_string(),
            HashMap::from([(Season::Festival, Decimal::new(-1, 0))]),
        );
        assert!(config.build_engine().is_err());
    }
}
