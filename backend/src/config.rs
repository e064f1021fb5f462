//! Configuration management for the Perishable Inventory Analytics Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with PIA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::ForecastPolicy;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Forecast policy thresholds (all have documented defaults)
    #[serde(default)]
    pub forecast: ForecastPolicy,

    /// Optional ML forecast service configuration
    #[serde(default)]
    pub ml: MlConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

/// ML forecast service configuration
///
/// The collaborator is optional: with no endpoint configured, summaries are
/// assembled without ML augmentation.
#[derive(Debug, Deserialize, Clone)]
pub struct MlConfig {
    /// Prediction API endpoint
    pub endpoint: Option<String>,

    /// Prediction API key
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_ml_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ml_timeout_secs() -> u64 {
    10
}

impl Default for MlConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_ml_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("PIA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PIA_ prefix)
            .add_source(
                Environment::with_prefix("PIA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
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
