//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup by the host shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Gymtrack API (no trailing slash)
    pub api_base_url: String,
    /// Path of the on-device catalog mirror database
    pub catalog_db_path: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            catalog_db_path: ":memory:".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `GYMTRACK_API_URL` is required; the catalog path defaults to a file
    /// in the working directory, which the mobile shells override with a
    /// platform data directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("GYMTRACK_API_URL")
            .map_err(|_| ConfigError::Missing("GYMTRACK_API_URL"))?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_base_url,
            catalog_db_path: env::var("GYMTRACK_CATALOG_DB")
                .unwrap_or_else(|_| "gymtrack_catalog.db".to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
