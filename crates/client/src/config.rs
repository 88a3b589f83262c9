//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STARFRUIT_API_BASE_URL` - Base URL of the commerce backend
//!
//! ## Optional
//! - `STARFRUIT_API_VERSION` - API version segment (default: v1)
//!
//! No timeout knob is exposed: in-flight calls run on the transport default.

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Commerce backend configuration.
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// API version segment (e.g., v1).
    pub api_version: String,
}

impl CommerceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or the base
    /// URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_required_env("STARFRUIT_API_BASE_URL")?;
        let api_version = get_env_or_default("STARFRUIT_API_VERSION", "v1");

        Self::new(&base_url, &api_version)
    }

    /// Build a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the base URL does not parse.
    pub fn new(base_url: &str, api_version: &str) -> Result<Self, ConfigError> {
        Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STARFRUIT_API_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api_version.to_string(),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
