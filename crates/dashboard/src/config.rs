//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SHOES_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOES_PORT` - Listen port (default: 3000)
//! - `SHOES_BASE_URL` - Public URL; `https://` enables secure cookies
//!   (default: <http://localhost:3000>)
//! - `SHOES_DATA_FILE` - Path of the CSV data file (default: `shoes_data.csv`)
//! - `SHOES_STORE_ID` - Numeric store ID (default: 1)
//! - `SHOES_STORE_NAME` - Store name (default: My Shoes Store)
//! - `SHOES_STORE_ADDRESS` - Store address (default: Rengasdengklok Street No. 45)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use shoe_inventory_core::{StoreId, StoreInfo};

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "shoes_data.csv";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the dashboard
    pub base_url: String,
    /// CSV file holding the persisted inventory
    pub data_file: PathBuf,
    /// Identity of the store shown on the dashboard
    pub store: StoreInfo,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            store: StoreInfo::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = parse_env("SHOES_HOST", defaults.host)?;
        let port = parse_env("SHOES_PORT", defaults.port)?;
        let base_url = get_env_or_default("SHOES_BASE_URL", &defaults.base_url);
        let data_file = get_optional_env("SHOES_DATA_FILE")
            .map_or(defaults.data_file, PathBuf::from);

        let store = StoreInfo::new(
            StoreId::new(parse_env("SHOES_STORE_ID", defaults.store.id.as_i32())?),
            get_env_or_default("SHOES_STORE_NAME", &defaults.store.name),
            get_env_or_default("SHOES_STORE_ADDRESS", &defaults.store.address),
        );

        Ok(Self {
            host,
            port,
            base_url,
            data_file,
            store,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies must be marked `Secure`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_file, PathBuf::from("shoes_data.csv"));
        assert_eq!(config.store.name, "My Shoes Store");
        assert_eq!(config.store.address, "Rengasdengklok Street No. 45");
        assert!(!config.is_secure());
    }

    #[test]
    fn test_socket_addr() {
        let config = DashboardConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8501,
            ..DashboardConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8501);
    }

    #[test]
    fn test_https_base_url_is_secure() {
        let config = DashboardConfig {
            base_url: "https://shoes.example.com".to_string(),
            ..DashboardConfig::default()
        };
        assert!(config.is_secure());
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let port: u16 = parse_env("SHOES_TEST_UNSET_PORT_VARIABLE", 3000).unwrap();
        assert_eq!(port, 3000);
    }
}
