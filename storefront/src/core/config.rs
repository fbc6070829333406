//! Storefront configuration

use std::path::PathBuf;

/// Runtime configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the client state database
    pub data_dir: PathBuf,
    /// Directory for rotated log files
    pub log_dir: PathBuf,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON-formatted logs instead of plain text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    ///
    /// - `STOREFRONT_DATA_DIR`: client state directory (default `./data`)
    /// - `STOREFRONT_LOG_DIR`: log directory (default `./logs`)
    /// - `STOREFRONT_LOG_LEVEL`: log level (default `info`)
    /// - `STOREFRONT_LOG_JSON`: `true`/`1` for JSON logs (default off)
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("STOREFRONT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            log_dir: std::env::var("STOREFRONT_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./logs")),
            log_level: std::env::var("STOREFRONT_LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
            log_json: std::env::var("STOREFRONT_LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Test configuration rooted at a scratch directory
    pub fn with_overrides(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            log_dir: data_dir.join("logs"),
            data_dir,
            log_level: "debug".to_string(),
            log_json: false,
        }
    }

    /// Path of the embedded client state database
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("storefront.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
