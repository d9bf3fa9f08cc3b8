use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the commodity-group reference file.
pub const COMMODITY_GROUPS_DATA_PATH: &str = "COMMODITY_GROUPS_DATA_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Configuration for wiring up the intake core.
///
/// The transport shell (host/port, server lifecycle) is configured by the
/// embedding process, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the JSON file seeding the commodity-group catalog.
    pub commodity_group_data_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(COMMODITY_GROUPS_DATA_PATH)
            .map_err(|_| ConfigError::MissingEnv(COMMODITY_GROUPS_DATA_PATH))?;
        Ok(Self {
            commodity_group_data_path: PathBuf::from(path),
        })
    }

    /// Explicit construction, useful for tests.
    pub fn with_data_path(path: impl Into<PathBuf>) -> Self {
        Self {
            commodity_group_data_path: path.into(),
        }
    }
}
