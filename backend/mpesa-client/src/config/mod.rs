//! Client settings loaded from TOML with environment overrides.

use crate::error::ConfigError;

use common::ErrorLocation;
use models::Environment;

use std::env;
use std::panic::Location;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE_NAME: &str = "mpesa.toml";
pub const ENVIRONMENT_ENV: &str = "MPESA_ENVIRONMENT";
pub const TIMEOUT_SECS_ENV: &str = "MPESA_TIMEOUT_SECS";

const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// `None` follows the environment's default.
    #[serde(default)]
    pub log_traffic: Option<bool>,
    /// Overrides the environment's host, e.g. for a local mock gateway.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            timeout_secs: default_timeout_secs(),
            log_traffic: None,
            base_url: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    60
}

impl ClientSettings {
    /// Load `{config_dir}/mpesa.toml`, then apply environment overrides.
    ///
    /// A missing file yields defaults. A file that exists but cannot be read,
    /// parsed or validated is an error.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(SETTINGS_FILE_NAME);

        let mut settings = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: path.clone(),
                source: e,
            })?;

            let settings: ClientSettings = toml::from_str(&contents).map_err(|e| {
                warn!("Failed to parse {}: {}", path.display(), e);
                ConfigError::ParseError {
                    location: ErrorLocation::from(Location::caller()),
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;

            info!("Settings loaded from {}", path.display());
            settings
        } else {
            info!(
                "Settings file not found at {}, using defaults",
                path.display()
            );
            Self::default()
        };

        settings.apply_env_overrides()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Apply `MPESA_ENVIRONMENT` and `MPESA_TIMEOUT_SECS` when set.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = env::var(ENVIRONMENT_ENV) {
            self.environment =
                Environment::from_str(&value).map_err(|e| ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("{ENVIRONMENT_ENV}: {e}"),
                })?;
        }

        if let Ok(value) = env::var(TIMEOUT_SECS_ENV) {
            self.timeout_secs =
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::ValidationError {
                        location: ErrorLocation::from(Location::caller()),
                        reason: format!("{TIMEOUT_SECS_ENV} must be a whole number, got '{value}'"),
                    })?;
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}s (must be {}-{})",
                    self.timeout_secs, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS
                ),
            });
        }

        if let Some(ref url) = self.base_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL format: {}", url),
            });
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn traffic_logging(&self) -> bool {
        self.log_traffic
            .unwrap_or(self.environment.logs_traffic_by_default())
    }
}
