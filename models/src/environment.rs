//! Daraja deployment targets.

use crate::ModelError;

use std::fmt;
use std::str::FromStr;

use const_format::concatcp;
use serde::{Deserialize, Serialize};

pub const SANDBOX_HOST: &str = "sandbox.safaricom.co.ke";
pub const PRODUCTION_HOST: &str = "api.safaricom.co.ke";
pub const SANDBOX_BASE_URL: &str = concatcp!("https://", SANDBOX_HOST);
pub const PRODUCTION_BASE_URL: &str = concatcp!("https://", PRODUCTION_HOST);

/// The gateway a client talks to. Fixed for the lifetime of a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn host(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_HOST,
            Environment::Production => PRODUCTION_HOST,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }

    /// Request/response bodies are logged by default only against the sandbox.
    pub fn logs_traffic_by_default(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            other => Err(ModelError::validation(format!(
                "Unknown environment '{other}' (expected 'sandbox' or 'production')"
            ))),
        }
    }
}
