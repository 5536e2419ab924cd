use common::ErrorLocation;
use models::ModelError;
use mpesa_client::{ConfigError, CredentialError, MpesaClientError};

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the sandbox binary.
///
/// Library errors are flattened to their display text here; the location
/// records where the sandbox received them.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// Error from this app
    #[error("Sandbox Error: {message} {location}")]
    Sandbox {
        message: String,
        location: ErrorLocation,
    },

    /// Settings or credentials could not be loaded
    #[error("Setup Error: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
    },

    /// A request body could not be built
    #[error("Request Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    /// The gateway call failed
    #[error("Client Error ({category}): {message} {location}")]
    Client {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl SandboxError {
    #[track_caller]
    pub fn sandbox(message: impl Into<String>) -> Self {
        SandboxError::Sandbox {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for SandboxError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        SandboxError::Setup {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CredentialError> for SandboxError {
    #[track_caller]
    fn from(error: CredentialError) -> Self {
        SandboxError::Setup {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for SandboxError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        SandboxError::Request {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MpesaClientError> for SandboxError {
    #[track_caller]
    fn from(error: MpesaClientError) -> Self {
        SandboxError::Client {
            category: error.error_category(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
