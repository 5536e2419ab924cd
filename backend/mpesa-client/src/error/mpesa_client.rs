//! The unified error for every client operation.
//!
//! - HTTP status codes are stored as [`HttpStatusCode`], never parsed back out of messages
//! - Transport failures keep the timeout/connection flags reqwest reports
//! - All variants include an `ErrorLocation` captured via `#[track_caller]`

use crate::error::CredentialError;

use common::{ErrorLocation, HttpStatusCode};
use models::ErrorResponse;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum MpesaClientError {
    /// No response was received.
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// HTTP 200 whose body does not match the expected schema.
    #[error("Decode Error: HTTP {status_code} - {message} {location}")]
    Decode {
        message: String,
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    /// Any non-200 response, from the token endpoint or an operation.
    #[error("API Error: HTTP {status_code} - {error} {location}")]
    Api {
        status_code: HttpStatusCode,
        error: ErrorResponse,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },

    /// The task refreshing the token panicked or was cancelled by the runtime.
    #[error("Refresh Aborted Error: {message} {location}")]
    RefreshAborted {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Credentials Error: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },
}

impl MpesaClientError {
    #[track_caller]
    pub fn api(status_code: u16, error: ErrorResponse) -> Self {
        MpesaClientError::Api {
            status_code: HttpStatusCode(status_code),
            error,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(status_code: u16, message: impl Into<String>) -> Self {
        MpesaClientError::Decode {
            message: message.into(),
            status_code: HttpStatusCode(status_code),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialization(message: impl Into<String>) -> Self {
        MpesaClientError::Serialization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn refresh_aborted(message: impl Into<String>) -> Self {
        MpesaClientError::RefreshAborted {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of the response that caused the error, if one arrived.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MpesaClientError::Api { status_code, .. } => Some(status_code.0),
            MpesaClientError::Decode { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }

    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            MpesaClientError::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            MpesaClientError::Api { status_code, .. } if status_code.is_unauthorized()
        )
    }

    /// Get error category for logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            MpesaClientError::Transport {
                is_timeout: true, ..
            } => "timeout",
            MpesaClientError::Transport {
                is_connection: true,
                ..
            } => "connection",
            MpesaClientError::Transport { .. } => "transport",
            MpesaClientError::Decode { .. } => "decode",
            MpesaClientError::Api { status_code, .. } if status_code.is_unauthorized() => {
                "unauthorized"
            }
            MpesaClientError::Api { status_code, .. } if status_code.is_client_error() => {
                "client_error"
            }
            MpesaClientError::Api { status_code, .. } if status_code.is_server_error() => {
                "server_error"
            }
            MpesaClientError::Api { .. } => "api",
            MpesaClientError::UrlParse { .. } => "url_parse",
            MpesaClientError::Serialization { .. } => "serialization",
            MpesaClientError::RefreshAborted { .. } => "refresh_aborted",
            MpesaClientError::InvalidCredentials { .. } => "credentials",
        }
    }
}

impl From<reqwest::Error> for MpesaClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Check the categories BEFORE converting to string
        let is_timeout = error.is_timeout();
        let is_connection = error.is_connect();

        MpesaClientError::Transport {
            message: error.to_string(),
            is_timeout,
            is_connection,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for MpesaClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        MpesaClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for MpesaClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        MpesaClientError::serialization(error.to_string())
    }
}

impl From<CredentialError> for MpesaClientError {
    #[track_caller]
    fn from(error: CredentialError) -> Self {
        MpesaClientError::InvalidCredentials {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
