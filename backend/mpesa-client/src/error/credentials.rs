//! Errors raised while loading consumer credentials.

use common::ErrorLocation;

use std::fmt;
use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialError {
    #[error("Credential Missing Error: {variable} is not set {location}")]
    Missing {
        variable: &'static str,
        location: ErrorLocation,
    },

    #[error("Credential Validation Error: {field}: {reason} {location}")]
    Invalid {
        field: &'static str,
        reason: CredentialFailure,
        location: ErrorLocation,
    },
}

/// Why a consumer key or secret was rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialFailure {
    Empty,
    ContainsColon,
    ContainsWhitespace,
    PlaceholderDetected { pattern: &'static str },
}

impl fmt::Display for CredentialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "value is empty"),
            Self::ContainsColon => write!(f, "value contains ':'"),
            Self::ContainsWhitespace => write!(f, "value contains whitespace"),
            Self::PlaceholderDetected { pattern } => {
                write!(f, "detected placeholder pattern '{pattern}'")
            }
        }
    }
}

impl CredentialError {
    #[track_caller]
    pub fn missing(variable: &'static str) -> Self {
        CredentialError::Missing {
            variable,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid(field: &'static str, reason: CredentialFailure) -> Self {
        CredentialError::Invalid {
            field,
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn failure(&self) -> Option<&CredentialFailure> {
        match self {
            CredentialError::Invalid { reason, .. } => Some(reason),
            CredentialError::Missing { .. } => None,
        }
    }
}
