use crate::access_token::AccessToken;
use crate::ModelError;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of the token issuance endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    #[serde(alias = "accessToken")]
    pub access_token: String,
    #[serde(alias = "expiresIn")]
    pub expires_in: ExpiresIn,
}

/// Lifetime in seconds. Daraja sends it as a string; numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpiresIn {
    Seconds(u64),
    Text(String),
}

impl ExpiresIn {
    #[track_caller]
    pub fn seconds(&self) -> Result<u64, ModelError> {
        match self {
            ExpiresIn::Seconds(seconds) => Ok(*seconds),
            ExpiresIn::Text(text) => text.trim().parse::<u64>().map_err(|_| {
                ModelError::validation(format!("expires_in is not a number of seconds: '{text}'"))
            }),
        }
    }
}

impl AuthorizationResponse {
    /// Converts the relative lifetime into an absolute expiry from `issued_at`.
    #[track_caller]
    pub fn into_access_token(self, issued_at: DateTime<Utc>) -> Result<AccessToken, ModelError> {
        let expires_in = self.expires_in.seconds()?;
        Ok(AccessToken::expiring_in(
            self.access_token,
            issued_at,
            expires_in,
        ))
    }
}

impl fmt::Debug for AuthorizationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationResponse")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
