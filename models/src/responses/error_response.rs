use std::fmt;

use serde::{Deserialize, Serialize};

/// Failure body returned by Daraja for any non-200 status.
///
/// When the gateway (or something in front of it) returns a body that does
/// not parse as this shape, [`ErrorResponse::from_status`] synthesizes one
/// from the HTTP status line instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "requestId", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "errorCode")]
    pub error_code: String,
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            request_id: None,
            error_code: error_code.into(),
            error_message: error_message.into(),
        }
    }

    /// `errorCode` is the numeric status, `errorMessage` the reason phrase.
    pub fn from_status(status_code: u16, reason_phrase: impl Into<String>) -> Self {
        Self::new(status_code.to_string(), reason_phrase)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.error_code, self.error_message)
    }
}
