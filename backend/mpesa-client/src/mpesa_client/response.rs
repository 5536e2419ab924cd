use crate::error::MpesaClientError;

use common::HttpStatusCode;
use models::ErrorResponse;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

const UNKNOWN_STATUS_REASON: &str = "Unknown Status";

/// Turn a status line and body into the typed result.
///
/// Only 200 is success. Any other status yields [`MpesaClientError::Api`],
/// decoded from the body when it has the gateway's error shape and otherwise
/// synthesized from the status code and reason phrase.
#[track_caller]
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, MpesaClientError> {
    if HttpStatusCode(status.as_u16()).is_ok() {
        return serde_json::from_str(body)
            .map_err(|e| MpesaClientError::decode(status.as_u16(), e.to_string()));
    }

    Err(MpesaClientError::api(status.as_u16(), error_response(status, body)))
}

fn error_response(status: StatusCode, body: &str) -> ErrorResponse {
    serde_json::from_str::<ErrorResponse>(body).unwrap_or_else(|_| {
        ErrorResponse::from_status(
            status.as_u16(),
            status.canonical_reason().unwrap_or(UNKNOWN_STATUS_REASON),
        )
    })
}
