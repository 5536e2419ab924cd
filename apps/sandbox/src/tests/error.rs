use crate::error::SandboxError;

use models::{ErrorResponse, ModelError};
use mpesa_client::MpesaClientError;

#[test]
fn given_client_error_when_converted_then_keeps_category() {
    // GIVEN
    let client_error = MpesaClientError::api(503, ErrorResponse::from_status(503, "Service Unavailable"));

    // WHEN
    let error = SandboxError::from(client_error);

    // THEN
    match &error {
        SandboxError::Client { category, message, .. } => {
            assert_eq!(*category, "server_error");
            assert!(message.contains("503"));
        }
        other => panic!("expected Client error, got {other:?}"),
    }
    assert!(error.to_string().starts_with("Client Error (server_error)"));
}

#[test]
fn given_model_error_when_converted_then_becomes_request_error() {
    let error = SandboxError::from(ModelError::validation("Amount is required"));

    assert!(matches!(error, SandboxError::Request { .. }));
    assert!(error.to_string().contains("Amount is required"));
}

#[test]
fn given_sandbox_error_when_formatted_then_includes_location() {
    let error = SandboxError::sandbox("boom");

    let message = error.to_string();

    assert!(message.contains("Sandbox Error: boom"));
    assert!(message.contains("error.rs"));
}
