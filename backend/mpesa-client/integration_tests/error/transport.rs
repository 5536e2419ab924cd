use crate::helpers::{ManualClock, sample_stk_push, seeded_client_for, t0, test_credentials};

use mpesa_client::{MpesaClient, MpesaClientError};

use std::time::Duration;

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn given_unreachable_gateway_when_fetching_token_then_returns_transport_error() {
    // GIVEN: Nothing listens on port 1
    let client = MpesaClient::builder(test_credentials())
        .with_base_url(UNREACHABLE_BASE_URL)
        .with_clock(ManualClock::starting_at(t0()))
        .build()
        .unwrap();

    // WHEN
    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    // THEN
    match error {
        MpesaClientError::Transport { is_connection, .. } => assert!(is_connection),
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_cached_token_and_unreachable_gateway_when_calling_then_returns_transport_error() {
    let client = seeded_client_for(UNREACHABLE_BASE_URL, "tok1");

    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    assert!(matches!(error, MpesaClientError::Transport { .. }));
    assert_eq!(error.status_code(), None);
}

/// **VALUE**: A slow gateway surfaces as a timeout, not a hang.
#[tokio::test]
async fn given_slow_gateway_when_timeout_elapses_then_returns_timeout_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    let client = MpesaClient::builder(test_credentials())
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    // WHEN
    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    // THEN
    assert_eq!(error.error_category(), "timeout");
}
