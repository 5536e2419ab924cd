use crate::helpers::{
    ManualClock, STK_PUSH_PATH, TOKEN_PATH, client_for, count_requests, last_authorization,
    mount_token_once, sample_stk_push, stk_ok_body, t0,
};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Reproduces the documented lifetime scenario end to end.
///
/// `tok1` is issued at T0 with `expires_in: "3600"`. A call at T0+1800s reuses
/// it; a call at T0+3601s refreshes first and sends `tok2`.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - `expires_in` is treated as an absolute time
/// - Expiry is measured from the wall clock instead of the injected one
/// - An expired token is attached while a refresh is pending
#[tokio::test]
async fn given_token_lifetime_when_clock_advances_then_refreshes_only_after_expiry() {
    // GIVEN
    let server = MockServer::start().await;
    mount_token_once(&server, "tok1").await;
    mount_token_once(&server, "tok2").await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(3)
        .mount(&server)
        .await;
    let clock = ManualClock::starting_at(t0());
    let client = client_for(&server, clock.clone());
    let request = sample_stk_push();

    // WHEN: First call at T0
    client.initiate_stk_push(&request).await.unwrap();

    // THEN
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 1);

    // WHEN: Halfway through the lifetime
    clock.advance_secs(1800);
    client.initiate_stk_push(&request).await.unwrap();

    // THEN: Same token, no new request
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 1);
    assert_eq!(
        last_authorization(&server, STK_PUSH_PATH).await.as_deref(),
        Some("Bearer tok1")
    );

    // WHEN: One second past expiry
    clock.advance_secs(1801);
    client.initiate_stk_push(&request).await.unwrap();

    // THEN: Refreshed before sending
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 2);
    assert_eq!(
        last_authorization(&server, STK_PUSH_PATH).await.as_deref(),
        Some("Bearer tok2")
    );
}

#[tokio::test]
async fn given_call_at_exact_expiry_instant_when_calling_then_token_is_refreshed() {
    let server = MockServer::start().await;
    mount_token_once(&server, "tok1").await;
    mount_token_once(&server, "tok2").await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .mount(&server)
        .await;
    let clock = ManualClock::starting_at(t0());
    let client = client_for(&server, clock.clone());

    client.initiate_stk_push(&sample_stk_push()).await.unwrap();
    clock.advance_secs(3600);
    client.initiate_stk_push(&sample_stk_push()).await.unwrap();

    assert_eq!(count_requests(&server, TOKEN_PATH).await, 2);
}
