use crate::helpers::{
    ManualClock, STK_PUSH_PATH, TOKEN_PATH, client_for, count_requests, last_authorization,
    mount_token_endpoint, sample_stk_push, seeded_client_for, stk_ok_body, t0,
};

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A valid cached token is used without contacting the token endpoint.
///
/// **WHY THIS MATTERS**: Daraja rate-limits token issuance. Fetching per call
/// would double request volume and eventually get the consumer key throttled.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The fast path ignores the store
/// - Expiry is compared against the wrong clock
#[tokio::test]
async fn given_valid_cached_token_when_calling_then_no_token_request_is_sent() {
    // GIVEN: A store seeded with a token valid for another hour
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "unused", 0).await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .and(header("Authorization", "Bearer cached-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "cached-token");

    // WHEN: Calling an operation
    let response = client.initiate_stk_push(&sample_stk_push()).await.unwrap();

    // THEN: The cached token was attached and no token was requested
    assert_eq!(response.response_code, "0");
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 0);
}

#[tokio::test]
async fn given_empty_store_when_calling_then_fetches_one_token_first() {
    // GIVEN
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "fresh-token", 1).await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, ManualClock::starting_at(t0()));

    // WHEN
    client.initiate_stk_push(&sample_stk_push()).await.unwrap();

    // THEN
    assert_eq!(
        last_authorization(&server, STK_PUSH_PATH).await.as_deref(),
        Some("Bearer fresh-token")
    );
    let cached = client.token_store().get().await.unwrap();
    assert_eq!(cached.value(), "fresh-token");
}

#[tokio::test]
async fn given_two_sequential_calls_when_token_valid_then_token_fetched_once() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "fresh-token", 1).await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server, ManualClock::starting_at(t0()));

    client.initiate_stk_push(&sample_stk_push()).await.unwrap();
    client.initiate_stk_push(&sample_stk_push()).await.unwrap();
}

/// **VALUE**: Clones share one cache; separately built clients do not.
///
/// **BUG THIS CATCHES**: A process-wide static cache would leak tokens between
/// clients configured with different credentials.
#[tokio::test]
async fn given_two_independent_clients_when_calling_then_each_fetches_its_own_token() {
    // GIVEN
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "fresh-token", 2).await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .mount(&server)
        .await;
    let first = client_for(&server, ManualClock::starting_at(t0()));
    let first_clone = first.clone();
    let second = client_for(&server, ManualClock::starting_at(t0()));

    // WHEN
    first.initiate_stk_push(&sample_stk_push()).await.unwrap();
    first_clone.initiate_stk_push(&sample_stk_push()).await.unwrap();
    second.initiate_stk_push(&sample_stk_push()).await.unwrap();

    // THEN: Verified by `.expect(2)` on the token endpoint
}
