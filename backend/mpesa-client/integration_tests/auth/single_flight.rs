use crate::helpers::{
    ManualClock, STK_PUSH_PATH, TOKEN_PATH, client_for, count_requests, mount_token_endpoint,
    sample_stk_push, stk_ok_body, t0, token_body,
};

use std::time::Duration;

use futures_util::future::join_all;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONCURRENT_CALLS: usize = 10;

/// **VALUE**: Concurrent callers on an empty store trigger exactly one token request.
///
/// **WHY THIS MATTERS**: A burst of payments at startup would otherwise issue
/// one token request per call, and each new token can invalidate the previous
/// one upstream, turning the burst into a cascade of 401s.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Waiters skip the re-check after acquiring the refresh lock
/// - The lock is released before the new token is stored
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_empty_store_when_many_calls_race_then_one_token_request_is_sent() {
    // GIVEN: A slow token endpoint so every caller arrives while it is in flight
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body("shared-token"))
                .set_delay(Duration::from_millis(150)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(CONCURRENT_CALLS as u64)
        .mount(&server)
        .await;
    let client = client_for(&server, ManualClock::starting_at(t0()));
    let request = sample_stk_push();

    // WHEN: Ten calls are issued at once
    let calls = (0..CONCURRENT_CALLS).map(|_| {
        let client = client.clone();
        let request = request.clone();
        tokio::spawn(async move { client.initiate_stk_push(&request).await })
    });
    let results = join_all(calls).await;

    // THEN: All succeed and share one token
    for result in results {
        assert!(result.unwrap().is_ok());
    }
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 1);
}

/// **VALUE**: Dropping the caller that started a refresh does not abandon it.
///
/// **WHY THIS MATTERS**: Request futures are routinely dropped by timeouts and
/// `select!`. The refresh they started is shared with every queued caller and
/// must still land in the store.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn given_refresh_in_flight_when_caller_is_cancelled_then_token_is_still_stored() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body("survivor"))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, ManualClock::starting_at(t0()));
    let request = sample_stk_push();

    // WHEN: The first caller gives up while the token request is in flight
    let cancelled = tokio::time::timeout(
        Duration::from_millis(50),
        client.initiate_stk_push(&request),
    )
    .await;
    assert!(cancelled.is_err());
    tokio::time::sleep(Duration::from_millis(400)).await;

    // THEN: The refresh completed and the next call reuses its token
    let cached = client.token_store().get().await.unwrap();
    assert_eq!(cached.value(), "survivor");
    client.initiate_stk_push(&request).await.unwrap();
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 1);
}

#[tokio::test]
async fn given_token_endpoint_fails_when_calling_then_error_is_returned_and_api_not_called() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "requestId": "",
            "errorCode": "400.008.01",
            "errorMessage": "Invalid Authentication passed"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server, ManualClock::starting_at(t0()));

    // WHEN
    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    // THEN
    assert_eq!(error.status_code(), Some(400));
    assert_eq!(error.error_response().unwrap().error_code, "400.008.01");
    assert!(client.token_store().get().await.is_none());
}

#[tokio::test]
async fn given_token_body_without_expiry_when_calling_then_returns_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "access_token": "x" })),
        )
        .mount(&server)
        .await;
    let client = client_for(&server, ManualClock::starting_at(t0()));

    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    assert_eq!(error.error_category(), "decode");
    assert_eq!(count_requests(&server, STK_PUSH_PATH).await, 0);
}

#[tokio::test]
async fn given_token_fetched_when_reading_store_then_it_carries_the_issued_value() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "stored", 1).await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .mount(&server)
        .await;
    let client = client_for(&server, ManualClock::starting_at(t0()));

    client.initiate_stk_push(&sample_stk_push()).await.unwrap();

    let cached = client.token_store().get().await.unwrap();
    assert_eq!(cached.value(), "stored");
    assert_eq!(cached.seconds_until_expiry(t0()), 3600);
}
