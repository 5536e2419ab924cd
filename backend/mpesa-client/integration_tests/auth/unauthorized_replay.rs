use crate::helpers::{
    ManualClock, STK_PUSH_PATH, TOKEN_PATH, client_for, count_requests, last_authorization,
    mount_token_endpoint, mount_token_once, sample_stk_push, seeded_client_for, stk_ok_body, t0,
    token_body,
};

use mpesa_client::MpesaClientError;

use std::time::Duration;

use futures_util::future::join_all;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONCURRENT_CALLS: usize = 10;

/// **VALUE**: A 401 is answered with one refresh and one replay of the same call.
///
/// **WHY THIS MATTERS**: Daraja revokes tokens before their advertised expiry
/// (for example when another process fetches a new one). The caller should
/// see the successful replay, not the transient 401.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The rejected token is reused for the replay
/// - The replay is attempted more than once
/// - A fresh token is requested without invalidating the old one
#[tokio::test]
async fn given_api_rejects_cached_token_when_calling_then_refreshes_and_replays_once() {
    // GIVEN: A seeded token the gateway no longer accepts
    let server = MockServer::start().await;
    mount_token_once(&server, "tok2").await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .and(header("Authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .and(header("Authorization", "Bearer tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");

    // WHEN
    let response = client.initiate_stk_push(&sample_stk_push()).await.unwrap();

    // THEN: Two API requests, one token request, and the new token is cached
    assert_eq!(response.checkout_request_id, "ws_CO_191220191020363925");
    assert_eq!(count_requests(&server, STK_PUSH_PATH).await, 2);
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 1);
    assert_eq!(client.token_store().get().await.unwrap().value(), "tok2");
}

#[tokio::test]
async fn given_empty_store_and_first_call_unauthorized_when_calling_then_second_token_is_used() {
    // GIVEN
    let server = MockServer::start().await;
    mount_token_once(&server, "tok1").await;
    mount_token_once(&server, "tok2").await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
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

    // WHEN
    client.initiate_stk_push(&sample_stk_push()).await.unwrap();

    // THEN
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 2);
    assert_eq!(
        last_authorization(&server, STK_PUSH_PATH).await.as_deref(),
        Some("Bearer tok2")
    );
}

/// **VALUE**: Callers rejected with the same token share one refresh.
///
/// **WHY THIS MATTERS**: When Daraja revokes a token, every in-flight call
/// sees a 401 at once. Each new token can revoke the previous one upstream,
/// so one refresh per caller would keep the burst failing.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - A waiter discards the token another caller already fetched
/// - The rejected token is invalidated before the refresh lock is taken
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_many_calls_rejected_with_same_token_when_racing_then_one_refresh_serves_all() {
    // GIVEN: A revoked seeded token and a slow token endpoint
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body("tok2"))
                .set_delay(Duration::from_millis(150)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .and(header("Authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .and(header("Authorization", "Bearer tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stk_ok_body()))
        .expect(CONCURRENT_CALLS as u64)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    let request = sample_stk_push();

    // WHEN
    let calls = (0..CONCURRENT_CALLS).map(|_| {
        let client = client.clone();
        let request = request.clone();
        tokio::spawn(async move { client.initiate_stk_push(&request).await })
    });
    let results = join_all(calls).await;

    // THEN: Every call succeeds on the replay and one token was fetched
    for result in results {
        assert!(result.unwrap().is_ok());
    }
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 1);
    assert_eq!(client.token_store().get().await.unwrap().value(), "tok2");
}

/// **VALUE**: A second consecutive 401 is terminal.
///
/// **BUG THIS CATCHES**: An unbounded refresh loop against a gateway that
/// rejects the consumer key outright.
#[tokio::test]
async fn given_api_keeps_rejecting_when_calling_then_returns_unauthorized_api_error() {
    // GIVEN
    let server = MockServer::start().await;
    mount_token_once(&server, "tok2").await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");

    // WHEN
    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    // THEN
    assert!(error.is_unauthorized());
    match error {
        MpesaClientError::Api { error, .. } => {
            assert_eq!(error.error_code, "401");
            assert_eq!(error.error_message, "Unauthorized");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_non_401_failure_when_calling_then_no_refresh_is_attempted() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "unused", 0).await;
    Mock::given(method("POST"))
        .and(path(STK_PUSH_PATH))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");

    let error = client
        .initiate_stk_push(&sample_stk_push())
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(403));
    assert_eq!(count_requests(&server, TOKEN_PATH).await, 0);
}
