use crate::{InMemoryTokenStore, TokenStore};

use models::AccessToken;

use chrono::{TimeDelta, Utc};

fn token(value: &str) -> AccessToken {
    AccessToken::new(value, Utc::now() + TimeDelta::seconds(3600))
}

#[tokio::test]
async fn given_new_store_when_getting_then_returns_none() {
    let store = InMemoryTokenStore::new();

    assert!(store.get().await.is_none());
}

#[tokio::test]
async fn given_token_put_when_getting_then_returns_same_token() {
    // GIVEN
    let store = InMemoryTokenStore::new();

    // WHEN
    store.put(token("tok1")).await;

    // THEN
    assert_eq!(store.get().await.unwrap().value(), "tok1");
}

#[tokio::test]
async fn given_cached_token_when_putting_another_then_replaces_it() {
    let store = InMemoryTokenStore::with_token(token("tok1"));

    store.put(token("tok2")).await;

    assert_eq!(store.get().await.unwrap().value(), "tok2");
}

#[tokio::test]
async fn given_cached_token_when_invalidated_then_store_is_empty() {
    let store = InMemoryTokenStore::with_token(token("tok1"));

    store.invalidate().await;

    assert!(store.get().await.is_none());
}

/// **VALUE**: The store hands back expired tokens untouched.
///
/// **WHY THIS MATTERS**: Staleness is judged by the authenticator against its
/// injected clock. A store that filtered by wall-clock time would disagree
/// with a test clock and break expiry scenarios.
#[tokio::test]
async fn given_expired_token_when_getting_then_still_returned() {
    let expired = AccessToken::new("old", Utc::now() - TimeDelta::seconds(1));
    let store = InMemoryTokenStore::with_token(expired.clone());

    assert_eq!(store.get().await, Some(expired));
}
