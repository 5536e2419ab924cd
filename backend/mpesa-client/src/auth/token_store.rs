//! Cache for the single bearer token a client uses.

use models::AccessToken;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Holds at most one access token.
///
/// `get` returns whatever is cached, expired or not; callers decide
/// staleness against their own clock. Implementations must make `put` and
/// `invalidate` atomic with respect to concurrent readers.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self) -> Option<AccessToken>;

    async fn put(&self, token: AccessToken);

    async fn invalidate(&self);
}

/// Process-local store, one per client instance.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<AccessToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    async fn put(&self, token: AccessToken) {
        *self.token.write().await = Some(token);
    }

    async fn invalidate(&self) {
        *self.token.write().await = None;
    }
}
