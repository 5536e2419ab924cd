//! OAuth2 client-credentials flow with a shared, single-flight refresh.
//!
//! Every API call asks the [`Authenticator`] for a bearer token. A valid
//! cached token is returned straight from the store without touching the
//! refresh lock. Otherwise the caller joins the refresh: the first one in
//! fetches a new token, everyone queued behind it re-checks the store and
//! reuses what was just fetched.

pub mod credentials;
pub mod token_store;

pub use credentials::Credentials;
pub use token_store::{InMemoryTokenStore, TokenStore};

use crate::error::MpesaClientError;
use crate::mpesa_client::response::decode_body;

use common::Clock;
use models::{AccessToken, AuthorizationResponse};

use std::sync::Arc;

use log::{debug, info};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tokio::sync::Mutex;
use url::Url;

#[derive(Clone)]
pub(crate) struct Authenticator {
    state: Arc<AuthState>,
}

struct AuthState {
    http: Client,
    token_url: Url,
    credentials: Credentials,
    store: Arc<dyn TokenStore>,
    clock: Arc<dyn Clock>,
    /// Guards token issuance only. Never held across an API call.
    refresh_lock: Mutex<()>,
}

impl Authenticator {
    pub(crate) fn new(
        http: Client,
        token_url: Url,
        credentials: Credentials,
        store: Arc<dyn TokenStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state: Arc::new(AuthState {
                http,
                token_url,
                credentials,
                store,
                clock,
                refresh_lock: Mutex::new(()),
            }),
        }
    }

    /// A token that is not expired at the time of the call.
    pub(crate) async fn bearer_token(&self) -> Result<AccessToken, MpesaClientError> {
        if let Some(token) = self.state.store.get().await
            && !token.is_expired_at(self.state.clock.now())
        {
            return Ok(token);
        }

        self.refresh(None).await
    }

    /// A token other than `rejected`, which the gateway answered with 401.
    ///
    /// If a concurrent caller already replaced `rejected`, its replacement is
    /// reused instead of fetching another.
    pub(crate) async fn refresh_after_rejection(
        &self,
        rejected: &AccessToken,
    ) -> Result<AccessToken, MpesaClientError> {
        self.refresh(Some(rejected.value().to_string())).await
    }

    async fn refresh(&self, rejected: Option<String>) -> Result<AccessToken, MpesaClientError> {
        let state = Arc::clone(&self.state);

        // Detached so a caller dropping its future cannot abandon a refresh
        // other callers are queued on.
        tokio::spawn(async move { state.refresh_single_flight(rejected).await })
            .await
            .map_err(|e| MpesaClientError::refresh_aborted(e.to_string()))?
    }
}

impl AuthState {
    async fn refresh_single_flight(
        &self,
        rejected: Option<String>,
    ) -> Result<AccessToken, MpesaClientError> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(token) = self.store.get().await
            && !token.is_expired_at(self.clock.now())
            && rejected.as_deref() != Some(token.value())
        {
            debug!("Access token refreshed by a concurrent caller, reusing it");
            return Ok(token);
        }

        self.store.invalidate().await;

        let token = self.fetch_token().await?;
        self.store.put(token.clone()).await;

        Ok(token)
    }

    async fn fetch_token(&self) -> Result<AccessToken, MpesaClientError> {
        debug!("Requesting access token from {}", self.token_url);

        let response = self
            .http
            .get(self.token_url.clone())
            .header(AUTHORIZATION, self.credentials.basic_auth_header())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let authorization: AuthorizationResponse = decode_body(status, &body)?;

        let issued_at = self.clock.now();
        let token = authorization
            .into_access_token(issued_at)
            .map_err(|e| MpesaClientError::decode(status.as_u16(), e.to_string()))?;

        info!(
            "Access token acquired ({} chars, expires in {}s)",
            token.value().len(),
            token.seconds_until_expiry(issued_at)
        );

        Ok(token)
    }
}
