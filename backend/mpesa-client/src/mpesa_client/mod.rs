pub mod builder;
pub mod endpoints;
mod operations;
pub(crate) mod response;

pub use builder::MpesaClientBuilder;

use crate::auth::{Authenticator, Credentials, TokenStore};
use crate::error::MpesaClientError;

use models::{AccessToken, Environment};

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Typed client for the Daraja API.
///
/// Cloning is cheap and clones share one token cache. Two clients built
/// separately never share tokens.
#[derive(Clone)]
pub struct MpesaClient {
    http: Client,
    base_url: Url,
    environment: Environment,
    authenticator: Authenticator,
    token_store: Arc<dyn TokenStore>,
    log_traffic: bool,
}

impl MpesaClient {
    /// Client with default settings for `environment`.
    pub fn new(
        credentials: Credentials,
        environment: Environment,
    ) -> Result<Self, MpesaClientError> {
        Self::builder(credentials)
            .with_environment(environment)
            .build()
    }

    pub fn builder(credentials: Credentials) -> MpesaClientBuilder {
        MpesaClientBuilder::new(credentials)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The cache backing this client, shared with its clones.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.token_store
    }

    /// POST `request` to `endpoint` with a bearer token and decode the reply.
    ///
    /// A 401 is answered by fetching a fresh token and sending the same body
    /// once more. Whatever the second attempt returns is final.
    async fn execute<Req, Resp>(
        &self,
        endpoint: &str,
        request: &Req,
    ) -> Result<Resp, MpesaClientError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = self.base_url.join(endpoint)?;
        let body = serde_json::to_vec(request)?;

        if self.log_traffic {
            debug!("POST {} body: {}", url, String::from_utf8_lossy(&body));
        }

        let token = self.authenticator.bearer_token().await?;
        let (mut status, mut text) = self.send(&url, &body, &token).await?;

        if status == StatusCode::UNAUTHORIZED {
            warn!("{endpoint} rejected the access token, refreshing and retrying once");

            let token = self.authenticator.refresh_after_rejection(&token).await?;
            (status, text) = self.send(&url, &body, &token).await?;
        }

        response::decode_body(status, &text)
    }

    async fn send(
        &self,
        url: &Url,
        body: &[u8],
        token: &AccessToken,
    ) -> Result<(StatusCode, String), MpesaClientError> {
        let response = self
            .http
            .post(url.clone())
            .bearer_auth(token.value())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body.to_vec())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if self.log_traffic {
            debug!("{} responded HTTP {}: {}", url, status.as_u16(), text);
        }

        Ok((status, text))
    }
}
