use crate::auth::{Authenticator, Credentials, InMemoryTokenStore, TokenStore};
use crate::config::ClientSettings;
use crate::error::MpesaClientError;
use crate::mpesa_client::{MpesaClient, endpoints};

use common::{Clock, SystemClock};
use models::Environment;

use std::sync::Arc;
use std::time::Duration;

use log::info;
use reqwest::Client;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configures an [`MpesaClient`].
///
/// Everything except the credentials has a default: sandbox, a fresh
/// in-memory token store, the system clock and a 60 second timeout.
pub struct MpesaClientBuilder {
    credentials: Credentials,
    environment: Environment,
    base_url: Option<String>,
    http: Option<Client>,
    token_store: Option<Arc<dyn TokenStore>>,
    clock: Option<Arc<dyn Clock>>,
    timeout: Duration,
    log_traffic: Option<bool>,
}

impl MpesaClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::default(),
            base_url: None,
            http: None,
            token_store: None,
            clock: None,
            timeout: DEFAULT_TIMEOUT,
            log_traffic: None,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Send every request to `base_url` instead of the environment's host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a preconfigured HTTP client. [`with_timeout`](Self::with_timeout)
    /// is ignored when one is supplied.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn with_token_store(mut self, token_store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(token_store);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Log request and response bodies at debug level. Defaults to on for
    /// the sandbox only.
    pub fn with_traffic_logging(mut self, enabled: bool) -> Self {
        self.log_traffic = Some(enabled);
        self
    }

    pub fn with_settings(mut self, settings: &ClientSettings) -> Self {
        self.environment = settings.environment;
        self.timeout = settings.timeout();
        self.log_traffic = settings.log_traffic;
        if let Some(base_url) = &settings.base_url {
            self.base_url = Some(base_url.clone());
        }
        self
    }

    #[track_caller]
    pub fn build(self) -> Result<MpesaClient, MpesaClientError> {
        let base_url = parse_base_url(
            self.base_url
                .as_deref()
                .unwrap_or(self.environment.base_url()),
        )?;
        let token_url = base_url.join(endpoints::TOKEN)?;

        let http = match self.http {
            Some(http) => http,
            None => Client::builder().timeout(self.timeout).build()?,
        };

        let token_store: Arc<dyn TokenStore> = match self.token_store {
            Some(token_store) => token_store,
            None => Arc::new(InMemoryTokenStore::new()),
        };
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock::new()),
        };
        let log_traffic = self
            .log_traffic
            .unwrap_or(self.environment.logs_traffic_by_default());

        let authenticator = Authenticator::new(
            http.clone(),
            token_url,
            self.credentials,
            Arc::clone(&token_store),
            clock,
        );

        info!(
            "M-Pesa client ready for {} at {} (traffic logging {})",
            self.environment,
            base_url,
            if log_traffic { "on" } else { "off" }
        );

        Ok(MpesaClient {
            http,
            base_url,
            environment: self.environment,
            authenticator,
            token_store,
            log_traffic,
        })
    }
}

/// Relative endpoint paths join onto the last segment, so force a trailing slash.
#[track_caller]
fn parse_base_url(raw: &str) -> Result<Url, MpesaClientError> {
    let mut base_url = Url::parse(raw)?;
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    Ok(base_url)
}
