//! Consumer key and secret for the client-credentials grant.
//!
//! # Security
//! - Both values wrapped in [`RedactedSecret`] (redacted Debug, zeroized on drop)
//! - Never logged or serialized
//! - Validated before the first token request so obvious mistakes fail fast

use crate::error::{CredentialError, CredentialFailure};

use common::RedactedSecret;

use std::env;
use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, info, warn};

pub const CONSUMER_KEY_ENV: &str = "MPESA_CONSUMER_KEY";
pub const CONSUMER_SECRET_ENV: &str = "MPESA_CONSUMER_SECRET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: RedactedSecret,
    consumer_secret: RedactedSecret,
}

impl Credentials {
    /// Validate and wrap a consumer key/secret pair.
    #[track_caller]
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        let consumer_key = consumer_key.into();
        let consumer_secret = consumer_secret.into();

        validate("consumer_key", &consumer_key, true)?;
        validate("consumer_secret", &consumer_secret, false)?;

        Ok(Self {
            consumer_key: RedactedSecret::new(consumer_key),
            consumer_secret: RedactedSecret::new(consumer_secret),
        })
    }

    /// Read `MPESA_CONSUMER_KEY` and `MPESA_CONSUMER_SECRET`, loading a `.env`
    /// file first if one exists.
    #[track_caller]
    pub fn from_env() -> Result<Self, CredentialError> {
        if try_load_dotenv().is_none() {
            debug!("No .env file found - will check existing environment variables");
        }

        let consumer_key =
            env::var(CONSUMER_KEY_ENV).map_err(|_| CredentialError::missing(CONSUMER_KEY_ENV))?;
        let consumer_secret = env::var(CONSUMER_SECRET_ENV)
            .map_err(|_| CredentialError::missing(CONSUMER_SECRET_ENV))?;

        Self::new(consumer_key, consumer_secret)
    }

    pub fn consumer_key(&self) -> &RedactedSecret {
        &self.consumer_key
    }

    /// Value of the `Authorization` header for the token endpoint.
    pub fn basic_auth_header(&self) -> String {
        let pair = format!(
            "{}:{}",
            self.consumer_key.expose(),
            self.consumer_secret.expose()
        );
        format!("Basic {}", STANDARD.encode(pair))
    }
}

#[track_caller]
fn validate(field: &'static str, value: &str, is_key: bool) -> Result<(), CredentialError> {
    if value.trim().is_empty() {
        return Err(CredentialError::invalid(field, CredentialFailure::Empty));
    }

    // The key is the user half of a Basic auth pair
    if is_key && value.contains(':') {
        return Err(CredentialError::invalid(
            field,
            CredentialFailure::ContainsColon,
        ));
    }

    if value.chars().any(char::is_whitespace) {
        return Err(CredentialError::invalid(
            field,
            CredentialFailure::ContainsWhitespace,
        ));
    }

    if let Some(pattern) = detect_placeholder(value) {
        return Err(CredentialError::invalid(
            field,
            CredentialFailure::PlaceholderDetected { pattern },
        ));
    }

    Ok(())
}

/// Detect placeholder values left over from `.env.example` files.
///
/// Only whole values are matched. Generated keys are random alphanumerics and
/// may contain any short substring.
fn detect_placeholder(value: &str) -> Option<&'static str> {
    let lower = value.to_lowercase();

    static WHOLE_VALUES: &[(&str, &str)] = &[
        ("your-consumer-key", "your-consumer-key"),
        ("your_consumer_key", "your_consumer_key"),
        ("your-consumer-secret", "your-consumer-secret"),
        ("your_consumer_secret", "your_consumer_secret"),
        ("consumer_key", "consumer_key"),
        ("consumer_secret", "consumer_secret"),
        ("changeme", "changeme"),
        ("placeholder", "placeholder"),
    ];

    for (pattern, name) in WHOLE_VALUES {
        if lower == *pattern {
            return Some(name);
        }
    }

    if lower.starts_with('<') && lower.ends_with('>') {
        return Some("<...>");
    }

    if lower.ends_with("...") {
        return Some("ellipsis");
    }

    let mut chars = value.chars();
    if let Some(first) = chars.next()
        && value.len() >= 10
        && chars.all(|c| c == first)
    {
        return Some("repeated_char");
    }

    None
}

/// Load `.env` from the working directory, then from the executable's directory.
fn try_load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    let exe_path = env::current_exe().ok()?;
    let env_path = exe_path.parent()?.join(".env");
    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => {
            info!("Loaded .env from: {:?}", env_path);
            Some(env_path)
        }
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
