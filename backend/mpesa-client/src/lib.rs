//! Async client for the Safaricom Daraja (M-Pesa) API.
//!
//! [`MpesaClient`] exposes one method per Daraja operation. Authentication
//! is transparent: tokens are fetched on first use, cached per client,
//! refreshed on expiry and refreshed once more when the gateway answers 401.

pub mod auth;
pub mod config;
pub mod error;
pub mod mpesa_client;

#[cfg(test)]
mod tests;

pub use auth::{Credentials, InMemoryTokenStore, TokenStore};
pub use config::ClientSettings;
pub use error::{ConfigError, CredentialError, CredentialFailure, MpesaClientError};
pub use mpesa_client::{MpesaClient, MpesaClientBuilder};
