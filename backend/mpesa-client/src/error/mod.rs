pub mod config;
pub mod credentials;
pub mod mpesa_client;

pub use config::ConfigError;
pub use credentials::{CredentialError, CredentialFailure};
pub use mpesa_client::MpesaClientError;
