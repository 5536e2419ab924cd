//! Shared building blocks for the M-Pesa client workspace.
//!
//! This crate holds the pieces every other crate leans on: error location
//! tracking, secret handling, HTTP status helpers and the clock port used
//! for token expiry.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Wire-level request/response data
//! - **mpesa-client**: Authenticated request pipeline operating on models
//! - **mpesa-sandbox**: CLI wiring everything together
//!
//! This layered architecture keeps concerns separated and makes testing easier.

pub mod clock;
pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
