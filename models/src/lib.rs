//! Wire models for the Daraja M-Pesa API.
//!
//! Every request and response here is a flat, field-for-field mirror of the
//! upstream JSON contract. Field names are PascalCase on the wire and must
//! not drift. Values are validated by type only; amounts, phone numbers and
//! shortcodes are the caller's responsibility.

pub mod access_token;
pub mod environment;
pub mod error;
pub mod requests;
pub mod responses;
pub mod timestamp;

#[cfg(test)]
mod tests;

pub use access_token::AccessToken;
pub use environment::Environment;
pub use error::model_error::ModelError;
pub use requests::{
    AccountBalanceRequest, B2cCommandId, B2cRequest, C2bCommandId, C2bRegisterRequest,
    C2bRequest, C2bResponseType, DynamicQrRequest, DynamicQrTransactionType, IdentifierType,
    ReversalReceiverType, StkPushQueryRequest, StkPushRequest, StkPushRequestBuilder,
    StkPushTransactionType, TransactionReversalRequest, TransactionStatusRequest,
};
pub use responses::{
    AccountBalanceResponse, AuthorizationResponse, B2cResponse, C2bRegisterResponse,
    C2bResponse, ConversationResponse, DynamicQrResponse, ErrorResponse, ExpiresIn,
    StkPushQueryResponse, StkPushResponse, TransactionReversalResponse,
    TransactionStatusResponse,
};
pub use timestamp::{current_daraja_timestamp, daraja_timestamp, lipa_na_mpesa_password};
