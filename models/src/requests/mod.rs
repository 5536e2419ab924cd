//! Request bodies, one per Daraja operation.

pub mod account_balance;
pub mod b2c;
pub mod c2b;
pub mod dynamic_qr;
pub mod stk_push;
pub mod stk_push_query;
pub mod transaction_reversal;
pub mod transaction_status;
pub mod types;

pub use account_balance::AccountBalanceRequest;
pub use b2c::B2cRequest;
pub use c2b::{C2bRegisterRequest, C2bRequest};
pub use dynamic_qr::DynamicQrRequest;
pub use stk_push::{StkPushRequest, StkPushRequestBuilder};
pub use stk_push_query::StkPushQueryRequest;
pub use transaction_reversal::TransactionReversalRequest;
pub use transaction_status::TransactionStatusRequest;
pub use types::{
    B2cCommandId, C2bCommandId, C2bResponseType, DynamicQrTransactionType, IdentifierType,
    ReversalReceiverType, StkPushTransactionType,
};

/// Fixed `CommandID` values for the operations that accept exactly one.
pub mod command_ids {
    pub const ACCOUNT_BALANCE: &str = "AccountBalance";
    pub const TRANSACTION_REVERSAL: &str = "TransactionReversal";
    pub const TRANSACTION_STATUS_QUERY: &str = "TransactionStatusQuery";
}
