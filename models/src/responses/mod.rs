//! Response bodies. Unknown fields are ignored so upstream additions do not
//! break decoding.

pub mod authorization;
pub mod c2b_register;
pub mod conversation;
pub mod dynamic_qr;
pub mod error_response;
pub mod stk_push;

pub use authorization::{AuthorizationResponse, ExpiresIn};
pub use c2b_register::C2bRegisterResponse;
pub use conversation::{
    AccountBalanceResponse, B2cResponse, C2bResponse, ConversationResponse,
    TransactionReversalResponse, TransactionStatusResponse,
};
pub use dynamic_qr::DynamicQrResponse;
pub use error_response::ErrorResponse;
pub use stk_push::{StkPushQueryResponse, StkPushResponse};
