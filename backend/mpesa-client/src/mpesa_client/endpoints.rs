//! Paths relative to the environment's base URL.

use const_format::concatcp;

pub const GRANT_TYPE: &str = "client_credentials";
pub const TOKEN: &str = concatcp!("oauth/v1/generate?grant_type=", GRANT_TYPE);
pub const STK_PUSH: &str = "mpesa/stkpush/v1/processrequest";
pub const STK_PUSH_QUERY: &str = "mpesa/stkpushquery/v1/query";
pub const C2B_REGISTER_URL: &str = "mpesa/c2b/v1/registerurl";
/// The gateway serves C2B transactions from the registration path.
pub const C2B_TRANSACTION: &str = C2B_REGISTER_URL;
pub const B2C_PAYMENT_REQUEST: &str = "mpesa/b2c/v1/paymentrequest";
pub const TRANSACTION_STATUS: &str = "mpesa/transactionstatus/v1/query";
pub const ACCOUNT_BALANCE: &str = "mpesa/accountbalance/v1/query";
pub const REVERSAL: &str = "mpesa/reversal/v1/request";
pub const DYNAMIC_QR: &str = "mpesa/qrcode/v1/generate";
