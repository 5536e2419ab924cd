//! One runnable scenario per Daraja operation, using the public sandbox
//! test shortcodes and MSISDN.

use crate::error::SandboxError;

use common::SystemClock;
use models::{
    AccountBalanceRequest, B2cCommandId, B2cRequest, C2bCommandId, C2bRegisterRequest,
    C2bRequest, C2bResponseType, DynamicQrRequest, DynamicQrTransactionType, IdentifierType,
    ReversalReceiverType, StkPushQueryRequest, StkPushRequest, StkPushTransactionType,
    TransactionReversalRequest, TransactionStatusRequest,
};
use mpesa_client::MpesaClient;

use std::env;
use std::fmt;

use clap::ValueEnum;
use log::info;

pub const LIPA_NA_MPESA_SHORT_CODE: &str = "174379";
pub const LIPA_NA_MPESA_PASS_KEY: &str =
    "bfb279f9aa9bdbcf158e97dd71a467cd2e0c893059b10f78e6b72ada1ed2c919";
pub const C2B_SHORT_CODE: &str = "600984";
pub const B2C_SHORT_CODE: &str = "600996";
pub const TEST_MSISDN: &str = "254708374149";
pub const DYNAMIC_QR_CPI: &str = "373132";

const CALLBACK_URL_ENV: &str = "MPESA_CALLBACK_URL";
const INITIATOR_NAME_ENV: &str = "MPESA_INITIATOR_NAME";
const SECURITY_CREDENTIAL_ENV: &str = "MPESA_SECURITY_CREDENTIAL";
const TRANSACTION_ID_ENV: &str = "MPESA_TRANSACTION_ID";

const DEFAULT_CALLBACK_URL: &str = "https://mydomain.com/mpesa/callback";
const DEFAULT_INITIATOR_NAME: &str = "testapi";
const DEFAULT_TRANSACTION_ID: &str = "OEI2AK4Q16";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Prompt the test MSISDN for a Lipa na M-Pesa payment.
    StkPush,
    /// Push a prompt, then query its status.
    StkQuery,
    C2bRegister,
    #[value(name = "c2b")]
    C2bTransaction,
    B2c,
    #[value(name = "status")]
    TransactionStatus,
    #[value(name = "balance")]
    AccountBalance,
    Reversal,
    #[value(name = "qr")]
    DynamicQr,
}

impl Demo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Demo::StkPush => "stk-push",
            Demo::StkQuery => "stk-query",
            Demo::C2bRegister => "c2b-register",
            Demo::C2bTransaction => "c2b",
            Demo::B2c => "b2c",
            Demo::TransactionStatus => "status",
            Demo::AccountBalance => "balance",
            Demo::Reversal => "reversal",
            Demo::DynamicQr => "qr",
        }
    }

    pub async fn run(&self, client: &MpesaClient, profile: &Profile) -> Result<(), SandboxError> {
        info!("Running {self} against {}", client.environment());

        match self {
            Demo::StkPush => {
                let response = client.initiate_stk_push(&stk_push(profile)?).await?;
                info!(
                    "STK push accepted: checkout {} ({})",
                    response.checkout_request_id, response.customer_message
                );
            }
            Demo::StkQuery => {
                let pushed = client.initiate_stk_push(&stk_push(profile)?).await?;
                let query = StkPushQueryRequest::new(
                    LIPA_NA_MPESA_SHORT_CODE,
                    LIPA_NA_MPESA_PASS_KEY,
                    pushed.checkout_request_id,
                    &SystemClock,
                );
                let response = client.query_stk_push_status(&query).await?;
                info!(
                    "STK query: result {} - {}",
                    response.result_code, response.result_desc
                );
            }
            Demo::C2bRegister => {
                let request = C2bRegisterRequest::new(
                    C2B_SHORT_CODE,
                    C2bResponseType::Completed,
                    format!("{}/confirmation", profile.callback_url),
                    format!("{}/validation", profile.callback_url),
                );
                let response = client.register_c2b_urls(&request).await?;
                info!(
                    "C2B URLs registered: {} ({})",
                    response.response_description, response.originator_conversation_id
                );
            }
            Demo::C2bTransaction => {
                let request = C2bRequest::new(
                    C2B_SHORT_CODE,
                    C2bCommandId::CustomerPayBillOnline,
                    "1",
                    TEST_MSISDN,
                    "sandbox-invoice",
                );
                let response = client.initiate_c2b_transaction(&request).await?;
                info!("C2B accepted: {}", response.response_description);
            }
            Demo::B2c => {
                let request = B2cRequest::new(
                    &profile.initiator_name,
                    &profile.security_credential,
                    B2cCommandId::BusinessPayment,
                    "10",
                    B2C_SHORT_CODE,
                    TEST_MSISDN,
                    "Sandbox payout",
                    format!("{}/b2c/timeout", profile.callback_url),
                    format!("{}/b2c/result", profile.callback_url),
                    "",
                )?;
                let response = client.initiate_b2c_transaction(&request).await?;
                info!("B2C accepted: conversation {}", response.conversation_id);
            }
            Demo::TransactionStatus => {
                let request = TransactionStatusRequest::new(
                    &profile.initiator_name,
                    &profile.security_credential,
                    &profile.transaction_id,
                    "",
                    B2C_SHORT_CODE,
                    IdentifierType::Shortcode,
                    format!("{}/status/result", profile.callback_url),
                    format!("{}/status/timeout", profile.callback_url),
                    "Sandbox status check",
                    "",
                );
                let response = client.transaction_status(&request).await?;
                info!("Status query accepted: conversation {}", response.conversation_id);
            }
            Demo::AccountBalance => {
                let request = AccountBalanceRequest::new(
                    &profile.initiator_name,
                    &profile.security_credential,
                    B2C_SHORT_CODE,
                    IdentifierType::Shortcode,
                    "Sandbox balance check",
                    format!("{}/balance/timeout", profile.callback_url),
                    format!("{}/balance/result", profile.callback_url),
                );
                let response = client.account_balance(&request).await?;
                info!("Balance query accepted: conversation {}", response.conversation_id);
            }
            Demo::Reversal => {
                let request = TransactionReversalRequest::new(
                    &profile.initiator_name,
                    &profile.security_credential,
                    &profile.transaction_id,
                    "1",
                    B2C_SHORT_CODE,
                    ReversalReceiverType::Default,
                    format!("{}/reversal/result", profile.callback_url),
                    format!("{}/reversal/timeout", profile.callback_url),
                    "Sandbox reversal",
                    "",
                );
                let response = client.reverse_transaction(&request).await?;
                info!("Reversal accepted: conversation {}", response.conversation_id);
            }
            Demo::DynamicQr => {
                let request = DynamicQrRequest::new(
                    "TEST SUPERMARKET",
                    "Invoice Test",
                    "1",
                    DynamicQrTransactionType::BuyGoods,
                    DYNAMIC_QR_CPI,
                );
                let response = client.generate_dynamic_qr(&request).await?;
                info!(
                    "QR generated: {} ({} base64 chars)",
                    response.response_description,
                    response.qr_code.len()
                );
            }
        }

        Ok(())
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-run values that differ between developers' sandbox apps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub callback_url: String,
    pub initiator_name: String,
    pub security_credential: String,
    pub transaction_id: String,
}

impl Profile {
    /// Read overrides from the environment, falling back to sandbox defaults.
    pub fn from_env() -> Self {
        Self {
            callback_url: env::var(CALLBACK_URL_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_CALLBACK_URL.to_string()),
            initiator_name: env::var(INITIATOR_NAME_ENV)
                .unwrap_or_else(|_| DEFAULT_INITIATOR_NAME.to_string()),
            security_credential: env::var(SECURITY_CREDENTIAL_ENV).unwrap_or_default(),
            transaction_id: env::var(TRANSACTION_ID_ENV)
                .unwrap_or_else(|_| DEFAULT_TRANSACTION_ID.to_string()),
        }
    }
}

#[track_caller]
pub fn stk_push(profile: &Profile) -> Result<StkPushRequest, SandboxError> {
    let request = StkPushRequest::builder()
        .with_business_short_code(LIPA_NA_MPESA_SHORT_CODE)
        .with_pass_key(LIPA_NA_MPESA_PASS_KEY)
        .with_transaction_type(StkPushTransactionType::CustomerPayBillOnline)
        .with_amount("1")
        .with_phone_number(TEST_MSISDN)
        .with_callback_url(&profile.callback_url)
        .with_account_reference("Sandbox")
        .with_transaction_desc("Sandbox payment")
        .build()?;

    Ok(request)
}
