use crate::requests::{C2bCommandId, C2bResponseType};

use serde::{Deserialize, Serialize};

/// Registers the confirmation and validation callbacks for a shortcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct C2bRegisterRequest {
    #[serde(rename = "ShortCode")]
    pub short_code: String,
    #[serde(rename = "ResponseType")]
    pub response_type: String,
    #[serde(rename = "ConfirmationURL")]
    pub confirmation_url: String,
    #[serde(rename = "ValidationURL")]
    pub validation_url: String,
}

impl C2bRegisterRequest {
    pub fn new(
        short_code: impl Into<String>,
        response_type: C2bResponseType,
        confirmation_url: impl Into<String>,
        validation_url: impl Into<String>,
    ) -> Self {
        Self {
            short_code: short_code.into(),
            response_type: response_type.as_str().to_string(),
            confirmation_url: confirmation_url.into(),
            validation_url: validation_url.into(),
        }
    }
}

/// Customer-to-business payment into a registered shortcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct C2bRequest {
    #[serde(rename = "ShortCode")]
    pub short_code: String,
    #[serde(rename = "CommandID")]
    pub command_id: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Msisdn")]
    pub msisdn: String,
    #[serde(rename = "BillRefNumber")]
    pub bill_ref_number: String,
}

impl C2bRequest {
    pub fn new(
        short_code: impl Into<String>,
        command_id: C2bCommandId,
        amount: impl Into<String>,
        msisdn: impl Into<String>,
        bill_ref_number: impl Into<String>,
    ) -> Self {
        Self {
            short_code: short_code.into(),
            command_id: command_id.as_str().to_string(),
            amount: amount.into(),
            msisdn: msisdn.into(),
            bill_ref_number: bill_ref_number.into(),
        }
    }
}
