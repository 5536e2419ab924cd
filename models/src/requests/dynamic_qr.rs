use crate::requests::DynamicQrTransactionType;

use serde::{Deserialize, Serialize};

/// Generates a QR code a customer can scan to pay a merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicQrRequest {
    #[serde(rename = "MerchantName")]
    pub merchant_name: String,
    #[serde(rename = "RefNo")]
    pub ref_no: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "TrxCode")]
    pub trx_code: String,
    /// Credit party identifier: till, paybill, phone number or business number.
    #[serde(rename = "CPI")]
    pub cpi: String,
}

impl DynamicQrRequest {
    pub fn new(
        merchant_name: impl Into<String>,
        ref_no: impl Into<String>,
        amount: impl Into<String>,
        trx_code: DynamicQrTransactionType,
        cpi: impl Into<String>,
    ) -> Self {
        Self {
            merchant_name: merchant_name.into(),
            ref_no: ref_no.into(),
            amount: amount.into(),
            trx_code: trx_code.as_str().to_string(),
            cpi: cpi.into(),
        }
    }
}
