use crate::requests::B2cCommandId;
use crate::ModelError;

use serde::{Deserialize, Serialize};

/// Business-to-customer disbursement.
///
/// `Amount` goes out as a JSON number, unlike the string amounts of the
/// other operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct B2cRequest {
    #[serde(rename = "InitiatorName")]
    pub initiator_name: String,
    #[serde(rename = "SecurityCredential")]
    pub security_credential: String,
    #[serde(rename = "CommandID")]
    pub command_id: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "PartyA")]
    pub party_a: String,
    #[serde(rename = "PartyB")]
    pub party_b: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    #[serde(rename = "Occasion")]
    pub occasion: String,
}

impl B2cRequest {
    /// Fails when `amount` is not a finite number.
    #[allow(clippy::too_many_arguments)]
    #[track_caller]
    pub fn new(
        initiator_name: impl Into<String>,
        security_credential: impl Into<String>,
        command_id: B2cCommandId,
        amount: &str,
        party_a: impl Into<String>,
        party_b: impl Into<String>,
        remarks: impl Into<String>,
        queue_timeout_url: impl Into<String>,
        result_url: impl Into<String>,
        occasion: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let amount = match amount.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                return Err(ModelError::validation(format!(
                    "B2C amount must be numeric, got '{amount}'"
                )));
            }
        };

        Ok(Self {
            initiator_name: initiator_name.into(),
            security_credential: security_credential.into(),
            command_id: command_id.as_str().to_string(),
            amount,
            party_a: party_a.into(),
            party_b: party_b.into(),
            remarks: remarks.into(),
            queue_timeout_url: queue_timeout_url.into(),
            result_url: result_url.into(),
            occasion: occasion.into(),
        })
    }
}
