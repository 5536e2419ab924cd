use crate::requests::command_ids::ACCOUNT_BALANCE;
use crate::requests::IdentifierType;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalanceRequest {
    #[serde(rename = "Initiator")]
    pub initiator: String,
    #[serde(rename = "SecurityCredential")]
    pub security_credential: String,
    #[serde(rename = "CommandID")]
    pub command_id: String,
    #[serde(rename = "PartyA")]
    pub party_a: String,
    #[serde(rename = "IdentifierType")]
    pub identifier_type: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
}

impl AccountBalanceRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        initiator: impl Into<String>,
        security_credential: impl Into<String>,
        party_a: impl Into<String>,
        identifier_type: IdentifierType,
        remarks: impl Into<String>,
        queue_timeout_url: impl Into<String>,
        result_url: impl Into<String>,
    ) -> Self {
        Self {
            initiator: initiator.into(),
            security_credential: security_credential.into(),
            command_id: ACCOUNT_BALANCE.to_string(),
            party_a: party_a.into(),
            identifier_type: identifier_type.as_str().to_string(),
            remarks: remarks.into(),
            queue_timeout_url: queue_timeout_url.into(),
            result_url: result_url.into(),
        }
    }
}
