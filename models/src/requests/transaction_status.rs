use crate::requests::command_ids::TRANSACTION_STATUS_QUERY;
use crate::requests::IdentifierType;

use serde::{Deserialize, Serialize};

/// Status of an arbitrary M-Pesa transaction. The result arrives on `ResultURL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatusRequest {
    #[serde(rename = "Initiator")]
    pub initiator: String,
    #[serde(rename = "SecurityCredential")]
    pub security_credential: String,
    #[serde(rename = "CommandID")]
    pub command_id: String,
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    #[serde(rename = "OriginatorConversationId")]
    pub originator_conversation_id: String,
    #[serde(rename = "PartyA")]
    pub party_a: String,
    #[serde(rename = "IdentifierType")]
    pub identifier_type: String,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "Occasion")]
    pub occasion: String,
}

impl TransactionStatusRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        initiator: impl Into<String>,
        security_credential: impl Into<String>,
        transaction_id: impl Into<String>,
        originator_conversation_id: impl Into<String>,
        party_a: impl Into<String>,
        identifier_type: IdentifierType,
        result_url: impl Into<String>,
        queue_timeout_url: impl Into<String>,
        remarks: impl Into<String>,
        occasion: impl Into<String>,
    ) -> Self {
        Self {
            initiator: initiator.into(),
            security_credential: security_credential.into(),
            command_id: TRANSACTION_STATUS_QUERY.to_string(),
            transaction_id: transaction_id.into(),
            originator_conversation_id: originator_conversation_id.into(),
            party_a: party_a.into(),
            identifier_type: identifier_type.as_str().to_string(),
            result_url: result_url.into(),
            queue_timeout_url: queue_timeout_url.into(),
            remarks: remarks.into(),
            occasion: occasion.into(),
        }
    }
}
