use crate::requests::command_ids::TRANSACTION_REVERSAL;
use crate::requests::ReversalReceiverType;

use serde::{Deserialize, Serialize};

/// Reverses a completed transaction back to its sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReversalRequest {
    #[serde(rename = "Initiator")]
    pub initiator: String,
    #[serde(rename = "SecurityCredential")]
    pub security_credential: String,
    #[serde(rename = "CommandID")]
    pub command_id: String,
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "ReceiverParty")]
    pub receiver_party: String,
    #[serde(rename = "ReceiverIdentifierType")]
    pub receiver_identifier_type: String,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "Occasion")]
    pub occasion: String,
}

impl TransactionReversalRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        initiator: impl Into<String>,
        security_credential: impl Into<String>,
        transaction_id: impl Into<String>,
        amount: impl Into<String>,
        receiver_party: impl Into<String>,
        receiver_identifier_type: ReversalReceiverType,
        result_url: impl Into<String>,
        queue_timeout_url: impl Into<String>,
        remarks: impl Into<String>,
        occasion: impl Into<String>,
    ) -> Self {
        Self {
            initiator: initiator.into(),
            security_credential: security_credential.into(),
            command_id: TRANSACTION_REVERSAL.to_string(),
            transaction_id: transaction_id.into(),
            amount: amount.into(),
            receiver_party: receiver_party.into(),
            receiver_identifier_type: receiver_identifier_type.as_str().to_string(),
            result_url: result_url.into(),
            queue_timeout_url: queue_timeout_url.into(),
            remarks: remarks.into(),
            occasion: occasion.into(),
        }
    }
}
