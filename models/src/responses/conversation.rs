use serde::{Deserialize, Serialize};

/// Synchronous acknowledgement shared by the asynchronous operations.
///
/// The actual result is delivered to the request's `ResultURL`; these ids
/// correlate the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationResponse {
    #[serde(rename = "ConversationID")]
    pub conversation_id: String,
    #[serde(rename = "OriginatorConversationID")]
    pub originator_conversation_id: String,
    #[serde(rename = "ResponseCode")]
    pub response_code: String,
    #[serde(rename = "ResponseDescription")]
    pub response_description: String,
}

pub type C2bResponse = ConversationResponse;
pub type B2cResponse = ConversationResponse;
pub type TransactionStatusResponse = ConversationResponse;
pub type AccountBalanceResponse = ConversationResponse;
pub type TransactionReversalResponse = ConversationResponse;
