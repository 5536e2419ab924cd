use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct C2bRegisterResponse {
    /// The gateway misspells this key as `OriginatorCoversationID`.
    #[serde(
        rename = "OriginatorConversationID",
        alias = "OriginatorCoversationID"
    )]
    pub originator_conversation_id: String,
    #[serde(rename = "ResponseCode")]
    pub response_code: String,
    #[serde(rename = "ResponseDescription")]
    pub response_description: String,
    #[serde(
        rename = "ConversationID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub conversation_id: Option<String>,
}
