use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Source;
use crate::enums::{BookingState, ComponentPreview, MessageRole, TrustBadge};

/// One entry of the chat history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MessageMeta>,
}

/// Optional metadata carried by assistant messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageMeta {
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub trust_badges: Vec<TrustBadge>,
    #[serde(default)]
    pub suggested_questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_preview: Option<ComponentPreview>,
    #[serde(default)]
    pub suggest_video_answer: bool,
}
