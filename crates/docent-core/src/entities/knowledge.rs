use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SourceType;

/// One of the official documentation sources answers may cite.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KnowledgeSource {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SourceType,
    pub base_url: String,
    pub description: String,
}

/// Greeting that opens a chat, with starter prompts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WelcomeMessage {
    pub text: String,
    pub suggested_questions: Vec<String>,
}
