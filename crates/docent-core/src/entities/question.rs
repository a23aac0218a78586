use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Platform, Trend};

/// A question a designer asked the assistant. Static seed data, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DesignerQuestion {
    pub id: String,
    pub question: String,
    /// Related component names, in the order the designer tagged them.
    pub component: Vec<String>,
    pub context: String,
    pub platform: Platform,
    pub timestamp: DateTime<Utc>,
    pub designer: String,
    pub team: String,
}

/// Questions sharing the same component list and context.
///
/// Derived on every call; `frequency` always equals `questions.len()`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionCluster {
    pub id: String,
    pub topic: String,
    pub component: Vec<String>,
    /// Members, newest first.
    pub questions: Vec<DesignerQuestion>,
    pub frequency: usize,
    pub trend: Trend,
    pub contexts: Vec<String>,
    pub last_asked: DateTime<Utc>,
    pub first_asked: DateTime<Utc>,
}
