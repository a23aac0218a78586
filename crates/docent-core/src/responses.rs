//! CLI response types returned by `dct` commands.
//!
//! These structs define the shape of output for commands like `dct ask`,
//! `dct health`, `dct trends`, `dct dashboard`, `dct audit` and `dct sources`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{
    AuditReport, ChatMessage, ComponentStats, HealthSummary, KnowledgeSource, MockResponse,
    PatternInsight, QuestionCluster, TrendPoint, WelcomeMessage,
};
use crate::enums::Role;

/// Response from `dct ask`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AskResponse {
    pub role: Role,
    pub query: String,
    pub response: MockResponse,
}

/// Response from `dct health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub summary: HealthSummary,
    pub components: Vec<ComponentStats>,
}

/// Response from `dct trends`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrendsResponse {
    pub insights: Vec<PatternInsight>,
    pub weekly: Vec<TrendPoint>,
    pub total_questions: u32,
    /// Average per day, formatted with one decimal (e.g. `"2.6"`).
    pub average_per_day: String,
}

/// Response from `dct dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    pub total_questions: usize,
    pub active_clusters: usize,
    pub increasing_topics: usize,
    pub escalations: u32,
}

/// Response from `dct audit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditResponse {
    pub file: String,
    pub role: Option<Role>,
    pub report: AuditReport,
}

/// Response from `dct history`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryResponse {
    pub role: Option<Role>,
    pub messages: Vec<ChatMessage>,
}

/// Response from `dct clusters`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClustersResponse {
    pub clusters: Vec<QuestionCluster>,
    /// Clusters before the limit was applied.
    pub total: usize,
}

/// Response from `dct welcome`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WelcomeResponse {
    pub role: Role,
    pub welcome: WelcomeMessage,
}

/// Response from `dct sources`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SourcesResponse {
    pub role: Option<Role>,
    pub sources: Vec<KnowledgeSource>,
}

/// Response from `dct sources --link`. `url` is `#` for an unknown source.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SourceLinkResponse {
    pub source: String,
    pub url: String,
}

/// Response from `dct prompt`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PromptResponse {
    pub role: Role,
    pub prompt: String,
}
