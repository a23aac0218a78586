use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::IssueSeverity;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditIssue {
    #[serde(rename = "type")]
    pub severity: IssueSeverity,
    pub message: String,
    pub suggestion: String,
}

/// Result of auditing an uploaded UI screenshot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditReport {
    /// 0..=100, higher is more compliant.
    pub score: u32,
    pub issues: Vec<AuditIssue>,
}
