use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{HealthStatus, HealthTrend};

/// Uncertainty statistics for one component.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComponentStats {
    pub name: String,
    pub question_count: usize,
    pub unique_designers: usize,
    pub contexts: Vec<String>,
    pub trend: HealthTrend,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthSummary {
    pub components_tracked: usize,
    pub needs_attention: usize,
    pub warnings: usize,
}
