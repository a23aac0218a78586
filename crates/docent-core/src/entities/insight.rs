use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Impact;

/// A recurring pattern detected across designer questions, with guidance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PatternInsight {
    pub id: String,
    pub pattern: String,
    pub description: String,
    pub impact: Impact,
    pub recommendation: String,
    pub affected_teams: Vec<String>,
    pub related_components: Vec<String>,
}

/// Question count for one labelled day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: String,
    pub count: u32,
}
