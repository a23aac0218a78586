//! Per-component question pressure.
//!
//! A question tagged with several components counts toward each of them.

use std::collections::{HashMap, HashSet};

use docent_core::entities::{ComponentStats, DesignerQuestion, HealthSummary};
use docent_core::enums::{HealthStatus, HealthTrend};

/// Question count above which a component needs attention (with enough designers).
pub const ATTENTION_QUESTIONS: usize = 5;
/// Distinct designer count above which a busy component needs attention.
pub const ATTENTION_DESIGNERS: usize = 3;
/// Question count above which a component is flagged as a warning.
pub const WARNING_QUESTIONS: usize = 3;

/// Stats for every component mentioned, busiest first. Ties keep first-seen order.
#[must_use]
pub fn component_health(questions: &[DesignerQuestion]) -> Vec<ComponentStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut designers: HashMap<&str, HashSet<&str>> = HashMap::new();
    let mut contexts: HashMap<&str, Vec<String>> = HashMap::new();

    for question in questions {
        for name in &question.component {
            let name = name.as_str();
            let count = counts.entry(name).or_insert_with(|| {
                order.push(name);
                0
            });
            *count += 1;
            designers
                .entry(name)
                .or_default()
                .insert(question.designer.as_str());
            let seen = contexts.entry(name).or_default();
            if !seen.contains(&question.context) {
                seen.push(question.context.clone());
            }
        }
    }

    let mut stats: Vec<ComponentStats> = order
        .into_iter()
        .map(|name| {
            let question_count = counts.get(name).copied().unwrap_or_default();
            let unique_designers = designers.get(name).map_or(0, HashSet::len);
            let (status, trend) = classify(question_count, unique_designers);
            ComponentStats {
                name: name.to_string(),
                question_count,
                unique_designers,
                contexts: contexts.remove(name).unwrap_or_default(),
                trend,
                status,
            }
        })
        .collect();
    stats.sort_by(|a, b| b.question_count.cmp(&a.question_count));
    stats
}

/// Status and trend for a component's counts.
#[must_use]
pub const fn classify(question_count: usize, unique_designers: usize) -> (HealthStatus, HealthTrend) {
    if question_count > ATTENTION_QUESTIONS && unique_designers > ATTENTION_DESIGNERS {
        (HealthStatus::NeedsAttention, HealthTrend::Increasing)
    } else if question_count > WARNING_QUESTIONS {
        (HealthStatus::Warning, HealthTrend::Stable)
    } else {
        (HealthStatus::Healthy, HealthTrend::Stable)
    }
}

#[must_use]
pub fn summarize(stats: &[ComponentStats]) -> HealthSummary {
    HealthSummary {
        components_tracked: stats.len(),
        needs_attention: stats
            .iter()
            .filter(|s| s.status == HealthStatus::NeedsAttention)
            .count(),
        warnings: stats
            .iter()
            .filter(|s| s.status == HealthStatus::Warning)
            .count(),
    }
}
