//! Question clustering.
//!
//! Questions group together only when both their component list (order
//! sensitive) and their context match exactly. Each cluster gets a recency
//! trend relative to a reference instant and a topic label from a short list
//! of hand-written rules.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use docent_core::entities::{DesignerQuestion, QuestionCluster};
use docent_core::enums::Trend;
use docent_core::ids::cluster_id;

/// Cluster against the wall clock.
#[must_use]
pub fn cluster(questions: &[DesignerQuestion]) -> Vec<QuestionCluster> {
    cluster_at(questions, Utc::now())
}

/// Cluster with trends computed relative to `now`.
///
/// Clusters are numbered `cluster-{n}` in first-seen order, then sorted by
/// frequency descending. Ties keep first-seen order.
#[must_use]
pub fn cluster_at(questions: &[DesignerQuestion], now: DateTime<Utc>) -> Vec<QuestionCluster> {
    let mut index: HashMap<(&[String], &str), usize> = HashMap::new();
    let mut groups: Vec<Vec<&DesignerQuestion>> = Vec::new();

    for question in questions {
        let key = (question.component.as_slice(), question.context.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(question);
    }

    let mut clusters: Vec<QuestionCluster> = groups
        .into_iter()
        .enumerate()
        .filter_map(|(n, members)| build_cluster(n, &members, now))
        .collect();
    clusters.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    tracing::debug!(
        questions = questions.len(),
        clusters = clusters.len(),
        "clustered questions"
    );
    clusters
}

fn build_cluster(
    n: usize,
    members: &[&DesignerQuestion],
    now: DateTime<Utc>,
) -> Option<QuestionCluster> {
    let first = members.first()?;

    let mut questions: Vec<DesignerQuestion> = members.iter().map(|q| (*q).clone()).collect();
    questions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    let last_asked = questions.first()?.timestamp;
    let first_asked = questions.last()?.timestamp;

    let mut contexts: Vec<String> = Vec::new();
    for member in members {
        if !contexts.contains(&member.context) {
            contexts.push(member.context.clone());
        }
    }

    Some(QuestionCluster {
        id: cluster_id(n),
        topic: topic_for(&first.component, &first.context),
        component: first.component.clone(),
        frequency: questions.len(),
        trend: trend_at(now, first_asked, last_asked, questions.len()),
        contexts,
        last_asked,
        first_asked,
        questions,
    })
}

/// Recency trend for a cluster.
///
/// Rules are checked in order: earliest member under 3 days old is `new`;
/// latest under 1 day old with more than 2 members is `increasing`; latest
/// over 7 days old is `decreasing`; anything else is `recurring`.
#[must_use]
pub fn trend_at(
    now: DateTime<Utc>,
    first_asked: DateTime<Utc>,
    last_asked: DateTime<Utc>,
    size: usize,
) -> Trend {
    let since_first = now - first_asked;
    let since_last = now - last_asked;

    if since_first < TimeDelta::days(3) {
        Trend::New
    } else if since_last < TimeDelta::days(1) && size > 2 {
        Trend::Increasing
    } else if since_last > TimeDelta::days(7) {
        Trend::Decreasing
    } else {
        Trend::Recurring
    }
}

/// Human label for a cluster from its first component name and context.
///
/// An empty component list yields the context alone.
#[must_use]
pub fn topic_for(components: &[String], context: &str) -> String {
    let Some(component) = components.first().map(String::as_str) else {
        return context.to_string();
    };

    let label = match (component, context) {
        ("Drawer", "onboarding") => "Drawer usage for multi-step flows",
        ("Drawer", "general") => "Drawer sizing and configuration",
        ("Drawer", "navigation") => "Drawer navigation patterns",
        ("Button", "forms") => "Button usage in forms",
        ("DataTable", _) => "DataTable customization and behavior",
        (name, _) if name.contains("Modal") => "Modal sizing and nesting",
        _ => return format!("{component} - {context}"),
    };
    label.to_string()
}
