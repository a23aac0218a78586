use std::fmt::Write as _;

use anyhow::Context;
use chrono::Utc;
use docent_core::entities::DesignerQuestion;
use docent_core::responses::DashboardResponse;
use docent_insights::dashboard::{dashboard_stats, relative_date_label};
use docent_insights::{cluster, seed_questions};

use crate::cli::GlobalFlags;
use crate::output::table::render_entity_table;
use crate::output::{output_with, table_options};

const RECENT_QUESTIONS: usize = 5;

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let questions = seed_questions().context("failed to load question data")?;
    let clusters = cluster(&questions);
    let stats = dashboard_stats(&questions, &clusters);
    output_with(&stats, flags.format, |stats| render(stats, &questions))
}

fn render(stats: &DashboardResponse, questions: &[DesignerQuestion]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total questions     {}", stats.total_questions);
    let _ = writeln!(out, "Active clusters     {}", stats.active_clusters);
    let _ = writeln!(out, "Increasing topics   {}", stats.increasing_topics);
    let _ = writeln!(out, "Escalations         {}", stats.escalations);

    let mut recent = questions.iter().collect::<Vec<_>>();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    let now = Utc::now();
    let rows = recent
        .into_iter()
        .take(RECENT_QUESTIONS)
        .map(|question| {
            vec![
                relative_date_label(question.timestamp, now),
                question.designer.clone(),
                question.team.clone(),
                question.question.clone(),
            ]
        })
        .collect::<Vec<_>>();

    out.push_str("\nRecent questions\n");
    out.push_str(&render_entity_table(
        &["when", "designer", "team", "question"],
        &rows,
        table_options(),
    ));
    out
}
