use anyhow::Context;
use docent_core::responses::HealthResponse;
use docent_insights::health::{component_health, summarize};
use docent_insights::seed_questions;

use crate::cli::GlobalFlags;
use crate::output::table::render_entity_table;
use crate::output::{output_with, table_options};

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let questions = seed_questions().context("failed to load question data")?;
    let components = component_health(&questions);
    let response = HealthResponse {
        summary: summarize(&components),
        components,
    };
    output_with(&response, flags.format, render)
}

fn render(response: &HealthResponse) -> String {
    let summary = &response.summary;
    let rows = response
        .components
        .iter()
        .map(|stats| {
            vec![
                stats.name.clone(),
                stats.question_count.to_string(),
                stats.unique_designers.to_string(),
                stats.contexts.join(", "),
                stats.trend.to_string(),
                stats.status.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    format!(
        "{} components tracked · {} need attention · {} warnings\n\n{}",
        summary.components_tracked,
        summary.needs_attention,
        summary.warnings,
        render_entity_table(
            &["component", "questions", "designers", "contexts", "trend", "status"],
            &rows,
            table_options(),
        )
    )
}
