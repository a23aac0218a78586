use std::fmt::Write as _;

use anyhow::Context;
use chrono::Utc;
use docent_config::DocentConfig;
use docent_core::enums::Trend;
use docent_core::responses::ClustersResponse;
use docent_insights::dashboard::relative_date_label;
use docent_insights::{cluster, seed_questions};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClustersArgs;
use crate::commands::shared::limit::row_limit;
use crate::commands::shared::parse::parse_enum;
use crate::output::table::render_entity_table;
use crate::output::{output_with, table_options};

pub fn handle(args: &ClustersArgs, config: &DocentConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let trend = args
        .trend
        .as_deref()
        .map(|raw| parse_enum::<Trend>(raw, "trend"))
        .transpose()?;

    let questions = seed_questions().context("failed to load question data")?;
    let mut clusters = cluster(&questions);
    if let Some(trend) = trend {
        clusters.retain(|c| c.trend == trend);
    }

    let total = clusters.len();
    clusters.truncate(row_limit(flags.limit, config.general.default_limit));
    tracing::debug!(total, shown = clusters.len(), "clustered questions");

    let response = ClustersResponse { clusters, total };
    output_with(&response, flags.format, |response| {
        render(response, args.questions)
    })
}

fn render(response: &ClustersResponse, with_questions: bool) -> String {
    let now = Utc::now();
    let rows = response
        .clusters
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.topic.clone(),
                c.frequency.to_string(),
                c.trend.to_string(),
                c.contexts.join(", "),
                relative_date_label(c.last_asked, now),
            ]
        })
        .collect::<Vec<_>>();

    let mut out = render_entity_table(
        &["id", "topic", "asked", "trend", "contexts", "last asked"],
        &rows,
        table_options(),
    );

    if with_questions {
        for c in &response.clusters {
            let _ = write!(out, "\n\n{} ({})", c.topic, c.id);
            for question in &c.questions {
                let _ = write!(
                    out,
                    "\n  - {} ({}, {})",
                    question.question, question.designer, question.team
                );
            }
        }
    }

    if response.clusters.len() < response.total {
        let _ = write!(
            out,
            "\n\nShowing {} of {} clusters",
            response.clusters.len(),
            response.total
        );
    }
    out
}
