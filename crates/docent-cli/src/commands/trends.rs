use std::fmt::Write as _;

use docent_core::responses::TrendsResponse;
use docent_insights::trends::trends_report;

use crate::cli::GlobalFlags;
use crate::output::table::render_entity_table;
use crate::output::{output_with, table_options};

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output_with(&trends_report(), flags.format, render)
}

fn render(report: &TrendsResponse) -> String {
    let rows = report
        .insights
        .iter()
        .map(|insight| {
            vec![
                insight.pattern.clone(),
                insight.impact.to_string(),
                insight.affected_teams.join(", "),
                insight.related_components.join(", "),
            ]
        })
        .collect::<Vec<_>>();

    let mut out = render_entity_table(
        &["pattern", "impact", "teams", "components"],
        &rows,
        table_options(),
    );

    out.push_str("\n\nRecommendations\n");
    for insight in &report.insights {
        let _ = write!(out, "\n  {}: {}", insight.pattern, insight.recommendation);
    }

    let _ = write!(
        out,
        "\n\nThis week: {} questions, {} per day\n",
        report.total_questions, report.average_per_day
    );
    let label_width = report
        .weekly
        .iter()
        .map(|point| point.date.chars().count())
        .max()
        .unwrap_or(0);
    for point in &report.weekly {
        let bar = "#".repeat(usize::try_from(point.count).unwrap_or(usize::MAX));
        let _ = write!(out, "\n  {:<label_width$}  {bar} {}", point.date, point.count);
    }
    out
}
