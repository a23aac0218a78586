use std::path::Path;

use docent_config::DocentConfig;
use docent_core::responses::AuditResponse;
use docent_insights::audit::{generate_audit, score_band, validate_upload};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::commands::shared::role::optional_role;
use crate::output::table::render_entity_table;
use crate::output::{output_with, table_options};
use crate::progress::Progress;

pub async fn handle(
    args: &AuditArgs,
    config: &DocentConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = optional_role(args.role.as_deref())?;
    validate_upload(Path::new(&args.file))?;

    let spinner = Progress::spinner("Analyzing screenshot against the design system…");
    tokio::time::sleep(config.audit.analysis_delay()).await;
    let report = generate_audit(role);
    spinner.finish_clear();
    tracing::info!(file = %args.file, score = report.score, "audit complete");

    let response = AuditResponse {
        file: args.file.clone(),
        role,
        report,
    };
    output_with(&response, flags.format, render)
}

fn render(response: &AuditResponse) -> String {
    let score = response.report.score;
    let rows = response
        .report
        .issues
        .iter()
        .map(|issue| {
            vec![
                issue.severity.to_string(),
                issue.message.clone(),
                issue.suggestion.clone(),
            ]
        })
        .collect::<Vec<_>>();

    format!(
        "{}\nCompliance score: {score}/100 ({})\n\n{}",
        response.file,
        score_band(score),
        render_entity_table(&["severity", "finding", "suggestion"], &rows, table_options())
    )
}
