use docent_core::responses::{SourceLinkResponse, SourcesResponse};
use docent_match::sources::{build_source_url, knowledge_sources, sources_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SourcesArgs;
use crate::commands::shared::role::optional_role;
use crate::output::table::render_entity_table;
use crate::output::{output_with, table_options};

/// Link target printed for an unknown source id.
const UNKNOWN_LINK: &str = "#";

pub fn handle(args: &SourcesArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(id) = &args.link {
        let url = build_source_url(id, args.path.as_deref()).unwrap_or_else(|| {
            tracing::warn!(source = %id, "unknown knowledge source");
            UNKNOWN_LINK.to_string()
        });
        let response = SourceLinkResponse {
            source: id.clone(),
            url,
        };
        return output_with(&response, flags.format, |response| response.url.clone());
    }

    let role = optional_role(args.role.as_deref())?;
    let sources = match role {
        Some(role) => sources_for(role).into_iter().cloned().collect(),
        None => knowledge_sources().to_vec(),
    };

    output_with(&SourcesResponse { role, sources }, flags.format, render)
}

fn render(response: &SourcesResponse) -> String {
    let rows = response
        .sources
        .iter()
        .map(|source| {
            vec![
                source.id.clone(),
                source.label.clone(),
                source.kind.to_string(),
                source.base_url.clone(),
                source.description.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_entity_table(
        &["id", "label", "type", "url", "description"],
        &rows,
        table_options(),
    )
}
