use docent_config::DocentConfig;
use docent_core::responses::HistoryResponse;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::limit::row_limit;
use crate::commands::shared::session::history_store;
use crate::output::answer::render_message;
use crate::output::{output, output_with};

#[derive(Debug, Serialize)]
struct ClearedResponse {
    cleared: bool,
    path: String,
}

pub fn handle(args: &HistoryArgs, config: &DocentConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(store) = history_store(config) else {
        anyhow::bail!("chat history is not persisted (session.persist = false)");
    };

    if args.clear {
        store.clear();
        let response = ClearedResponse {
            cleared: true,
            path: store.path().display().to_string(),
        };
        return output(&response, flags.format);
    }

    let snapshot = store.load();
    let keep = row_limit(flags.limit, config.general.default_limit);
    let skip = snapshot.messages.len().saturating_sub(keep);

    let response = HistoryResponse {
        role: snapshot.role,
        messages: snapshot.messages.into_iter().skip(skip).collect(),
    };
    output_with(&response, flags.format, render)
}

fn render(response: &HistoryResponse) -> String {
    if response.messages.is_empty() {
        return "No saved chat history.".to_string();
    }
    let header = response
        .role
        .map_or_else(String::new, |role| format!("Role: {}\n\n", role.label()));
    let body = response
        .messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{header}{body}")
}
