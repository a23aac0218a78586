use docent_config::DocentConfig;
use docent_core::responses::AskResponse;
use docent_session::{AnswerSet, Responder};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::commands::shared::role::resolve_role;
use crate::output::answer::render_answer;
use crate::output::output_with;

pub fn handle(args: &AskArgs, config: &DocentConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = resolve_role(args.role.as_deref(), config)?;
    let query = args.question.trim();
    if query.is_empty() {
        anyhow::bail!("question must not be empty");
    }

    let answers = if args.hub {
        AnswerSet::Hub
    } else {
        AnswerSet::Catalog
    };
    let response = Responder::from_config(&config.chat)
        .with_answers(answers)
        .answer(query, role);

    let ask = AskResponse {
        role,
        query: query.to_string(),
        response,
    };
    output_with(&ask, flags.format, |ask| render_answer(&ask.response))
}
