use std::fmt::Write as _;

use docent_config::DocentConfig;
use docent_core::responses::WelcomeResponse;
use docent_match::welcome::{GUIDED_QUESTIONS, welcome_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WelcomeArgs;
use crate::commands::shared::role::resolve_role;
use crate::output::output_with;

pub fn handle(args: &WelcomeArgs, config: &DocentConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = resolve_role(args.role.as_deref(), config)?;
    let mut welcome = welcome_for(role);
    if args.hub {
        welcome.suggested_questions = GUIDED_QUESTIONS.iter().map(ToString::to_string).collect();
    }

    output_with(&WelcomeResponse { role, welcome }, flags.format, render)
}

fn render(response: &WelcomeResponse) -> String {
    let mut out = format!(
        "{} · {}\n{}\n\n{}\n",
        response.role.label(),
        response.role.tag_label(),
        response.role.description(),
        response.welcome.text
    );
    for (index, question) in response.welcome.suggested_questions.iter().enumerate() {
        let _ = write!(out, "\n  {}. {question}", index + 1);
    }
    out
}
