use docent_config::DocentConfig;
use docent_core::responses::PromptResponse;
use docent_match::prompt::system_prompt;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RoleArgs;
use crate::commands::shared::role::resolve_role;
use crate::output::output_with;

pub fn handle(args: &RoleArgs, config: &DocentConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = resolve_role(args.role.as_deref(), config)?;
    let response = PromptResponse {
        role,
        prompt: system_prompt(role),
    };
    output_with(&response, flags.format, |response| response.prompt.clone())
}
