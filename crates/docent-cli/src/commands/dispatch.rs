use docent_config::DocentConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

pub async fn dispatch(
    command: Commands,
    config: &DocentConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Ask(args) => commands::ask::handle(&args, config, flags),
        Commands::Chat(args) => commands::chat::handle(&args, config, flags).await,
        Commands::Welcome(args) => commands::welcome::handle(&args, config, flags),
        Commands::History(args) => commands::history::handle(&args, config, flags),
        Commands::Clusters(args) => commands::clusters::handle(&args, config, flags),
        Commands::Health => commands::health::handle(flags),
        Commands::Trends => commands::trends::handle(flags),
        Commands::Dashboard => commands::dashboard::handle(flags),
        Commands::Audit(args) => commands::audit::handle(&args, config, flags).await,
        Commands::Sources(args) => commands::sources::handle(&args, flags),
        Commands::Prompt(args) => commands::prompt::handle(&args, config, flags),
    }
}
