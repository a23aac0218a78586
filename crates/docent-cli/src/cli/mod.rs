use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dct` binary.
#[derive(Debug, Parser)]
#[command(name = "dct", version, about = "Docent - design system answers by role")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to show (0 for all)
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_table_output() {
        let cli = Cli::try_parse_from(["dct", "health"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "dct", "--format", "json", "--limit", "5", "--verbose", "clusters",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(5));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Clusters(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dct", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn ask_takes_question_role_and_hub() {
        let cli = Cli::try_parse_from([
            "dct",
            "ask",
            "What are the button props?",
            "--role",
            "developer",
            "--hub",
        ])
        .expect("cli should parse");

        let Commands::Ask(args) = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(args.question, "What are the button props?");
        assert_eq!(args.role.as_deref(), Some("developer"));
        assert!(args.hub);
    }

    #[test]
    fn sources_path_requires_link() {
        assert!(Cli::try_parse_from(["dct", "sources", "--path", "/x"]).is_err());
        assert!(
            Cli::try_parse_from(["dct", "sources", "--link", "carbon-docs", "--path", "/x"])
                .is_ok()
        );
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["dct", "--format", "xml", "health"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["dct", "--color", "never", "--limit", "3", "trends"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.color, ColorMode::Never);
        assert_eq!(flags.limit, Some(3));
    }
}
