use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Ask one question and print the answer.
    Ask(AskArgs),
    /// Interactive chat with typing delay and streamed answers.
    Chat(ChatArgs),
    /// Show the welcome message and starter questions for a role.
    Welcome(WelcomeArgs),
    /// Show or clear the saved chat history.
    History(HistoryArgs),
    /// Cluster designer questions by component and context.
    Clusters(ClustersArgs),
    /// Per-component question pressure.
    Health,
    /// Pattern insights and the weekly question series.
    Trends,
    /// Guardian dashboard headline numbers.
    Dashboard,
    /// Audit a UI screenshot against the design system.
    Audit(AuditArgs),
    /// List the official knowledge sources.
    Sources(SourcesArgs),
    /// Print the role-aware system prompt.
    Prompt(RoleArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// The question.
    pub question: String,

    /// designer, developer or guardian (defaults to chat.default_role)
    #[arg(short, long)]
    pub role: Option<String>,

    /// Answer from the component-keyed hub set instead of the role tables.
    #[arg(long)]
    pub hub: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// designer, developer or guardian (defaults to the saved or configured role)
    #[arg(short, long)]
    pub role: Option<String>,

    /// Answer from the component-keyed hub set instead of the role tables.
    #[arg(long)]
    pub hub: bool,

    /// Start without the saved history.
    #[arg(long)]
    pub fresh: bool,
}

#[derive(Clone, Debug, Args)]
pub struct WelcomeArgs {
    /// designer, developer or guardian (defaults to chat.default_role)
    #[arg(short, long)]
    pub role: Option<String>,

    /// Offer the developer-hub guided questions instead.
    #[arg(long)]
    pub hub: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RoleArgs {
    /// designer, developer or guardian (defaults to chat.default_role)
    #[arg(short, long)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Delete the saved history.
    #[arg(long)]
    pub clear: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ClustersArgs {
    /// Only clusters with this trend (new, recurring, increasing, decreasing).
    #[arg(long)]
    pub trend: Option<String>,

    /// Include member questions in table output.
    #[arg(long)]
    pub questions: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Screenshot to audit (png, jpg, jpeg, gif, webp, svg, bmp).
    pub file: String,

    /// Tailor findings to a role.
    #[arg(short, long)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SourcesArgs {
    /// Order by relevance to a role and show only its sources.
    #[arg(short, long)]
    pub role: Option<String>,

    /// Build a link into this source id instead of listing.
    #[arg(long)]
    pub link: Option<String>,

    /// Path appended to the source base URL (with --link).
    #[arg(long, requires = "link")]
    pub path: Option<String>,
}
