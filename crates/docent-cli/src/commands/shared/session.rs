use docent_config::DocentConfig;
use docent_session::{ChatSession, HistoryStore};

/// The configured history store, if persistence is on.
#[must_use]
pub fn history_store(config: &DocentConfig) -> Option<HistoryStore> {
    config.session.history_file().map(HistoryStore::new)
}

/// A chat session restored from the configured store, or an in-memory one.
#[must_use]
pub fn open_session(config: &DocentConfig) -> ChatSession {
    history_store(config).map_or_else(ChatSession::new, ChatSession::with_store)
}
