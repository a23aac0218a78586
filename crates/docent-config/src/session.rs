//! Chat history persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_history_path() -> String {
    ".docent/session.json".to_string()
}

const fn default_persist() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Where the current chat history is written.
    #[serde(default = "default_history_path")]
    pub history_path: String,

    /// Whether chat history is persisted at all.
    #[serde(default = "default_persist")]
    pub persist: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            persist: default_persist(),
        }
    }
}

impl SessionConfig {
    /// History file path, or `None` when persistence is disabled.
    #[must_use]
    pub fn history_file(&self) -> Option<PathBuf> {
        (self.persist && !self.history_path.is_empty()).then(|| PathBuf::from(&self.history_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_persists_to_project_dir() {
        let config = SessionConfig::default();
        assert_eq!(
            config.history_file(),
            Some(PathBuf::from(".docent/session.json"))
        );
    }

    #[test]
    fn disabled_persistence_has_no_file() {
        let config = SessionConfig {
            persist: false,
            ..Default::default()
        };
        assert!(config.history_file().is_none());
    }

    #[test]
    fn empty_path_has_no_file() {
        let config = SessionConfig {
            history_path: String::new(),
            ..Default::default()
        };
        assert!(config.history_file().is_none());
    }
}
