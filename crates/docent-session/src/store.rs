//! JSON file holding the chat history of the current role.
//!
//! Persistence is best-effort: a missing or unreadable file loads as an empty
//! session and write failures are logged and otherwise ignored.

use std::path::{Path, PathBuf};

use docent_core::entities::ChatMessage;
use docent_core::enums::Role;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// On-disk shape of a saved session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved session. Never fails: problems are logged at `warn`
    /// and an empty snapshot is returned.
    #[must_use]
    pub fn load(&self) -> SessionSnapshot {
        match self.try_load() {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "ignoring unreadable chat history");
                SessionSnapshot::default()
            }
        }
    }

    /// Read the saved session, surfacing errors.
    ///
    /// A missing file is an empty snapshot, not an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the file exists but cannot be read and
    /// `SessionError::Serialization` if it is not a valid snapshot.
    pub fn try_load(&self) -> Result<SessionSnapshot, SessionError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionSnapshot::default());
            }
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the session, logging failures at `warn`.
    pub fn save(&self, snapshot: &SessionSnapshot) {
        if let Err(error) = self.try_save(snapshot) {
            tracing::warn!(path = %self.path.display(), %error, "failed to persist chat history");
        }
    }

    /// Write the session, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` on filesystem failures.
    pub fn try_save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
        let io_error = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, json).map_err(io_error)
    }

    /// Delete the saved session. A missing file is fine; other failures are
    /// logged at `warn`.
    pub fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "failed to clear chat history");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use docent_core::enums::MessageRole;
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            role: Some(Role::Developer),
            messages: vec![ChatMessage {
                id: "msg-00c0ffee".into(),
                role: MessageRole::User,
                content: "What are the button props?".into(),
                timestamp: Utc::now(),
                meta: None,
            }],
        }
    }

    #[test]
    fn saves_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("nested/session.json"));
        store.save(&snapshot());
        assert_eq!(store.load(), snapshot());
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("session.json"));
        assert_eq!(store.try_load().unwrap(), SessionSnapshot::default());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = HistoryStore::new(&path);
        assert!(matches!(
            store.try_load(),
            Err(SessionError::Serialization(_))
        ));
        assert_eq!(store.load(), SessionSnapshot::default());
    }

    #[test]
    fn save_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let store = HistoryStore::new(blocker.join("session.json"));
        store.save(&snapshot());
        assert!(store.try_save(&snapshot()).is_err());
    }

    #[test]
    fn clear_removes_file_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("session.json"));
        store.save(&snapshot());
        store.clear();
        assert!(!store.path().exists());
        store.clear();
    }
}
