use std::path::PathBuf;

use docent_core::errors::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No role selected")]
    NoRole,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message not found: {id}")]
    NotFound { id: String },

    #[error("Invalid state transition: {entity} from {from} to {to}")]
    InvalidTransition {
        entity: String,
        from: String,
        to: String,
    },

    #[error("History file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
