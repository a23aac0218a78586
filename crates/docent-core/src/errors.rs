//! Cross-cutting error types for Docent.
//!
//! Domain-specific errors (e.g., `SessionError`, `AuditError`) are defined in
//! their respective crates. They converge into `anyhow` in `docent-cli`.

use thiserror::Error;

/// Errors that can be raised by any Docent crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// The OS random source could not be read.
    #[error("Random source unavailable: {0}")]
    Entropy(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
