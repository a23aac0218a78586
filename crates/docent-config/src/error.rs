//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the config shape.
    #[error("failed to read configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is out of range.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
