//! Prefixed identifiers.
//!
//! IDs look like `msg-a3f8b2c1`: a short prefix plus 8 lowercase hex chars
//! drawn from the OS random source.

use crate::errors::CoreError;

/// Prefix for chat message IDs.
pub const PREFIX_MESSAGE: &str = "msg";

/// Prefix for question cluster IDs.
pub const PREFIX_CLUSTER: &str = "cluster";

/// Generate a random prefixed ID, e.g. `"msg-a3f8b2c1"`.
///
/// # Errors
///
/// Returns `CoreError::Entropy` if the OS random source cannot be read.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Entropy(e.to_string()))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

/// Cluster IDs are positional, not random: `cluster-{index}`.
#[must_use]
pub fn cluster_id(index: usize) -> String {
    format!("{PREFIX_CLUSTER}-{index}")
}
