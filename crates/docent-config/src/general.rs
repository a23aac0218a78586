//! Settings shared by every command.

use serde::{Deserialize, Serialize};

const fn default_row_limit() -> u32 {
    20
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows shown by `dct clusters` and messages shown by `dct history`
    /// when `--limit` is not given.
    #[serde(default = "default_row_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_row_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_twenty_rows() {
        assert_eq!(GeneralConfig::default().default_limit, 20);
    }

    #[test]
    fn missing_limit_uses_default() {
        let config: GeneralConfig = figment::Figment::new().extract().unwrap();
        assert_eq!(config, GeneralConfig::default());
    }
}
