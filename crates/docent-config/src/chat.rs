//! Chat delivery configuration: "assistant thinking" delay and streamed reveal.

use std::time::Duration;

use docent_core::enums::Role;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Shortest accepted thinking delay.
pub const MIN_TYPING_DELAY_MS: u64 = 800;

/// Longest accepted thinking delay.
pub const MAX_TYPING_DELAY_MS: u64 = 2000;

const fn default_typing_delay_ms() -> u64 {
    1200
}

const fn default_stream_duration_ms() -> u64 {
    1500
}

const fn default_min_tick_ms() -> u64 {
    20
}

const fn default_stream() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Delay before an answer starts appearing, in milliseconds.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Total time budget for revealing an answer, in milliseconds.
    #[serde(default = "default_stream_duration_ms")]
    pub stream_duration_ms: u64,

    /// Floor for the per-character reveal tick, in milliseconds.
    #[serde(default = "default_min_tick_ms")]
    pub min_tick_ms: u64,

    /// Reveal answers progressively instead of all at once.
    #[serde(default = "default_stream")]
    pub stream: bool,

    /// Role used when none is given on the command line.
    #[serde(default)]
    pub default_role: Option<Role>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            stream_duration_ms: default_stream_duration_ms(),
            min_tick_ms: default_min_tick_ms(),
            stream: default_stream(),
            default_role: None,
        }
    }
}

impl ChatConfig {
    #[must_use]
    pub const fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    #[must_use]
    pub const fn stream_duration(&self) -> Duration {
        Duration::from_millis(self.stream_duration_ms)
    }

    #[must_use]
    pub const fn min_tick(&self) -> Duration {
        Duration::from_millis(self.min_tick_ms)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the typing delay falls outside
    /// 800..=2000 ms or the reveal tick is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TYPING_DELAY_MS..=MAX_TYPING_DELAY_MS).contains(&self.typing_delay_ms) {
            return Err(ConfigError::InvalidValue {
                field: "chat.typing_delay_ms".into(),
                reason: format!(
                    "{} is outside {MIN_TYPING_DELAY_MS}..={MAX_TYPING_DELAY_MS}",
                    self.typing_delay_ms
                ),
            });
        }
        if self.min_tick_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chat.min_tick_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ChatConfig::default();
        assert_eq!(config.typing_delay(), Duration::from_millis(1200));
        assert_eq!(config.stream_duration(), Duration::from_millis(1500));
        assert_eq!(config.min_tick(), Duration::from_millis(20));
        assert!(config.stream);
        assert!(config.default_role.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn delay_bounds_are_inclusive() {
        for delay in [MIN_TYPING_DELAY_MS, MAX_TYPING_DELAY_MS] {
            let config = ChatConfig {
                typing_delay_ms: delay,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn rejects_delay_out_of_range() {
        for delay in [0, 799, 2001] {
            let config = ChatConfig {
                typing_delay_ms: delay,
                ..Default::default()
            };
            let err = config.validate().expect_err("should be rejected");
            assert!(err.to_string().contains("chat.typing_delay_ms"));
        }
    }

    #[test]
    fn rejects_zero_tick() {
        let config = ChatConfig {
            min_tick_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
