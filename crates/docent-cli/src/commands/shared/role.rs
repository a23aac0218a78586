use docent_config::DocentConfig;
use docent_core::enums::Role;

use super::parse::parse_enum;

/// The `--role` value, else `chat.default_role`.
pub fn resolve_role(raw: Option<&str>, config: &DocentConfig) -> anyhow::Result<Role> {
    optional_role(raw)?
        .or(config.chat.default_role)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no role given; pass --role designer|developer|guardian or set chat.default_role"
            )
        })
}

/// Parse an optional `--role` value without falling back to config.
pub fn optional_role(raw: Option<&str>) -> anyhow::Result<Option<Role>> {
    raw.map(|value| parse_enum::<Role>(value, "role")).transpose()
}

#[cfg(test)]
mod tests {
    use docent_config::{ChatConfig, DocentConfig};
    use docent_core::enums::Role;

    use super::{optional_role, resolve_role};

    #[test]
    fn flag_wins_over_default_role() {
        let config = DocentConfig {
            chat: ChatConfig {
                default_role: Some(Role::Designer),
                ..ChatConfig::default()
            },
            ..DocentConfig::default()
        };
        assert_eq!(resolve_role(Some("developer"), &config).unwrap(), Role::Developer);
        assert_eq!(resolve_role(None, &config).unwrap(), Role::Designer);
    }

    #[test]
    fn missing_role_is_an_error() {
        let err = resolve_role(None, &DocentConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no role given"));
    }

    #[test]
    fn optional_role_passes_none_through() {
        assert_eq!(optional_role(None).unwrap(), None);
        assert!(optional_role(Some("owner")).is_err());
    }
}
