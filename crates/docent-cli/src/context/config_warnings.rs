use docent_config::{AuditConfig, ChatConfig, DocentConfig, GeneralConfig, SessionConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DocentConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DocentConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        ("chat", config.chat == ChatConfig::default(), "TYPING_DELAY_MS"),
        ("session", config.session == SessionConfig::default(), "HISTORY_PATH"),
        ("audit", config.audit == AuditConfig::default(), "ANALYSIS_DELAY_MS"),
        ("general", config.general == GeneralConfig::default(), "DEFAULT_LIMIT"),
    ];

    sections
        .into_iter()
        .filter_map(|(section, is_default, example_key)| {
            let prefix = format!("DOCENT_{}", section.to_ascii_uppercase());
            let mistyped = has_env_prefix(&env_keys, &prefix)
                && !has_env_prefix(&env_keys, &format!("{prefix}__"));
            (is_default && mistyped).then(|| {
                format!(
                    "{section} config appears default while {prefix}* env vars exist. Use double underscores (example: {prefix}__{example_key})."
                )
            })
        })
        .collect()
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
