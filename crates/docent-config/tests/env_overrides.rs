use docent_config::DocentConfig;
use docent_core::enums::Role;
use figment::Jail;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCENT_CHAT__TYPING_DELAY_MS", "1800");
        jail.set_env("DOCENT_CHAT__DEFAULT_ROLE", "developer");
        jail.set_env("DOCENT_SESSION__HISTORY_PATH", "/tmp/docent-history.json");

        let config = DocentConfig::load().expect("config loads");
        assert_eq!(config.chat.typing_delay_ms, 1800);
        assert_eq!(config.chat.default_role, Some(Role::Developer));
        assert_eq!(config.session.history_path, "/tmp/docent-history.json");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".docent")?;
        jail.create_file(
            ".docent/config.toml",
            r#"
[chat]
typing_delay_ms = 1000
"#,
        )?;
        jail.set_env("DOCENT_CHAT__TYPING_DELAY_MS", "1600");

        let config = DocentConfig::load().expect("config loads");
        assert_eq!(config.chat.typing_delay_ms, 1600);
        Ok(())
    });
}

#[test]
fn single_underscore_does_not_reach_section() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCENT_CHAT_TYPING_DELAY_MS", "1900");

        let config = DocentConfig::load().expect("config loads");
        assert_eq!(config.chat.typing_delay_ms, 1200);
        Ok(())
    });
}
