use std::path::Path;

use anyhow::Context;
use docent_config::DocentConfig;

/// Load `.env` (from the working directory, else `.docent/.env`) and then
/// the layered configuration.
pub fn load_config() -> anyhow::Result<DocentConfig> {
    load_project_dotenv()?;
    DocentConfig::load().context("failed to load docent configuration")
}

fn load_project_dotenv() -> anyhow::Result<()> {
    for candidate in [Path::new(".env"), Path::new(".docent/.env")] {
        if candidate.exists() {
            dotenvy::from_path(candidate).with_context(|| {
                format!("failed to load dotenv file at {}", candidate.display())
            })?;
            tracing::debug!(path = %candidate.display(), "loaded dotenv file");
            return Ok(());
        }
    }
    Ok(())
}
