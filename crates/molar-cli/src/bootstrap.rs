use std::path::Path;

use anyhow::Context;
use molar_config::MolarConfig;

/// Load `.env` from the project root (or the usual dotenv search), then the
/// layered config.
pub fn load_config(project_root: &Path) -> anyhow::Result<MolarConfig> {
    load_project_dotenv(project_root)?;
    MolarConfig::load_from(project_root).context("failed to load molar configuration")
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
