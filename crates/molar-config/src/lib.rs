//! # molar-config
//!
//! Layered configuration loading for Molar using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MOLAR_*` prefix, `__` as separator)
//! 2. Project-level `.molar/config.toml`
//! 3. User-level `~/.config/molar/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MOLAR_FUNCTIONS__URL` -> `functions.url`,
//! `MOLAR_NOTES__AI_CORRECTION` -> `notes.ai_correction`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use molar_config::MolarConfig;
//!
//! let config = MolarConfig::load_with_dotenv().expect("config");
//! if config.functions.is_configured() {
//!     println!("functions at {}", config.functions.url);
//! }
//! ```

mod error;
mod functions;
mod general;
mod notes;
mod roster;

pub use error::ConfigError;
pub use functions::FunctionsConfig;
pub use general::GeneralConfig;
pub use notes::NotesConfig;
pub use roster::RosterConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding project-local Molar files.
pub const PROJECT_DIR: &str = ".molar";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MolarConfig {
    #[serde(default)]
    pub functions: FunctionsConfig,
    #[serde(default)]
    pub notes: NotesConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MolarConfig {
    /// Load configuration from all sources, resolving the project config
    /// relative to the current directory.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with `project_root/.molar/config.toml` as the
    /// project layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on parse or type errors.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on parse or type errors.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MOLAR_").split("__"))
    }

    /// Reject values that parse but cannot work.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.functions.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "functions.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.notes.capture_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notes.capture_timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.roster.default_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "roster.default_name".to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        if self.roster.default_batch.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "roster.default_batch".to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("molar").join("config.toml"))
    }
}
