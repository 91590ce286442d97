//! Clinical-note parsing preferences.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

fn default_reference_path() -> PathBuf {
    PathBuf::from(".molar/reference.json")
}

const fn default_capture_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotesConfig {
    /// Run the transcript through the correction function before extraction.
    #[serde(default = "default_true")]
    pub ai_correction: bool,

    /// Use the remote extractor; when off only the local matcher runs.
    #[serde(default = "default_true")]
    pub ai_extraction: bool,

    /// JSON file holding the caller's departments and tasks.
    #[serde(default = "default_reference_path")]
    pub reference_path: PathBuf,

    /// Upper bound on a single capture session.
    #[serde(default = "default_capture_timeout_secs")]
    pub capture_timeout_secs: u64,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            ai_correction: true,
            ai_extraction: true,
            reference_path: default_reference_path(),
            capture_timeout_secs: default_capture_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_steps_default_on() {
        let config = NotesConfig::default();
        assert!(config.ai_correction);
        assert!(config.ai_extraction);
        assert_eq!(config.reference_path, PathBuf::from(".molar/reference.json"));
    }
}
