//! Hosted serverless function configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_correct_function() -> String {
    "correct-transcript".to_string()
}

fn default_extract_function() -> String {
    "parse-procedure".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FunctionsConfig {
    /// Project base URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public anon key sent as both bearer token and `apikey` header.
    #[serde(default)]
    pub anon_key: String,

    /// Function that corrects misheard terms in a transcript.
    #[serde(default = "default_correct_function")]
    pub correct_function: String,

    /// Function that extracts department, task, and supervisor.
    #[serde(default = "default_extract_function")]
    pub extract_function: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            correct_function: default_correct_function(),
            extract_function: default_extract_function(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FunctionsConfig {
    /// Check if the functions config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Endpoint for a named function: `{url}/functions/v1/{name}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no base URL is set.
    pub fn endpoint(&self, name: &str) -> Result<String, ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "functions".to_string(),
            });
        }
        Ok(format!(
            "{}/functions/v1/{name}",
            self.url.trim_end_matches('/')
        ))
    }
}
