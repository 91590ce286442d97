//! Bulk roster import defaults.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "Student".to_string()
}

fn default_batch() -> String {
    "Batch A".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    /// Name given to rows that only carry an email.
    #[serde(default = "default_name")]
    pub default_name: String,

    /// Batch given to rows without a batch column.
    #[serde(default = "default_batch")]
    pub default_batch: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_name: default_name(),
            default_batch: default_batch(),
        }
    }
}
