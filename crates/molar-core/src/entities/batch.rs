use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A cohort of students sharing an intake label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Batch {
    pub id: String,
    pub name: String,
    pub academic_year: Option<String>,
}
