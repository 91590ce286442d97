use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A clinical department (e.g. Oral Surgery, Periodontics).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Department {
    pub id: String,
    pub name: String,
}
