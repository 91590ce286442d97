use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named procedure type with a target count, scoped to one department.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuotaTask {
    pub id: String,
    pub task_name: String,
    pub department_id: String,
    #[serde(default)]
    pub target_count: u32,
}
