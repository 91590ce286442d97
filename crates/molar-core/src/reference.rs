//! The caller's valid departments and quota tasks.
//!
//! Both the remote extractor and the local fallback matcher are seeded with
//! this data so they only ever return identifiers that exist in it.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Department, QuotaTask};
use crate::errors::CoreError;

/// Departments and tasks in the order the backend returned them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReferenceData {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub tasks: Vec<QuotaTask>,
}

impl ReferenceData {
    #[must_use]
    pub const fn new(departments: Vec<Department>, tasks: Vec<QuotaTask>) -> Self {
        Self { departments, tasks }
    }

    /// Load reference data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ReferenceUnreadable`] or
    /// [`CoreError::ReferenceMalformed`] if the file cannot be used, and
    /// [`CoreError::OrphanTask`] if a task points at an unknown department.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::ReferenceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let data: Self =
            serde_json::from_str(&raw).map_err(|source| CoreError::ReferenceMalformed {
                path: path.to_path_buf(),
                source,
            })?;
        data.check()?;
        tracing::debug!(
            departments = data.departments.len(),
            tasks = data.tasks.len(),
            "loaded reference data"
        );
        Ok(data)
    }

    /// Verify that every task is scoped to a known department.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OrphanTask`] naming the first orphaned task.
    pub fn check(&self) -> Result<(), CoreError> {
        if let Some(orphan) = self
            .tasks
            .iter()
            .find(|task| self.department(&task.department_id).is_none())
        {
            return Err(CoreError::OrphanTask {
                task_id: orphan.id.clone(),
                department_id: orphan.department_id.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|dept| dept.id == id)
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<&QuotaTask> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks belonging to `department_id`, in list order.
    pub fn tasks_for<'a>(&'a self, department_id: &'a str) -> impl Iterator<Item = &'a QuotaTask> {
        self.tasks
            .iter()
            .filter(move |task| task.department_id == department_id)
    }

    /// Whether `task_id` exists and is scoped to `department_id`.
    #[must_use]
    pub fn task_belongs_to(&self, task_id: &str, department_id: &str) -> bool {
        self.task(task_id)
            .is_some_and(|task| task.department_id == department_id)
    }
}
