use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProcedureStatus;
use crate::errors::CoreError;

/// A clinical procedure logged by a student against a quota task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Procedure {
    pub id: String,
    pub student_id: String,
    pub department_id: String,
    pub task_id: String,
    pub supervisor_name: Option<String>,
    pub notes: Option<String>,
    pub performed_on: NaiveDate,
    pub status: ProcedureStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Procedure {
    /// Move the procedure to `next`, stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ReviewTransition`] if the status machine does not
    /// allow the move.
    pub fn transition(&mut self, next: ProcedureStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::ReviewTransition {
                procedure_id: self.id.clone(),
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}
