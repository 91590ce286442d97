//! Failures raised by the shared Molar types.
//!
//! Everything here is about the caller's own data: a reference file that
//! cannot be used, or a review step the procedure status machine refuses.
//! Network and roster failures live in their own crates.

use std::path::PathBuf;

use thiserror::Error;

use crate::enums::ProcedureStatus;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot read reference data at {}", path.display())]
    ReferenceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reference data at {} is not valid JSON", path.display())]
    ReferenceMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A quota task scoped to a department the reference data does not list.
    #[error("task '{task_id}' references unknown department '{department_id}'")]
    OrphanTask {
        task_id: String,
        department_id: String,
    },

    #[error("procedure {procedure_id} cannot move from {from} to {to}")]
    ReviewTransition {
        procedure_id: String,
        from: ProcedureStatus,
        to: ProcedureStatus,
    },
}
