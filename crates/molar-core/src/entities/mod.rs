//! Entity structs mirroring the hosted backend's rows.
//!
//! Ownership and validation live in the backend schema; these structs only
//! carry the shape. All derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod batch;
mod department;
mod procedure;
mod quota_task;

pub use batch::Batch;
pub use department::Department;
pub use procedure::Procedure;
pub use quota_task::QuotaTask;
