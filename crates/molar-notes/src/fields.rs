//! Extracted field values and the rules for trusting remote ones.

use molar_core::enums::FieldSource;
use molar_core::reference::ReferenceData;
use molar_functions::RemoteFields;
use serde::Serialize;

/// One extracted value and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extracted {
    pub value: String,
    pub source: FieldSource,
}

impl Extracted {
    #[must_use]
    pub fn remote(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: FieldSource::Remote,
        }
    }

    #[must_use]
    pub fn fallback(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: FieldSource::Fallback,
        }
    }
}

/// Department, task, and supervisor pulled out of a note.
///
/// Invariant: when both are present, `task_id` belongs to `department_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub department_id: Option<Extracted>,
    pub task_id: Option<Extracted>,
    pub supervisor_name: Option<Extracted>,
}

impl ExtractedFields {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.department_id.is_none() && self.task_id.is_none() && self.supervisor_name.is_none()
    }

    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department_id.as_ref().map(|e| e.value.as_str())
    }

    #[must_use]
    pub fn task(&self) -> Option<&str> {
        self.task_id.as_ref().map(|e| e.value.as_str())
    }

    #[must_use]
    pub fn supervisor(&self) -> Option<&str> {
        self.supervisor_name.as_ref().map(|e| e.value.as_str())
    }

    /// Keep only the parts of a remote answer that exist in `reference`.
    ///
    /// Departments and tasks are accepted by id, or by case-insensitive name.
    /// A task without a department pulls its own department in; a task outside
    /// the resolved department is dropped.
    #[must_use]
    pub fn from_remote(remote: RemoteFields, reference: &ReferenceData) -> Self {
        let mut department = remote
            .department
            .as_deref()
            .and_then(|raw| resolve_department(raw, reference));

        let task = remote
            .task
            .as_deref()
            .and_then(|raw| resolve_task(raw, department.as_deref(), reference));

        if department.is_none() {
            department = task
                .as_deref()
                .and_then(|id| reference.task(id))
                .map(|t| t.department_id.clone());
        }

        let task = task.filter(|id| {
            department
                .as_deref()
                .is_some_and(|dept| reference.task_belongs_to(id, dept))
        });

        let supervisor = remote
            .supervisor_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        if remote.department.is_some() && department.is_none() {
            tracing::debug!(value = ?remote.department, "remote department not in reference data");
        }

        Self {
            department_id: department.map(Extracted::remote),
            task_id: task.map(Extracted::remote),
            supervisor_name: supervisor.map(Extracted::remote),
        }
    }
}

fn resolve_department(raw: &str, reference: &ReferenceData) -> Option<String> {
    let raw = raw.trim();
    reference
        .department(raw)
        .or_else(|| {
            reference
                .departments
                .iter()
                .find(|d| d.name.eq_ignore_ascii_case(raw))
        })
        .map(|d| d.id.clone())
}

fn resolve_task(raw: &str, department: Option<&str>, reference: &ReferenceData) -> Option<String> {
    let raw = raw.trim();
    if let Some(task) = reference.task(raw) {
        return Some(task.id.clone());
    }
    reference
        .tasks
        .iter()
        .filter(|t| department.is_none_or(|dept| t.department_id == dept))
        .find(|t| t.task_name.eq_ignore_ascii_case(raw))
        .map(|t| t.id.clone())
}

#[cfg(test)]
mod tests {
    use molar_core::entities::{Department, QuotaTask};
    use pretty_assertions::assert_eq;

    use super::*;

    fn reference() -> ReferenceData {
        ReferenceData::new(
            vec![
                Department {
                    id: "d-surg".into(),
                    name: "Oral Surgery".into(),
                },
                Department {
                    id: "d-endo".into(),
                    name: "Endodontics".into(),
                },
            ],
            vec![
                QuotaTask {
                    id: "t-exo".into(),
                    task_name: "Simple Exo".into(),
                    department_id: "d-surg".into(),
                    target_count: 20,
                },
                QuotaTask {
                    id: "t-rct".into(),
                    task_name: "RCT Molar".into(),
                    department_id: "d-endo".into(),
                    target_count: 5,
                },
            ],
        )
    }

    fn remote(dept: Option<&str>, task: Option<&str>, sup: Option<&str>) -> RemoteFields {
        RemoteFields {
            department: dept.map(Into::into),
            task: task.map(Into::into),
            supervisor_name: sup.map(Into::into),
        }
    }

    #[test]
    fn keeps_known_identifiers() {
        let fields = ExtractedFields::from_remote(
            remote(Some("d-endo"), Some("t-rct"), Some("Dr. Khan")),
            &reference(),
        );
        assert_eq!(fields.department(), Some("d-endo"));
        assert_eq!(fields.task(), Some("t-rct"));
        assert_eq!(fields.supervisor(), Some("Dr. Khan"));
        assert_eq!(
            fields.task_id.as_ref().map(|e| e.source),
            Some(FieldSource::Remote)
        );
    }

    #[test]
    fn drops_unknown_department() {
        let fields =
            ExtractedFields::from_remote(remote(Some("d-ortho"), None, None), &reference());
        assert!(fields.is_empty());
    }

    #[test]
    fn drops_task_outside_department() {
        let fields =
            ExtractedFields::from_remote(remote(Some("d-surg"), Some("t-rct"), None), &reference());
        assert_eq!(fields.department(), Some("d-surg"));
        assert_eq!(fields.task(), None);
    }

    #[test]
    fn task_infers_department() {
        let fields = ExtractedFields::from_remote(remote(None, Some("t-exo"), None), &reference());
        assert_eq!(fields.department(), Some("d-surg"));
        assert_eq!(fields.task(), Some("t-exo"));
    }

    #[test]
    fn names_resolve_to_ids() {
        let fields = ExtractedFields::from_remote(
            remote(Some("endodontics"), Some("rct molar"), None),
            &reference(),
        );
        assert_eq!(fields.department(), Some("d-endo"));
        assert_eq!(fields.task(), Some("t-rct"));
    }

    #[test]
    fn blank_supervisor_is_dropped() {
        let fields = ExtractedFields::from_remote(remote(None, None, Some("   ")), &reference());
        assert!(fields.supervisor_name.is_none());
    }
}
