//! `parse-procedure` function call.

use molar_core::reference::ReferenceData;
use serde::{Deserialize, Serialize};

use crate::{FunctionError, FunctionsClient, http::decode_json};

#[derive(Serialize)]
struct ExtractRequest<'a> {
    text: &'a str,
    departments: Vec<DepartmentRef<'a>>,
    tasks: Vec<TaskRef<'a>>,
}

#[derive(Serialize)]
struct DepartmentRef<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct TaskRef<'a> {
    id: &'a str,
    task_name: &'a str,
    department_id: &'a str,
}

impl<'a> ExtractRequest<'a> {
    fn new(text: &'a str, reference: &'a ReferenceData) -> Self {
        Self {
            text,
            departments: reference
                .departments
                .iter()
                .map(|d| DepartmentRef {
                    id: &d.id,
                    name: &d.name,
                })
                .collect(),
            tasks: reference
                .tasks
                .iter()
                .map(|t| TaskRef {
                    id: &t.id,
                    task_name: &t.task_name,
                    department_id: &t.department_id,
                })
                .collect(),
        }
    }
}

/// Fields exactly as the extraction function returned them.
///
/// Nothing here is trusted yet: identifiers may not exist in the caller's
/// reference data and names may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFields {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub supervisor_name: Option<String>,
}

impl RemoteFields {
    /// Whether the function returned nothing at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.department.is_none() && self.task.is_none() && self.supervisor_name.is_none()
    }
}

impl FunctionsClient {
    /// Ask the extraction function for department, task, and supervisor,
    /// seeded with the caller's reference lists.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError`] if the request fails, the function returns a
    /// non-success status, or the body is malformed.
    pub async fn extract_fields(
        &self,
        text: &str,
        reference: &ReferenceData,
    ) -> Result<RemoteFields, FunctionError> {
        let body = ExtractRequest::new(text, reference);
        let resp = self.invoke(&self.extract_url, &body).await?;
        decode_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use molar_core::entities::{Department, QuotaTask};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn request_carries_reference_lists() {
        let reference = ReferenceData::new(
            vec![Department {
                id: "d1".into(),
                name: "Endodontics".into(),
            }],
            vec![QuotaTask {
                id: "t1".into(),
                task_name: "RCT Anterior".into(),
                department_id: "d1".into(),
                target_count: 10,
            }],
        );
        let json = serde_json::to_value(ExtractRequest::new("rct today", &reference)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "rct today",
                "departments": [{ "id": "d1", "name": "Endodontics" }],
                "tasks": [{ "id": "t1", "task_name": "RCT Anterior", "department_id": "d1" }]
            })
        );
    }

    #[test]
    fn parses_nullable_fields() {
        let fields: RemoteFields = serde_json::from_str(
            r#"{"department":"d1","task":null,"supervisorName":"Dr. Khan"}"#,
        )
        .unwrap();
        assert_eq!(
            fields,
            RemoteFields {
                department: Some("d1".into()),
                task: None,
                supervisor_name: Some("Dr. Khan".into()),
            }
        );
        assert!(!fields.is_empty());
    }

    #[test]
    fn empty_object_is_empty() {
        let fields: RemoteFields = serde_json::from_str("{}").unwrap();
        assert!(fields.is_empty());
    }
}
