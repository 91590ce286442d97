//! Deterministic keyword and regex matcher.
//!
//! Stands in for the remote extractor whenever it fails or returns nothing.
//! The tables are hard-coded English clinical shorthand.

use std::sync::LazyLock;

use molar_core::entities::{Department, QuotaTask};
use molar_core::reference::ReferenceData;
use regex::Regex;

use crate::fields::{Extracted, ExtractedFields};

/// Spoken keyword → substring of a department name (both lowercase).
const DEPARTMENT_KEYWORDS: &[(&str, &str)] = &[
    ("surgery", "surgery"),
    ("perio", "perio"),
    ("endo", "endo"),
    ("prosth", "prosth"),
    ("ortho", "ortho"),
    ("pedo", "pedo"),
    ("oral med", "medicine"),
    ("radiol", "radiol"),
    ("conserv", "conserv"),
    ("restor", "conserv"),
    ("pathol", "pathol"),
];

/// Spoken keyword → substrings of a task name, any of which matches.
const TASK_KEYWORDS: &[(&str, &[&str])] = &[
    ("extraction", &["exo"]),
    ("filling", &["restor"]),
    ("root canal", &["rct"]),
    ("crown", &["crown", "fpd"]),
    ("scaling", &["scal"]),
    ("x-ray", &["radiograph"]),
    ("denture", &["denture"]),
    ("impression", &["impression"]),
];

static SUPERVISOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bDr\.?\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)").expect("supervisor pattern is valid")
});

/// Run all three matchers over `text`.
///
/// The task matcher only runs when a department was found.
#[must_use]
pub fn extract(text: &str, reference: &ReferenceData) -> ExtractedFields {
    let department = match_department(text, &reference.departments);
    let task = department
        .and_then(|dept| match_task(text, reference.tasks_for(&dept.id)))
        .map(|task| Extracted::fallback(&task.id));

    ExtractedFields {
        department_id: department.map(|dept| Extracted::fallback(&dept.id)),
        task_id: task,
        supervisor_name: match_supervisor(text).map(Extracted::fallback),
    }
}

/// First department whose full name appears in `text`, else the first one
/// hit through the keyword table. Both passes walk `departments` in order.
#[must_use]
pub fn match_department<'a>(text: &str, departments: &'a [Department]) -> Option<&'a Department> {
    let lower = text.to_lowercase();

    departments
        .iter()
        .find(|dept| contains_name(&lower, &dept.name))
        .or_else(|| {
            departments.iter().find(|dept| {
                let name = dept.name.to_lowercase();
                DEPARTMENT_KEYWORDS
                    .iter()
                    .any(|(keyword, fragment)| lower.contains(keyword) && name.contains(fragment))
            })
        })
}

/// First task whose full name appears in `text`, else the first one hit
/// through the keyword table. `tasks` must already be scoped to one
/// department.
pub fn match_task<'a, I>(text: &str, tasks: I) -> Option<&'a QuotaTask>
where
    I: IntoIterator<Item = &'a QuotaTask>,
{
    let lower = text.to_lowercase();
    let tasks: Vec<&QuotaTask> = tasks.into_iter().collect();

    tasks
        .iter()
        .copied()
        .find(|task| contains_name(&lower, &task.task_name))
        .or_else(|| {
            tasks.iter().copied().find(|task| {
                let name = task.task_name.to_lowercase();
                TASK_KEYWORDS.iter().any(|(keyword, fragments)| {
                    lower.contains(keyword) && fragments.iter().any(|f| name.contains(f))
                })
            })
        })
}

/// `Dr`/`Dr.` followed by one or two capitalized words, normalized to
/// `Dr. Name`.
#[must_use]
pub fn match_supervisor(text: &str) -> Option<String> {
    SUPERVISOR
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|name| format!("Dr. {}", name.as_str()))
}

fn contains_name(lower_text: &str, name: &str) -> bool {
    let name = name.trim().to_lowercase();
    !name.is_empty() && lower_text.contains(&name)
}
