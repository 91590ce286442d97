//! Procedure form state and the manual-override merge policy.
//!
//! Each of department, task, and supervisor carries a flag that flips to true
//! the moment the user edits that control. Extraction only ever writes fields
//! whose flag is false. Flags clear only on [`ProcedureForm::reset`], which a
//! successful [`ProcedureForm::submit`] performs.

use chrono::NaiveDate;
use molar_core::reference::ReferenceData;
use serde::Serialize;
use thiserror::Error;

use crate::fields::ExtractedFields;

/// The three auto-fillable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Department,
    Task,
    Supervisor,
}

/// Per-field "the user touched this" flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ManualFlags {
    pub department: bool,
    pub task: bool,
    pub supervisor: bool,
}

impl ManualFlags {
    #[must_use]
    pub const fn is_clear(self) -> bool {
        !self.department && !self.task && !self.supervisor
    }

    const fn get(self, field: FormField) -> bool {
        match field {
            FormField::Department => self.department,
            FormField::Task => self.task,
            FormField::Supervisor => self.supervisor,
        }
    }
}

/// Which extracted values landed in the form and which were held back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub applied: Vec<FormField>,
    pub skipped: Vec<FormField>,
}

/// Validation failures shown inline next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum FormError {
    #[error("department is required")]
    MissingDepartment,
    #[error("task is required")]
    MissingTask,
    #[error("unknown department '{id}'")]
    UnknownDepartment { id: String },
    #[error("unknown task '{id}'")]
    UnknownTask { id: String },
    #[error("task '{task}' does not belong to department '{department}'")]
    TaskOutsideDepartment { task: String, department: String },
}

/// A validated submission ready to be inserted as a procedure row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureDraft {
    pub department_id: String,
    pub task_id: String,
    pub supervisor_name: Option<String>,
    pub notes: Option<String>,
    pub performed_on: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcedureForm {
    department_id: Option<String>,
    task_id: Option<String>,
    supervisor_name: Option<String>,
    notes: String,
    performed_on: Option<NaiveDate>,
    flags: ManualFlags,
}

impl ProcedureForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn department_id(&self) -> Option<&str> {
        self.department_id.as_deref()
    }

    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    #[must_use]
    pub fn supervisor_name(&self) -> Option<&str> {
        self.supervisor_name.as_deref()
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub const fn flags(&self) -> ManualFlags {
        self.flags
    }

    /// User picked a department. Tasks are department-scoped, so the task is
    /// cleared and treated as manually controlled too.
    pub fn set_department_manually(&mut self, department_id: Option<String>) {
        self.department_id = non_blank(department_id);
        self.flags.department = true;
        self.task_id = None;
        self.flags.task = true;
    }

    pub fn set_task_manually(&mut self, task_id: Option<String>) {
        self.task_id = non_blank(task_id);
        self.flags.task = true;
    }

    pub fn set_supervisor_manually(&mut self, name: Option<String>) {
        self.supervisor_name = non_blank(name);
        self.flags.supervisor = true;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub const fn set_performed_on(&mut self, date: NaiveDate) {
        self.performed_on = Some(date);
    }

    /// Write extracted values into every field the user has not touched.
    ///
    /// An extracted task is only written when the form's department is the
    /// one the task was extracted under. When extraction moves the department,
    /// a stale auto-filled task is cleared.
    pub fn apply_extraction(&mut self, fields: &ExtractedFields) -> ApplyReport {
        let mut report = ApplyReport::default();

        if let Some(dept) = fields.department() {
            if self.flags.get(FormField::Department) {
                report.skipped.push(FormField::Department);
            } else {
                if self.department_id.as_deref() != Some(dept) && !self.flags.task {
                    self.task_id = None;
                }
                self.department_id = Some(dept.to_string());
                report.applied.push(FormField::Department);
            }
        }

        if let Some(task) = fields.task() {
            let same_department = fields.department().is_some()
                && self.department_id.as_deref() == fields.department();
            if self.flags.get(FormField::Task) || !same_department {
                report.skipped.push(FormField::Task);
            } else {
                self.task_id = Some(task.to_string());
                report.applied.push(FormField::Task);
            }
        }

        if let Some(name) = fields.supervisor() {
            if self.flags.get(FormField::Supervisor) {
                report.skipped.push(FormField::Supervisor);
            } else {
                self.supervisor_name = Some(name.to_string());
                report.applied.push(FormField::Supervisor);
            }
        }

        tracing::debug!(applied = ?report.applied, skipped = ?report.skipped, "applied extraction");
        report
    }

    /// Check the required fields against the caller's reference data.
    ///
    /// # Errors
    ///
    /// Returns every [`FormError`] found; an empty form reports both missing
    /// fields.
    pub fn validate(&self, reference: &ReferenceData) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();

        match self.department_id.as_deref() {
            None => errors.push(FormError::MissingDepartment),
            Some(id) if reference.department(id).is_none() => {
                errors.push(FormError::UnknownDepartment { id: id.to_string() });
            }
            Some(_) => {}
        }

        match (self.task_id.as_deref(), self.department_id.as_deref()) {
            (None, _) => errors.push(FormError::MissingTask),
            (Some(id), _) if reference.task(id).is_none() => {
                errors.push(FormError::UnknownTask { id: id.to_string() });
            }
            (Some(task), Some(dept))
                if reference.department(dept).is_some()
                    && !reference.task_belongs_to(task, dept) =>
            {
                errors.push(FormError::TaskOutsideDepartment {
                    task: task.to_string(),
                    department: dept.to_string(),
                });
            }
            _ => {}
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validate, produce the draft, and reset the form. Nothing is reset on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the validation errors when the form is incomplete.
    pub fn submit(
        &mut self,
        reference: &ReferenceData,
        today: NaiveDate,
    ) -> Result<ProcedureDraft, Vec<FormError>> {
        self.validate(reference)?;

        let (Some(department_id), Some(task_id)) = (self.department_id.take(), self.task_id.take())
        else {
            return Err(vec![FormError::MissingDepartment, FormError::MissingTask]);
        };

        let notes = self.notes.trim();
        let draft = ProcedureDraft {
            department_id,
            task_id,
            supervisor_name: self.supervisor_name.take(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            performed_on: self.performed_on.unwrap_or(today),
        };
        self.reset();
        Ok(draft)
    }

    /// Clear every field and every manual flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
