//! Normalize → extract, with silent degradation at every step.
//!
//! Remote failures are logged and never surfaced. Correction failure passes the
//! raw text through; extraction failure (or an answer with nothing usable)
//! hands the text to the local [`fallback`](crate::fallback) matcher.

use molar_core::reference::ReferenceData;
use serde::Serialize;

use crate::assistant::NoteAssistant;
use crate::fallback;
use crate::fields::{Extracted, ExtractedFields};

/// User toggles for the remote steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Send the note to the correction function first.
    pub correct: bool,
    /// Ask the remote extractor before falling back.
    pub remote_extract: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            correct: true,
            remote_extract: true,
        }
    }
}

/// Result of running one note through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub raw_text: String,
    pub text: String,
    pub corrected: bool,
    pub fields: ExtractedFields,
}

pub struct NotePipeline<A> {
    assistant: A,
    options: PipelineOptions,
}

impl<A: NoteAssistant> NotePipeline<A> {
    pub const fn new(assistant: A, options: PipelineOptions) -> Self {
        Self { assistant, options }
    }

    pub const fn options(&self) -> PipelineOptions {
        self.options
    }

    pub const fn assistant(&self) -> &A {
        &self.assistant
    }

    /// Run correction then extraction for one note.
    pub async fn parse(&self, raw: &str, reference: &ReferenceData) -> ParseOutcome {
        let text = self.normalize(raw).await;
        let corrected = text.trim() != raw.trim();
        let fields = self.extract(&text, reference).await;
        tracing::debug!(
            corrected,
            department = ?fields.department(),
            task = ?fields.task(),
            supervisor = ?fields.supervisor(),
            "parsed note"
        );
        ParseOutcome {
            raw_text: raw.to_string(),
            text,
            corrected,
            fields,
        }
    }

    /// Corrected text when the correction function answers with a change;
    /// the input unchanged otherwise, surrounding whitespace included.
    pub async fn normalize(&self, raw: &str) -> String {
        if !self.options.correct || raw.trim().is_empty() {
            return raw.to_string();
        }
        match self.assistant.correct(raw).await {
            Ok(corrected) if corrected.trim() == raw.trim() => raw.to_string(),
            Ok(corrected) if !corrected.trim().is_empty() => corrected.trim().to_string(),
            Ok(_) => {
                tracing::debug!("correction returned empty text; using raw transcript");
                raw.to_string()
            }
            Err(error) => {
                tracing::warn!(%error, "transcript correction failed; using raw transcript");
                raw.to_string()
            }
        }
    }

    /// Remote extraction with gaps filled locally, or the local matcher alone.
    pub async fn extract(&self, text: &str, reference: &ReferenceData) -> ExtractedFields {
        if !self.options.remote_extract || text.trim().is_empty() {
            return fallback::extract(text, reference);
        }

        let remote = match self.assistant.extract(text, reference).await {
            Ok(remote) => ExtractedFields::from_remote(remote, reference),
            Err(error) => {
                tracing::warn!(%error, "remote extraction failed; using keyword matcher");
                return fallback::extract(text, reference);
            }
        };

        if remote.is_empty() {
            tracing::debug!("remote extraction found nothing usable; using keyword matcher");
            return fallback::extract(text, reference);
        }

        fill_gaps(remote, text, reference)
    }
}

/// Complete a partial remote answer from the local matchers. A local task is
/// only taken if it belongs to the final department.
fn fill_gaps(mut fields: ExtractedFields, text: &str, reference: &ReferenceData) -> ExtractedFields {
    if fields.department_id.is_none() {
        fields.department_id = fallback::match_department(text, &reference.departments)
            .map(|dept| Extracted::fallback(&dept.id));
    }

    if fields.task_id.is_none()
        && let Some(dept) = fields.department().map(str::to_owned)
    {
        fields.task_id = fallback::match_task(text, reference.tasks_for(&dept))
            .map(|task| Extracted::fallback(&task.id));
    }

    if fields.supervisor_name.is_none() {
        fields.supervisor_name = fallback::match_supervisor(text).map(Extracted::fallback);
    }

    fields
}
