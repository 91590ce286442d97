//! # molar-notes
//!
//! Turns a spoken or typed clinical note into procedure-form fields.
//!
//! The flow is sequential and never retries:
//! 1. [`capture`]: single-shot speech capture producing a raw utterance
//! 2. [`pipeline`]: optional remote correction, then remote extraction with
//!    the deterministic [`fallback`] matcher standing in on any failure
//! 3. [`form`]: extracted values are merged only into fields the user has not
//!    edited by hand

pub mod assistant;
pub mod capture;
pub mod fallback;
pub mod fields;
pub mod form;
pub mod pipeline;

pub use assistant::{NoteAssistant, Offline};
pub use capture::{CaptureError, CaptureSession, SpeechSource};
pub use fields::{Extracted, ExtractedFields};
pub use form::{ApplyReport, FormError, FormField, ManualFlags, ProcedureDraft, ProcedureForm};
pub use pipeline::{NotePipeline, ParseOutcome, PipelineOptions};
