//! The seam between the pipeline and the hosted language-model functions.

use std::future::Future;

use molar_core::reference::ReferenceData;
use molar_functions::{FunctionError, FunctionsClient, RemoteFields};

/// Remote help for turning a note into fields.
///
/// Implementations make exactly one attempt per call.
pub trait NoteAssistant {
    /// Return a corrected transcript (possibly empty).
    fn correct(&self, text: &str) -> impl Future<Output = Result<String, FunctionError>> + Send;

    /// Return whatever fields the remote extractor found.
    fn extract(
        &self,
        text: &str,
        reference: &ReferenceData,
    ) -> impl Future<Output = Result<RemoteFields, FunctionError>> + Send;
}

impl NoteAssistant for FunctionsClient {
    async fn correct(&self, text: &str) -> Result<String, FunctionError> {
        self.correct_transcript(text).await
    }

    async fn extract(
        &self,
        text: &str,
        reference: &ReferenceData,
    ) -> Result<RemoteFields, FunctionError> {
        self.extract_fields(text, reference).await
    }
}

/// Assistant used when no functions endpoint is configured. Every call fails,
/// so the pipeline always takes its local paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl NoteAssistant for Offline {
    async fn correct(&self, _text: &str) -> Result<String, FunctionError> {
        Err(FunctionError::NotConfigured("offline".to_string()))
    }

    async fn extract(
        &self,
        _text: &str,
        _reference: &ReferenceData,
    ) -> Result<RemoteFields, FunctionError> {
        Err(FunctionError::NotConfigured("offline".to_string()))
    }
}
