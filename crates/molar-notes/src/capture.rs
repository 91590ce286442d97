//! Single-shot speech capture.
//!
//! A session runs one background listen and yields at most one utterance.
//! Stopping a session early aborts the listen and discards anything still in
//! flight. A source that is unsupported or denied permission disables capture
//! quietly; typed entry keeps working.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// No speech recognizer is available on this platform.
    #[error("speech capture is not supported here")]
    Unsupported,

    /// The user or OS refused microphone access.
    #[error("speech capture permission denied")]
    PermissionDenied,

    /// The recognizer started but failed.
    #[error("speech capture failed: {0}")]
    Failed(String),
}

/// Something that can listen once and return what it heard.
pub trait SpeechSource: Send + 'static {
    fn listen(self) -> impl Future<Output = Result<String, CaptureError>> + Send + 'static;
}

/// One recording. Dropping it stops the listen.
#[derive(Debug)]
pub struct CaptureSession {
    handle: Option<JoinHandle<Result<String, CaptureError>>>,
}

impl CaptureSession {
    /// Start listening in the background. Must be called inside a tokio
    /// runtime.
    pub fn start<S: SpeechSource>(source: S) -> Self {
        tracing::debug!("capture session started");
        Self {
            handle: Some(tokio::spawn(source.listen())),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the single completion. Errors and blank results are `None`.
    pub async fn finish(mut self) -> Option<String> {
        let handle = self.handle.take()?;
        settle(handle.await)
    }

    /// Like [`Self::finish`], but stop the session if nothing arrives within
    /// `limit`.
    pub async fn finish_within(mut self, limit: Duration) -> Option<String> {
        let mut handle = self.handle.take()?;
        match tokio::time::timeout(limit, &mut handle).await {
            Ok(joined) => settle(joined),
            Err(_) => {
                handle.abort();
                tracing::debug!(?limit, "capture timed out; session stopped");
                None
            }
        }
    }

    /// Stop early, discarding any in-flight result.
    pub fn stop(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("capture session stopped");
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

fn settle(joined: Result<Result<String, CaptureError>, tokio::task::JoinError>) -> Option<String> {
    match joined {
        Ok(Ok(text)) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Ok(Err(error @ (CaptureError::Unsupported | CaptureError::PermissionDenied))) => {
            tracing::debug!(%error, "speech capture unavailable");
            None
        }
        Ok(Err(error)) => {
            tracing::warn!(%error, "speech capture failed");
            None
        }
        Err(error) if error.is_cancelled() => None,
        Err(error) => {
            tracing::warn!(%error, "speech capture task panicked");
            None
        }
    }
}
