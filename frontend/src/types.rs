//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Task Types** - per-file upload state shown in a progress row
//! - **API Types** - endpoint response structure
//! - **Error Types** - upload failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DEFAULT_MIME_TYPE, PROGRESS_DONE};

// =============================================================================
// Task Types
// =============================================================================

/// Terminal or pending status of an upload.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadStatus {
    /// Still reading, sending or waiting for the response.
    Pending,
    /// Uploaded; the endpoint returned a link to the stored file.
    Done { url: String },
    /// Failed; the message is shown under the row.
    Error { message: String },
}

/// State of one file's upload, owned by its progress row.
///
/// Progress never goes down, and once the status leaves
/// [`UploadStatus::Pending`] the task no longer changes.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadTask {
    /// File name as reported by the browser
    pub name: String,
    /// MIME type, defaulted when the browser reports none
    pub mime_type: String,
    /// Percentage in 0..=100
    pub progress: u8,
    /// Current status
    pub status: UploadStatus,
}

impl UploadTask {
    /// Create a pending task at 0%.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        Self {
            name: name.into(),
            mime_type: if mime_type.is_empty() {
                DEFAULT_MIME_TYPE.to_string()
            } else {
                mime_type
            },
            progress: 0,
            status: UploadStatus::Pending,
        }
    }

    /// Move progress forward to `percent`.
    ///
    /// Lower values and updates after completion are ignored.
    pub fn advance(&mut self, percent: u8) {
        if self.is_terminal() {
            return;
        }
        self.progress = self.progress.max(percent.min(PROGRESS_DONE));
    }

    /// Settle the task with the outcome of its upload.
    ///
    /// Only the first call has an effect.
    pub fn finish(&mut self, outcome: UploadResult<String>) {
        if self.is_terminal() {
            return;
        }
        self.status = match outcome {
            Ok(url) => {
                self.progress = PROGRESS_DONE;
                UploadStatus::Done { url }
            }
            Err(e) => UploadStatus::Error {
                message: e.to_string(),
            },
        };
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.status, UploadStatus::Pending)
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image")
    }

    /// Short type marker shown in the row thumbnail.
    pub fn glyph(&self) -> &'static str {
        if self.is_image() {
            "IMG"
        } else {
            "FILE"
        }
    }

    /// Text of the percentage label.
    pub fn label(&self) -> String {
        match self.status {
            UploadStatus::Pending => format!("{}%", self.progress),
            UploadStatus::Done { .. } => "Done ✓".to_string(),
            UploadStatus::Error { .. } => "Error".to_string(),
        }
    }

    /// Link to the uploaded file, once done.
    pub fn url(&self) -> Option<&str> {
        match &self.status {
            UploadStatus::Done { url } => Some(url),
            _ => None,
        }
    }

    /// Failure message, once failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            UploadStatus::Error { message } => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Body returned by the upload endpoint.
///
/// Every field is optional on the wire; a missing `ok` reads as failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Why a single file's upload failed.
///
/// The `Display` text is what the progress row shows.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UploadError {
    /// Rejected before reading: the base64 text would exceed the limit.
    #[error("file too large: {encoded_size} bytes once encoded exceeds the {} MiB limit", .limit / (1024 * 1024))]
    TooLarge { encoded_size: usize, limit: usize },

    /// The browser could not read the file.
    #[error("failed to read file: {0}")]
    Read(String),

    /// The request body could not be built.
    #[error("failed to encode payload: {0}")]
    Encode(String),

    /// The request never completed.
    #[error("{0}")]
    Network(String),

    /// Non-2xx status. `message` is the server's error text or a generic one.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 2xx status with a body reporting failure.
    #[error("{0}")]
    Rejected(String),

    /// The body could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_never_decreases() {
        let mut task = UploadTask::new("a.txt", "text/plain");
        task.advance(70);
        task.advance(10);
        assert_eq!(task.progress, 70);
        task.advance(250);
        assert_eq!(task.progress, 100);
    }

    #[test]
    fn test_success_settles_at_full_progress() {
        let mut task = UploadTask::new("a.png", "image/png");
        task.advance(10);
        task.finish(Ok("https://example.com/f".into()));

        assert_eq!(task.progress, 100);
        assert_eq!(task.url(), Some("https://example.com/f"));
        assert_eq!(task.label(), "Done ✓");
    }

    #[test]
    fn test_error_keeps_last_progress() {
        let mut task = UploadTask::new("a.png", "image/png");
        task.advance(70);
        task.finish(Err(UploadError::Rejected("quota exceeded".into())));

        assert_eq!(task.progress, 70);
        assert_eq!(task.error(), Some("quota exceeded"));
        assert_eq!(task.label(), "Error");
    }

    #[test]
    fn test_terminal_task_ignores_later_updates() {
        let mut task = UploadTask::new("a.png", "image/png");
        task.finish(Err(UploadError::Network("offline".into())));
        task.advance(100);
        task.finish(Ok("https://example.com/f".into()));

        assert_eq!(task.progress, 0);
        assert_eq!(task.error(), Some("offline"));
        assert!(task.url().is_none());
    }

    #[test]
    fn test_glyph_and_default_mime() {
        assert_eq!(UploadTask::new("p.jpg", "image/jpeg").glyph(), "IMG");
        let task = UploadTask::new("clip.bin", "");
        assert_eq!(task.glyph(), "FILE");
        assert_eq!(task.mime_type, "application/octet-stream");
        assert_eq!(task.label(), "0%");
    }

    #[test]
    fn test_server_response_missing_fields() {
        let response: ServerResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.ok);
        assert!(response.url.is_none());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_too_large_message() {
        let err = UploadError::TooLarge {
            encoded_size: 70_000_000,
            limit: 60 * 1024 * 1024,
        };
        let msg = err.to_string();
        assert!(msg.contains("too large"));
        assert!(msg.contains("60 MiB"));
    }
}
