//! Application configuration.
//!
//! Centralized configuration for the upload widget. The endpoint is a
//! hardcoded constant that must be edited before deployment; a widget can
//! still be built against another one through [`UploadConfig`].

use crate::services::PayloadEncoding;

/// Upload endpoint (Apps Script web app or any compatible receiver).
pub const ENDPOINT_URL: &str =
    "https://script.google.com/macros/s/REPLACE_WITH_DEPLOYMENT_ID/exec";

/// Maximum size of the base64 text sent for one file (in bytes).
///
/// 60 MiB of base64, roughly 45 MB of binary data.
pub const MAX_ENCODED_SIZE: usize = 60 * 1024 * 1024;

/// MIME type sent when the browser reports none.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Progress once the file is fully read into memory.
pub const PROGRESS_READ: u8 = 10;

/// Progress once the request has been sent (JSON encoding only).
pub const PROGRESS_SENT: u8 = 70;

/// Progress once the response body has been parsed.
pub const PROGRESS_DONE: u8 = 100;

/// Per-widget upload settings, fixed at construction time.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadConfig {
    /// Endpoint receiving one POST per file.
    pub endpoint: String,
    /// How the payload is put on the wire.
    pub encoding: PayloadEncoding,
    /// Upper bound on the base64 length of a single file.
    pub max_encoded_size: usize,
    /// Drop zero-byte files from a batch before uploading.
    pub skip_empty_files: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT_URL.to_string(),
            encoding: PayloadEncoding::Json,
            max_encoded_size: MAX_ENCODED_SIZE,
            skip_empty_files: true,
        }
    }
}
