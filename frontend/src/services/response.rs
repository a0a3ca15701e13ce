//! Interpretation of the endpoint's reply.

use crate::{ServerResponse, UploadError, UploadResult};

/// Shown when a failed response carries no message of its own.
pub const UPLOAD_FAILED: &str = "upload failed";

/// Parse a response body given its HTTP status.
///
/// A 2xx body that does not parse is an invalid response. A non-2xx status is
/// always an error, using the body's `error` field when it has one.
pub fn parse_response(status: u16, body: &str) -> UploadResult<ServerResponse> {
    let parsed = serde_json::from_str::<ServerResponse>(body);

    if !(200..300).contains(&status) {
        let message = parsed
            .ok()
            .and_then(|response| response.error)
            .unwrap_or_else(|| format!("server error {}", status));
        return Err(UploadError::Server { status, message });
    }

    parsed.map_err(|e| UploadError::InvalidResponse(e.to_string()))
}

impl ServerResponse {
    /// The stored file's link, or the failure the body reports.
    pub fn into_link(self) -> UploadResult<String> {
        if !self.ok {
            return Err(UploadError::Rejected(
                self.error.unwrap_or_else(|| UPLOAD_FAILED.to_string()),
            ));
        }
        self.url
            .ok_or_else(|| UploadError::InvalidResponse("missing url".to_string()))
    }
}

/// [`parse_response`] followed by [`ServerResponse::into_link`].
pub fn interpret_response(status: u16, body: &str) -> UploadResult<String> {
    parse_response(status, body)?.into_link()
}
