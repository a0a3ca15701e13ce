//! Request body construction for one file.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MIME_TYPE;
use crate::{UploadError, UploadResult};

/// How the payload is put on the wire. Chosen once per widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// `application/json` body.
    #[default]
    Json,
    /// Multipart form; the browser picks the content type.
    Multipart,
}

impl PayloadEncoding {
    /// Whether the "request sent" checkpoint is reported for this encoding.
    pub fn reports_sent(&self) -> bool {
        matches!(self, PayloadEncoding::Json)
    }

    /// Build the request body, moving the base64 text into it.
    pub fn encode(&self, payload: UploadPayload) -> UploadResult<RequestBody> {
        match self {
            PayloadEncoding::Json => serde_json::to_string(&payload)
                .map(RequestBody::Json)
                .map_err(|e| UploadError::Encode(e.to_string())),
            PayloadEncoding::Multipart => Ok(RequestBody::Form(payload.into_fields())),
        }
    }
}

/// The three fields the endpoint expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPayload {
    pub name: String,
    pub mime_type: String,
    pub base64: String,
}

impl UploadPayload {
    pub fn new(name: impl Into<String>, mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            mime_type: if mime_type.is_empty() {
                DEFAULT_MIME_TYPE.to_string()
            } else {
                mime_type.to_string()
            },
            base64: STANDARD.encode(bytes),
        }
    }

    /// Form fields, in the same order and with the same names as the JSON keys.
    pub fn into_fields(self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name),
            ("mimeType", self.mime_type),
            ("base64", self.base64),
        ]
    }
}

/// A built request body, independent of the browser types that carry it.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(String),
    Form(Vec<(&'static str, String)>),
}

/// Length of the padded base64 text for `byte_len` input bytes.
pub fn encoded_size(byte_len: u64) -> usize {
    usize::try_from(byte_len)
        .ok()
        .and_then(|len| base64::encoded_len(len, true))
        .unwrap_or(usize::MAX)
}

/// Pre-flight guard run before a file is read or sent.
pub fn check_encoded_size(byte_len: u64, limit: usize) -> UploadResult<usize> {
    let encoded_size = encoded_size(byte_len);
    if encoded_size > limit {
        return Err(UploadError::TooLarge {
            encoded_size,
            limit,
        });
    }
    Ok(encoded_size)
}
