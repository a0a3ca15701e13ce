//! Upload pipeline: read a file, encode it, POST it, interpret the reply.
//!
//! The browser specifics sit behind two traits so the pipeline itself can be
//! driven by in-memory files and canned responses:
//!
//! - [`FileSource`] - something with a name, a MIME type and readable bytes
//! - [`Transport`] - something that POSTs a [`RequestBody`] to a URL
//!
//! [`FetchTransport`] and the `web_sys::File` impl are the production ones.

#![allow(async_fn_in_trait)]

use gloo_net::http::{Request, Response};
use leptos::{RwSignal, SignalUpdate};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FormData, RequestMode};

use super::payload::{check_encoded_size, RequestBody, UploadPayload};
use super::response::parse_response;
use crate::config::{UploadConfig, PROGRESS_DONE, PROGRESS_READ, PROGRESS_SENT};
use crate::{UploadError, UploadResult, UploadTask};

// =============================================================================
// Seams
// =============================================================================

/// A file selected by the user.
pub trait FileSource {
    fn name(&self) -> String;
    /// MIME type as reported by the platform; may be empty.
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;
    async fn read_bytes(&self) -> UploadResult<Vec<u8>>;
}

/// A response whose headers have arrived.
pub trait TransportResponse {
    fn status(&self) -> u16;
    async fn text(self) -> UploadResult<String>;
}

/// Issues the single POST made for a file.
pub trait Transport {
    type Response: TransportResponse;

    async fn post(&self, endpoint: &str, body: RequestBody) -> UploadResult<Self::Response>;
}

/// Mutable access to the state behind a progress row.
pub trait TaskHandle {
    fn update_task(&self, f: impl FnOnce(&mut UploadTask));
}

impl TaskHandle for RwSignal<UploadTask> {
    fn update_task(&self, f: impl FnOnce(&mut UploadTask)) {
        // Rows of a replaced batch are disposed while their upload runs on
        _ = self.try_update(f);
    }
}

// =============================================================================
// Browser implementations
// =============================================================================

/// Text of a JS exception, preferring `Error.message`.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl FileSource for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    fn size(&self) -> u64 {
        // Blob sizes are integral and far below 2^53.
        Blob::size(self) as u64
    }

    async fn read_bytes(&self) -> UploadResult<Vec<u8>> {
        let buffer = JsFuture::from(self.array_buffer())
            .await
            .map_err(|e| UploadError::Read(describe_js_error(&e)))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

impl TransportResponse for Response {
    fn status(&self) -> u16 {
        Response::status(self)
    }

    async fn text(self) -> UploadResult<String> {
        Response::text(&self)
            .await
            .map_err(|e| UploadError::Network(e.to_string()))
    }
}

/// `fetch` in CORS mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    type Response = Response;

    async fn post(&self, endpoint: &str, body: RequestBody) -> UploadResult<Response> {
        let builder = Request::post(endpoint).mode(RequestMode::Cors);

        let request = match body {
            RequestBody::Json(text) => builder
                .header("Content-Type", "application/json")
                .body(text),
            RequestBody::Form(fields) => {
                let form_data = FormData::new()
                    .map_err(|e| UploadError::Encode(describe_js_error(&e)))?;
                for (name, value) in &fields {
                    form_data
                        .append_with_str(name, value)
                        .map_err(|e| UploadError::Encode(describe_js_error(&e)))?;
                }
                builder.body(form_data)
            }
        }
        .map_err(|e| UploadError::Encode(e.to_string()))?;

        request
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Files from one batch that should be uploaded.
pub fn uploadable_files<F: FileSource>(files: Vec<F>, config: &UploadConfig) -> Vec<F> {
    files
        .into_iter()
        .filter(|file| !config.skip_empty_files || file.size() > 0)
        .collect()
}

/// Replace `rows` with one new row per uploadable file.
///
/// Returns each file paired with its row, ready to be uploaded. When no file
/// is uploadable, `rows` is left untouched and nothing is returned.
pub fn accept_batch<F, R>(
    files: Vec<F>,
    config: &UploadConfig,
    rows: &mut Vec<R>,
    mut new_row: impl FnMut(&F) -> R,
) -> Vec<(F, R)>
where
    F: FileSource,
    R: Clone,
{
    let files = uploadable_files(files, config);
    if files.is_empty() {
        return Vec::new();
    }

    let started: Vec<(F, R)> = files
        .into_iter()
        .map(|file| {
            let row = new_row(&file);
            (file, row)
        })
        .collect();
    *rows = started.iter().map(|(_, row)| row.clone()).collect();
    started
}

/// Upload one file and return the link to the stored copy.
///
/// `on_progress` receives the fixed checkpoints: read, sent (JSON only) and
/// parsed. Oversize files fail before being read.
pub async fn upload_file<F, T>(
    file: &F,
    transport: &T,
    config: &UploadConfig,
    mut on_progress: impl FnMut(u8),
) -> UploadResult<String>
where
    F: FileSource,
    T: Transport,
{
    let name = file.name();
    let encoded_size = check_encoded_size(file.size(), config.max_encoded_size)?;
    log::info!("📤 Uploading {} ({} bytes encoded)", name, encoded_size);

    let bytes = file.read_bytes().await?;
    on_progress(PROGRESS_READ);

    let payload = UploadPayload::new(name, &file.mime_type(), &bytes);
    drop(bytes);
    let body = config.encoding.encode(payload)?;

    let response = transport.post(&config.endpoint, body).await?;
    if config.encoding.reports_sent() {
        on_progress(PROGRESS_SENT);
    }

    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        // An unreadable error body still yields the status fallback
        Err(e) if (200..300).contains(&status) => return Err(e),
        Err(e) => {
            log::debug!("Discarding unreadable body of HTTP {}: {}", status, e);
            String::new()
        }
    };
    let parsed = parse_response(status, &text)?;
    on_progress(PROGRESS_DONE);

    parsed.into_link()
}

/// Run [`upload_file`] against a row's task and settle it.
pub async fn run_task<F, T, H>(file: &F, transport: &T, config: &UploadConfig, task: &H)
where
    F: FileSource,
    T: Transport,
    H: TaskHandle,
{
    let outcome = upload_file(file, transport, config, |percent| {
        task.update_task(|t| t.advance(percent))
    })
    .await;

    match &outcome {
        Ok(url) => log::info!("✅ {} uploaded: {}", file.name(), url),
        Err(e) => log::warn!("❌ {} failed: {}", file.name(), e),
    }

    task.update_task(|t| t.finish(outcome));
}
