//! Upload services.
//!
//! # Services
//!
//! - [`payload`] - base64 payload and request body (JSON or multipart)
//! - [`response`] - interpretation of the endpoint's reply
//! - [`upload`] - the per-file pipeline and its browser transport

pub mod payload;
pub mod response;
pub mod upload;

pub use payload::*;
pub use response::*;
pub use upload::*;
