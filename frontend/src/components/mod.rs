//! UI Components for the upload page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadWidget`] - File picker, drop zone and progress list
//! - [`ProgressRow`] - Progress, link or error for a single file

mod hero;
mod upload;
mod progress;
mod footer;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use footer::*;
