//! Dropload - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for uploading files to a web endpoint as base64
//! payloads, one POST per file, with a progress row per file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPage                                                  │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadWidget                                           │
//! │  │   ├── drop zone + hidden file picker                     │
//! │  │   └── ProgressRow per file                               │
//! │  └── Footer                                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint, size limit and per-widget settings
//! - [`types`] - Common types (UploadTask, ServerResponse, UploadError)
//! - [`components`] - UI components (UploadWidget, ProgressRow, etc.)
//! - [`services`] - Payload encoding, transport and response handling

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Tasks
    UploadStatus, UploadTask,
    // API
    ServerResponse,
    // Errors
    UploadError, UploadResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Dropload - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Dropload"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadWidget/>
        </div>

        <Footer/>
    }
}
