//! Footer component

use leptos::*;

use crate::MAX_ENCODED_SIZE;

#[component]
pub fn Footer() -> impl IntoView {
    let limit_mib = MAX_ENCODED_SIZE / (1024 * 1024);

    view! {
        <footer>
            <div>
                "Files are sent base64-encoded, up to " {limit_mib} " MiB each. Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
