//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Dropload"</h1>
            <p class="subtitle">
                "Drop one or more files to upload them. "
                "Each file gets its own progress row and a link once it is stored."
            </p>
        </div>
    }
}
