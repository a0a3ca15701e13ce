use leptos::*;
use crate::UploadTask;

/// One file's row: type glyph, name, percentage label and bar, then the
/// link or the error once the upload settles.
#[component]
pub fn ProgressRow(task: RwSignal<UploadTask>) -> impl IntoView {
    // Name and type never change after the row is created
    let (name, glyph) = task.with_untracked(|t| (t.name.clone(), t.glyph()));

    let link = move || {
        task.with(|t| t.url().map(str::to_string)).map(|url| {
            view! {
                <a class="progress-link" href=url target="_blank" rel="noopener">
                    "Open"
                </a>
            }
        })
    };

    let error = move || {
        task.with(|t| t.error().map(str::to_string))
            .map(|message| view! { <div class="progress-error">{message}</div> })
    };

    view! {
        <div class="progress-row-container">
            <div class="progress-row">
                <div class="progress-thumb">{glyph}</div>
                <div class="progress-body">
                    <div class="progress-head">
                        <strong class="progress-name">{name}</strong>
                        <span class="progress-text">{move || task.with(UploadTask::label)}</span>
                    </div>
                    <div class="progress-bar">
                        <div
                            class="progress-level"
                            style:width=move || format!("{}%", task.with(|t| t.progress))
                        ></div>
                    </div>
                </div>
                {link}
            </div>
            {error}
        </div>
    }
}
