//! Upload widget with drag & drop support.
//!
//! Owns the three regions of the widget: the drop zone, the hidden file
//! picker and the progress list. Every accepted batch replaces the list and
//! starts one independent upload per file.

use leptos::ev::DragEvent;
use leptos::html::Input;
use leptos::*;
use web_sys::{Event, File, FileList, HtmlInputElement};

use crate::services::{accept_batch, run_task, FetchTransport};
use crate::{ProgressRow, UploadConfig, UploadTask};

/// One entry of the progress list.
#[derive(Clone, Copy)]
struct UploadRow {
    id: usize,
    task: RwSignal<UploadTask>,
}

fn files_from_list(list: Option<FileList>) -> Vec<File> {
    list.map(|files| (0..files.length()).filter_map(|i| files.get(i)).collect())
        .unwrap_or_default()
}

#[component]
pub fn UploadWidget(
    /// Endpoint, payload encoding and size policy for this widget
    #[prop(optional)]
    config: UploadConfig,
) -> impl IntoView {
    let config = store_value(config);
    let next_id = store_value(0usize);
    let (rows, set_rows) = create_signal(Vec::<UploadRow>::new());
    let (dragging, set_dragging) = create_signal(false);
    let file_input = create_node_ref::<Input>();

    // Row signals belong to the widget, not to whichever event created them
    let owner = Owner::current();
    let new_task = move |task: UploadTask| match owner {
        Some(owner) => with_owner(owner, || create_rw_signal(task)),
        None => create_rw_signal(task),
    };

    let start_batch = move |files: Vec<File>| {
        let config = config.get_value();
        let mut current = rows.get_untracked();
        let previous = current.clone();

        let started = accept_batch(files, &config, &mut current, |file| {
            let id = next_id.get_value();
            next_id.set_value(id + 1);
            UploadRow {
                id,
                task: new_task(UploadTask::new(file.name(), file.type_())),
            }
        });
        if started.is_empty() {
            log::debug!("Ignoring empty batch");
            return;
        }
        log::info!("📦 Accepted {} file(s)", started.len());

        set_rows.set(current);
        for row in previous {
            row.task.dispose();
        }

        for (file, row) in started {
            let config = config.clone();
            spawn_local(async move {
                run_task(&file, &FetchTransport, &config, &row.task).await;
            });
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        start_batch(files_from_list(input.files()));
        // Allow picking the same file again
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        let files = ev
            .data_transfer()
            .map(|transfer| files_from_list(transfer.files()))
            .unwrap_or_default();
        start_batch(files);
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <section class="upload-widget">
            <div
                class="drop-area"
                id="dropArea"
                class:dragover=move || dragging.get()
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=open_picker
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drop files here"</div>
                <div class="upload-hint">"or click to choose"</div>
            </div>

            <input
                type="file"
                id="fileInput"
                multiple
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <div class="progress-area" id="progressArea">
                <For
                    each=move || rows.get()
                    key=|row| row.id
                    children=move |row| view! { <ProgressRow task=row.task/> }
                />
            </div>
        </section>
    }
}
