//! File picker that uploads immediately on selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser `File` handles never leave this component: it builds the multipart
//! batch, runs the upload, and hands the parent only the decoded result.

use leptos::prelude::*;

use crate::net::types::{MediaAsset, PhotoKind, Task};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// What the selected files are uploaded as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadTarget {
    /// Before/after photos of an existing task.
    TaskPhotos { task_id: String, kind: PhotoKind },
    /// Free-standing media, e.g. task reference images.
    Media,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UploadResult {
    Task(Task),
    Media(Vec<MediaAsset>),
}

#[component]
pub fn PhotoUpload(
    label: &'static str,
    target: UploadTarget,
    on_done: Callback<UploadResult>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let busy = RwSignal::new(false);
    let is_disabled = move || busy.get() || disabled.is_some_and(|d| d.get());

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::http::UploadBatch;
            use crate::state::ui::{ToastKind, notify, report_error};

            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(list) = input.files() else {
                return;
            };
            let batch = UploadBatch::from_file_list(&list);
            input.set_value("");
            if batch.is_empty() {
                return;
            }
            busy.set(true);
            let api = auth.get_untracked().api();
            let target = target.clone();
            leptos::task::spawn_local(async move {
                let count = batch.len();
                let result = match &target {
                    UploadTarget::TaskPhotos { task_id, kind } => {
                        crate::net::api::upload_task_photos(&api, task_id, *kind, &batch)
                            .await
                            .map(UploadResult::Task)
                    }
                    UploadTarget::Media => crate::net::api::upload_media(&api, &batch).await.map(UploadResult::Media),
                };
                busy.set(false);
                match result {
                    Ok(done) => {
                        notify(
                            ui,
                            ToastKind::Success,
                            crate::util::format::count_label(count, "file uploaded", "files uploaded"),
                        );
                        on_done.run(done);
                    }
                    Err(err) => report_error(ui, auth, &err),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &target, on_done, auth, ui);
        }
    };

    view! {
        <label class="photo-upload" class:photo-upload--busy=move || busy.get()>
            <span class="photo-upload__label">
                {move || if busy.get() { "Uploading…" } else { label }}
            </span>
            <input
                class="photo-upload__input"
                type="file"
                accept="image/*"
                multiple=true
                disabled=is_disabled
                on:change=on_change
            />
        </label>
    }
}
