//! Modal wrapper for record create/edit forms.
//!
//! The dialog owns no field state. Pages bind inputs to their own signals and
//! supply `on_submit`; `error` shows the latest validation or server message.

use leptos::prelude::*;

#[component]
pub fn FormDialog(
    title: String,
    error: RwSignal<String>,
    busy: RwSignal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <form
                class="dialog dialog--form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    if !busy.get_untracked() {
                        on_submit.run(());
                    }
                }
            >
                <h2>{title}</h2>
                {children()}
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving…" } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
