//! Fixed-position stack of toasts from `UiState`.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast toast--{}", toast.kind.css_modifier());
                        view! {
                            <div class=class>
                                <span class="toast__text">{toast.text}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| ui.update(|u| u.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
