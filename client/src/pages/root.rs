//! `/`: forwards to the role's home once the session is known.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, home_path};

#[component]
pub fn RootRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = state.role().map_or("/login", home_path);
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <p class="page__placeholder">"Loading..."</p> }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to dashboard"</a>
        </div>
    }
}
