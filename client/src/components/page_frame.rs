//! Layout shared by signed-in pages: nav bar, title row, guarded body.
//!
//! DESIGN
//! ======
//! The body renders only once auth has loaded and the role is allowed, so
//! pages never flash content the route guard is about to redirect away from.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

#[component]
pub fn PageFrame(title: &'static str, allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, allowed, use_navigate());

    let permitted = move || {
        let state = auth.get();
        !state.loading && state.has_role(allowed)
    };

    view! {
        <div class="page">
            <NavBar/>
            <main class="page__main">
                <h1 class="page__title">{title}</h1>
                <Show
                    when=permitted
                    fallback=move || {
                        view! {
                            <p class="page__placeholder">
                                {move || if auth.get().loading { "Loading..." } else { "Redirecting..." }}
                            </p>
                        }
                    }
                >
                    {children()}
                </Show>
            </main>
        </div>
    }
}
