//! Email + password sign-in.
//!
//! On success the session is stored and the user lands on their role's home.
//! A user who already has a session is forwarded there immediately.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, home_path};
use crate::util::forms;

/// Trimmed email and raw password, or the message to show.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    let email = forms::email(email)?;
    Ok((email, password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        if let Some(role) = state.role() {
            navigate(home_path(role), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::http::ApiClient::default();
            match crate::net::api::login(&api, &email_value, &password_value).await {
                Ok(session) => {
                    log::info!("signed in as {}", session.user.email);
                    password.set(String::new());
                    info.set(String::new());
                    crate::state::auth::store_session(auth, session);
                }
                Err(err) => info.set(err.user_message()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Verdant"</h1>
                <p class="login-card__subtitle">"Garden service management"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
