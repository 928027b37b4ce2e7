//! Top navigation bar with role-aware links, unread badge, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every signed-in page through `PageFrame`. It also owns the
//! notification poll so the badge stays current on any route.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::{AuthState, logout};
#[cfg(feature = "hydrate")]
use crate::state::auth::clear_session;
#[cfg(feature = "hydrate")]
use crate::state::notifications::{PollOutcome, poll_outcome};
use crate::state::notifications::{NotificationsState, badge_text};

/// `(label, href)` pairs shown for `role`, home first.
#[must_use]
pub fn nav_links(role: Role) -> Vec<(&'static str, &'static str)> {
    match role {
        Role::Admin => vec![
            ("Dashboard", "/admin"),
            ("Clients", "/clients"),
            ("Workers", "/workers"),
            ("Sites", "/sites"),
            ("Tasks", "/tasks"),
            ("Inventory", "/inventory"),
            ("Feedback", "/feedback"),
        ],
        Role::Worker => vec![("My work", "/worker"), ("Tasks", "/tasks")],
        Role::Client => vec![("Overview", "/client"), ("Sites", "/sites"), ("Tasks", "/tasks")],
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let state = auth.get_untracked();
                if state.session.is_some() {
                    let result = crate::net::api::list_notifications(&state.api()).await;
                    if let Err(err) = &result {
                        log::debug!("notification poll failed: {err}");
                    }
                    match poll_outcome(result) {
                        PollOutcome::Replace(items) => notifications.update(|n| n.replace(items)),
                        PollOutcome::SignOut => clear_session(auth),
                        PollOutcome::Keep => {}
                    }
                }
                gloo_timers::future::sleep(std::time::Duration::from_secs(
                    crate::state::notifications::POLL_INTERVAL_SECS,
                ))
                .await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let links = move || auth.get().role().map(nav_links).unwrap_or_default();
    let user_label = move || {
        auth.get()
            .user()
            .map(|u| format!("{} ({})", u.name, u.role.label()))
            .unwrap_or_default()
    };
    let badge = move || badge_text(notifications.get().unread_count());

    let on_logout = move |_| {
        logout(auth);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"Verdant"</span>
            <nav class="nav-bar__links">
                {move || {
                    links()
                        .into_iter()
                        .map(|(label, href)| view! { <a class="nav-bar__link" href=href>{label}</a> })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <span class="nav-bar__spacer"></span>
            <a class="nav-bar__notifications" href="/notifications" title="Notifications">
                "Notifications"
                <Show when=move || !badge().is_empty()>
                    <span class="nav-bar__badge">{badge}</span>
                </Show>
            </a>
            <span class="nav-bar__user">{user_label}</span>
            <button class="btn nav-bar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
