//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies the same redirect rules: signed-out users go
//! to `/login`, signed-in users without an allowed role go to their own home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::{AuthState, home_path};

/// Where a guarded page should send the user, or `None` to stay.
#[must_use]
pub fn guard_target(state: &AuthState, allowed: &[Role]) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match state.role() {
        None => Some("/login"),
        Some(role) if !allowed.contains(&role) => Some(home_path(role)),
        Some(_) => None,
    }
}

/// Redirect whenever auth has loaded and the user may not see this page.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, allowed: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = guard_target(&state, allowed) {
            navigate(target, NavigateOptions::default());
        }
    });
}

pub const ALL_ROLES: [Role; 3] = [Role::Admin, Role::Worker, Role::Client];
pub const ADMIN_ONLY: [Role; 1] = [Role::Admin];
