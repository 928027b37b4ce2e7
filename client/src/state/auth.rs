//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context. Route guards read it to decide
//! redirects, pages read it to build an authorized `ApiClient`, and the nav
//! bar reads the role to pick links. The session record is mirrored to
//! `localStorage` so a reload keeps the user signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::{Role, Session, User};
use crate::util::storage;

/// `localStorage` key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "verdant_session";

/// Authentication state tracking the current session and restore status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the stored session has been restored and re-validated.
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the stored session has been checked.
    #[must_use]
    pub fn restoring() -> Self {
        Self { session: None, loading: true }
    }

    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self { session: Some(session), loading: false }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    /// REST client carrying this session's bearer token.
    #[must_use]
    pub fn api(&self) -> ApiClient {
        ApiClient::default().with_token(self.session.as_ref().map(|s| s.token.clone()))
    }

    /// Loaded and signed out.
    #[must_use]
    pub fn is_signed_out(&self) -> bool {
        !self.loading && self.session.is_none()
    }

    /// Signed in with one of `allowed` roles.
    #[must_use]
    pub fn has_role(&self, allowed: &[Role]) -> bool {
        self.role().is_some_and(|role| allowed.contains(&role))
    }
}

/// Landing route for each role.
#[must_use]
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Worker => "/worker",
        Role::Client => "/client",
    }
}

/// Persist `session` and mark the user signed in.
pub fn store_session(auth: RwSignal<AuthState>, session: Session) {
    storage::save_json(SESSION_KEY, &session);
    auth.set(AuthState::signed_in(session));
}

/// Forget the session locally.
pub fn clear_session(auth: RwSignal<AuthState>) {
    storage::remove(SESSION_KEY);
    auth.set(AuthState::default());
}

/// Load the stored session and re-validate it with `GET /auth/me`.
///
/// A rejected token clears the session. Other failures (offline backend) keep
/// the stored session so the user is not logged out by a network blip.
pub fn restore_session(auth: RwSignal<AuthState>) {
    let Some(stored) = storage::load_json::<Session>(SESSION_KEY) else {
        auth.set(AuthState::default());
        return;
    };
    auth.set(AuthState { session: Some(stored.clone()), loading: true });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = ApiClient::default().with_token(Some(stored.token.clone()));
        match crate::net::api::me(&api).await {
            Ok(user) => {
                let session = Session { token: stored.token, user };
                storage::save_json(SESSION_KEY, &session);
                auth.set(AuthState::signed_in(session));
            }
            Err(err) if err.is_unauthorized() => {
                log::info!("stored session rejected; signing out");
                clear_session(auth);
            }
            Err(err) => {
                log::warn!("session check failed: {err}");
                auth.update(|a| a.loading = false);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stored;
        auth.update(|a| a.loading = false);
    }
}

/// Sign out server-side (best-effort) and locally.
pub fn logout(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let api = auth.get_untracked().api();
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&api).await;
        });
    }
    clear_session(auth);
}
