//! Transient UI state: the toast stack.
//!
//! DESIGN
//! ======
//! Failed requests and completed actions surface as toasts. Keeping them in
//! one context signal lets any page report without owning layout.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::auth::{AuthState, clear_session};

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;
/// Browser-side lifetime of a toast.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
}

impl UiState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast { id, kind, text: text.into() });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Show a toast and schedule its removal.
pub fn notify(ui: RwSignal<UiState>, kind: ToastKind, text: impl Into<String>) {
    let mut id = 0;
    ui.update(|u| id = u.push(kind, text));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        ui.update(|u| u.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Report a failed request: expired sessions sign the user out, everything
/// becomes an error toast.
pub fn report_error(ui: RwSignal<UiState>, auth: RwSignal<AuthState>, err: &ApiError) {
    if err.is_unauthorized() {
        clear_session(auth);
    }
    notify(ui, ToastKind::Error, err.user_message());
}
