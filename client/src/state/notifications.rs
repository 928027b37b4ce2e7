//! In-app notifications for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The nav bar polls the backend and shows the unread badge; the
//! notifications page lists items and marks them read. Read flags are applied
//! locally only after the backend accepted the change.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::error::ApiError;
use crate::net::types::Notification;

/// Poll interval used by the nav bar.
pub const POLL_INTERVAL_SECS: u64 = 30;

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub loading: bool,
}

impl NotificationsState {
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Replace items with a fresh fetch, newest first.
    pub fn replace(&mut self, mut items: Vec<Notification>) {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.items = items;
        self.loading = false;
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }
}

/// What a background poll should do with its fetch result.
#[derive(Debug, PartialEq)]
pub enum PollOutcome {
    Replace(Vec<Notification>),
    /// The token was rejected; the session must be cleared.
    SignOut,
    /// Transient failure; keep the current items.
    Keep,
}

#[must_use]
pub fn poll_outcome(result: Result<Vec<Notification>, ApiError>) -> PollOutcome {
    match result {
        Ok(items) => PollOutcome::Replace(items),
        Err(err) if err.is_unauthorized() => PollOutcome::SignOut,
        Err(_) => PollOutcome::Keep,
    }
}

/// Badge text: empty for zero, capped at `9+`.
#[must_use]
pub fn badge_text(count: usize) -> String {
    match count {
        0 => String::new(),
        1..=9 => count.to_string(),
        _ => "9+".to_owned(),
    }
}
