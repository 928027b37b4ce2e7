use super::*;

fn note(id: &str, created_at: &str, read: bool) -> Notification {
    Notification {
        id: id.to_owned(),
        message: format!("message {id}"),
        created_at: created_at.to_owned(),
        read,
        link: None,
    }
}

fn state() -> NotificationsState {
    let mut state = NotificationsState { loading: true, ..NotificationsState::default() };
    state.replace(vec![
        note("n1", "2026-04-01T08:00:00Z", false),
        note("n2", "2026-04-03T08:00:00Z", true),
        note("n3", "2026-04-02T08:00:00Z", false),
    ]);
    state
}

#[test]
fn replace_sorts_newest_first_and_clears_loading() {
    let state = state();
    assert!(!state.loading);
    let ids: Vec<&str> = state.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["n2", "n3", "n1"]);
}

#[test]
fn unread_count_ignores_read_items() {
    assert_eq!(state().unread_count(), 2);
}

#[test]
fn mark_read_flags_single_item() {
    let mut state = state();
    state.mark_read("n1");
    assert_eq!(state.unread_count(), 1);
    state.mark_read("missing");
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn mark_all_read_clears_badge() {
    let mut state = state();
    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn badge_text_caps_at_nine() {
    assert_eq!(badge_text(0), "");
    assert_eq!(badge_text(3), "3");
    assert_eq!(badge_text(12), "9+");
}

#[test]
fn rejected_token_during_poll_signs_out() {
    assert_eq!(poll_outcome(Err(ApiError::Unauthorized)), PollOutcome::SignOut);
}

#[test]
fn transient_poll_failures_keep_items() {
    assert_eq!(poll_outcome(Err(ApiError::Network("offline".to_owned()))), PollOutcome::Keep);
    assert_eq!(poll_outcome(Err(ApiError::Forbidden)), PollOutcome::Keep);
}

#[test]
fn successful_poll_replaces_items() {
    let items = vec![note("n1", "2026-04-01T08:00:00Z", false)];
    assert_eq!(poll_outcome(Ok(items.clone())), PollOutcome::Replace(items));
}
