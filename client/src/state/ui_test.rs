use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = UiState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Error, "two");
    assert_eq!((a, b), (0, 1));
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].text, "two");
}

#[test]
fn push_drops_oldest_beyond_cap() {
    let mut state = UiState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Info, format!("t{i}"));
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].text, "t2");
    assert_eq!(state.toasts.last().map(|t| t.id), Some(6));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = UiState::default();
    let a = state.push(ToastKind::Success, "saved");
    let b = state.push(ToastKind::Error, "failed");
    state.dismiss(a);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn toast_kind_modifiers() {
    assert_eq!(ToastKind::Success.css_modifier(), "success");
    assert_eq!(ToastKind::Error.css_modifier(), "error");
    assert_eq!(ToastKind::Info.css_modifier(), "info");
}
