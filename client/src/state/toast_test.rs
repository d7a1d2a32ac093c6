use super::*;

#[test]
fn default_state_is_empty() {
    assert!(ToastState::default().items().is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "saved");
    let b = state.push(ToastKind::Error, "failed");
    assert!(b > a);
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.items()[1].message, "failed");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Warning, "Invalid Image.");
    let b = state.push(ToastKind::Success, "ok");
    assert!(state.dismiss(a));
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, b);
}

#[test]
fn dismiss_twice_reports_missing() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Success, "ok");
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
}

#[test]
fn overflow_drops_oldest() {
    let mut state = ToastState::default();
    for i in 0..(MAX_VISIBLE_TOASTS + 2) {
        state.push(ToastKind::Warning, format!("toast {i}"));
    }
    assert_eq!(state.items().len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.items()[0].message, "toast 2");
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "a");
    state.dismiss(first);
    let second = state.push(ToastKind::Success, "b");
    assert_ne!(first, second);
}

#[test]
fn kind_classes_carry_modifier() {
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
    assert!(ToastKind::Success.class().starts_with("toast "));
}
