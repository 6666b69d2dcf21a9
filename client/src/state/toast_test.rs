use super::*;

#[test]
fn builders_set_kind_and_description() {
    let toast = ToastMessage::error("Authentication error").with_description("Check your credentials");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.title, "Authentication error");
    assert_eq!(toast.description.as_deref(), Some("Check your credentials"));
    assert_eq!(ToastMessage::success("Profile updated!").description, None);
}

#[test]
fn ids_are_unique() {
    assert_ne!(ToastMessage::info("a").id, ToastMessage::info("a").id);
}

#[test]
fn add_keeps_insertion_order() {
    let mut state = ToastState::default();
    state.add(ToastMessage::info("first"));
    state.add(ToastMessage::info("second"));
    let titles: Vec<_> = state.messages.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[test]
fn remove_by_id_only_drops_that_toast() {
    let mut state = ToastState::default();
    let first = state.add(ToastMessage::info("first"));
    state.add(ToastMessage::info("second"));
    assert!(state.remove(first));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].title, "second");
}

#[test]
fn removing_twice_is_a_no_op() {
    let mut state = ToastState::default();
    let id = state.add(ToastMessage::info("x"));
    assert!(state.remove(id));
    assert!(!state.remove(id));
}

#[test]
fn kind_classes() {
    assert_eq!(ToastKind::Success.class(), "toast--success");
    assert_eq!(ToastKind::default(), ToastKind::Info);
}

#[test]
#[should_panic(expected = "use_toasts must be used within the app root")]
fn use_toasts_without_root_panics() {
    let _ = use_toasts();
}
