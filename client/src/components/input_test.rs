use super::*;

#[test]
fn idle_field_is_plain() {
    assert_eq!(field_class(false, false, false), "input");
}

#[test]
fn focused_field_counts_as_filled() {
    assert_eq!(field_class(true, false, false), "input input--focused input--filled");
}

#[test]
fn error_replaces_focus_highlight() {
    assert_eq!(field_class(true, true, true), "input input--error input--filled");
    assert_eq!(field_class(false, false, true), "input input--error");
}
