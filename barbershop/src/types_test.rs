use super::*;
use time::macros::datetime;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_without_avatar() {
    let user: User =
        serde_json::from_str(r#"{"id":"user123","name":"John Doe","email":"johndoe@example.com"}"#).unwrap();
    assert_eq!(user.id, "user123");
    assert_eq!(user.avatar_url, None);
}

#[test]
fn user_ignores_extra_server_fields() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","name":"Ann","email":"ann@example.com","avatar_url":"http://x/a.png","created_at":"2020-01-01"}"#,
    )
    .unwrap();
    assert_eq!(user.avatar_url.as_deref(), Some("http://x/a.png"));
}

// =============================================================
// ProfileUpdate
// =============================================================

#[test]
fn profile_update_without_password_sends_name_and_email_only() {
    let update = ProfileUpdate { name: "Ann".to_owned(), email: "ann@example.com".to_owned(), password: None };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({"name": "Ann", "email": "ann@example.com"}));
}

#[test]
fn profile_update_with_password_flattens_fields() {
    let update = ProfileUpdate {
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        password: Some(PasswordChange {
            old_password: "old".to_owned(),
            password: "new".to_owned(),
            password_confirmation: "new".to_owned(),
        }),
    };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["old_password"], "old");
    assert_eq!(json["password"], "new");
    assert_eq!(json["password_confirmation"], "new");
}

// =============================================================
// Appointment
// =============================================================

#[test]
fn appointment_parses_rfc3339_date() {
    let appointment: Appointment = serde_json::from_str(
        r#"{"id":"a1","date":"2020-06-08T14:00:00-03:00","user":{"name":"Pablo","avatar_url":null}}"#,
    )
    .unwrap();
    assert_eq!(appointment.date, datetime!(2020-06-08 14:00 -3));
    assert_eq!(appointment.user.name, "Pablo");
}

#[test]
fn avatar_upload_debug_hides_bytes() {
    let upload = AvatarUpload {
        file_name: "me.png".to_owned(),
        content_type: "image/png".to_owned(),
        bytes: vec![1, 2, 3],
    };
    let rendered = format!("{upload:?}");
    assert!(rendered.contains("len: 3"));
    assert!(!rendered.contains("[1, 2, 3]"));
}
