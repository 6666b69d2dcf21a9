use super::*;

fn john() -> User {
    User {
        id: "user123".into(),
        name: "John Doe".into(),
        email: "johndoe@example.com".into(),
        avatar_url: None,
    }
}

#[test]
fn form_is_prefilled_from_user() {
    let form = profile_form_for(Some(&john()));
    assert_eq!(form.name, "John Doe");
    assert_eq!(form.email, "johndoe@example.com");
    assert!(form.old_password.is_empty());
}

#[test]
fn form_without_user_is_blank() {
    assert_eq!(profile_form_for(None), ProfileForm::default());
}

#[test]
fn avatar_upload_keeps_reported_type() {
    let upload = avatar_upload("me.png".into(), "image/png".into(), vec![1, 2, 3]);
    assert_eq!(upload.content_type, "image/png");
    assert_eq!(upload.bytes.len(), 3);
}

#[test]
fn avatar_upload_defaults_unknown_type() {
    let upload = avatar_upload("me.heic".into(), String::new(), Vec::new());
    assert_eq!(upload.content_type, "application/octet-stream");
    assert_eq!(upload.file_name, "me.heic");
}
