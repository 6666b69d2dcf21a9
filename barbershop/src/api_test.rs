use super::*;

#[test]
fn endpoint_joins_relative_and_absolute_paths() {
    assert_eq!(endpoint("http://localhost:3333", "sessions"), "http://localhost:3333/sessions");
    assert_eq!(endpoint("http://localhost:3333/", "/password/forgot"), "http://localhost:3333/password/forgot");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    assert_eq!(endpoint("https://api.example.com/v1", "/users/avatar"), "https://api.example.com/v1/users/avatar");
    assert_eq!(endpoint("https://api.example.com/v1/", "profile"), "https://api.example.com/v1/profile");
}

#[test]
fn endpoint_with_empty_path_is_base() {
    assert_eq!(endpoint("http://h/", ""), "http://h");
}

#[test]
fn month_availability_path_formats_provider() {
    assert_eq!(month_availability_path("user123"), "/providers/user123/month-availability");
}

#[test]
fn credential_header_is_bearer() {
    assert_eq!(Credential::bearer("token-123").header_value(), "Bearer token-123");
}

#[test]
fn credential_debug_redacts_token() {
    let rendered = format!("{:?}", Credential::bearer("token-123"));
    assert!(!rendered.contains("token-123"));
}

#[test]
fn from_status_maps_401_to_unauthorized() {
    assert!(matches!(ApiError::from_status(401, String::new()), ApiError::Unauthorized));
    assert!(matches!(ApiError::from_status(400, String::new()), ApiError::Status { status: 400, .. }));
}

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::from_status(400, r#"{"status":"error","message":"Incorrect email/password combination."}"#.into());
    assert_eq!(err.user_message(), "Incorrect email/password combination.");
}

#[test]
fn user_message_falls_back_to_status() {
    let err = ApiError::from_status(500, "oops".into());
    assert_eq!(err.user_message(), "server responded with status 500");
}
