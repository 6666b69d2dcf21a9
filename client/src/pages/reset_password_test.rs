use super::*;

#[test]
fn token_is_taken_from_query() {
    assert_eq!(reset_token(Some("abc123".to_owned())), Some("abc123".to_owned()));
}

#[test]
fn missing_or_blank_token_is_none() {
    assert_eq!(reset_token(None), None);
    assert_eq!(reset_token(Some("  ".to_owned())), None);
}
