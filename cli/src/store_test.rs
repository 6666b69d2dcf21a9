use super::*;
use barbershop::storage::{TOKEN_KEY, USER_KEY};

fn store_in(dir: &tempfile::TempDir) -> FileStore {
    FileStore::new(dir.path().join("nested").join("session.json"))
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.get_item(TOKEN_KEY), None);
}

#[test]
fn set_creates_parent_dirs_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.set_item(TOKEN_KEY, "token-123").unwrap();
    store.set_item(USER_KEY, r#"{"id":"user123"}"#).unwrap();

    let reopened = store_in(&dir);
    assert_eq!(reopened.get_item(TOKEN_KEY).as_deref(), Some("token-123"));
    assert_eq!(reopened.get_item(USER_KEY).as_deref(), Some(r#"{"id":"user123"}"#));
}

#[test]
fn remove_only_drops_that_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.set_item(TOKEN_KEY, "token-123").unwrap();
    store.set_item(USER_KEY, "{}").unwrap();
    store.remove_item(TOKEN_KEY).unwrap();
    assert_eq!(store.get_item(TOKEN_KEY), None);
    assert_eq!(store.get_item(USER_KEY).as_deref(), Some("{}"));
}

#[test]
fn removing_absent_key_without_file_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.remove_item(TOKEN_KEY).unwrap();
    assert!(!store.path().exists());
}

#[test]
fn corrupt_file_reads_as_missing_and_is_replaced_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "not json").unwrap();
    let store = FileStore::new(&path);

    assert_eq!(store.get_item(TOKEN_KEY), None);
    assert!(matches!(store.remove_item(TOKEN_KEY), Err(StorageError::Io(_))));

    store.set_item(TOKEN_KEY, "fresh").unwrap();
    assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("fresh"));
}

#[test]
fn default_path_ends_with_session_file() {
    if let Some(path) = default_store_path() {
        assert!(path.ends_with("barbershop/session.json"));
    }
}
