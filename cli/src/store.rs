//! Session persistence for the terminal: a small JSON object on disk.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plays the role `localStorage` plays in the browser. The session store
//! writes `@Barbershop:token` and `@Barbershop:user` here, so one invocation's
//! `sign-in` is visible to the next invocation's `whoami`.
//!
//! The whole file is read on every access and rewritten on every change; it
//! only ever holds the two session entries.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use barbershop::storage::{KeyValueStore, StorageError};

/// Default location: `<config dir>/barbershop/session.json`.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("barbershop").join("session.json"))
}

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => serde_json::from_str(&text).map_err(|e| StorageError::Io(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError::Io(format!("{}: {e}", self.path.display()))),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let write_err = |e: &dyn std::fmt::Display| StorageError::Write(format!("{}: {e}", self.path.display()));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(&e))?;
        }
        let text = serde_json::to_string_pretty(entries).map_err(|e| write_err(&e))?;
        fs::write(&self.path, text).map_err(|e| write_err(&e))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!(error = %e, "session file unreadable");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Unreadable content is overwritten.
        let mut entries = self.load().unwrap_or_default();
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(&entries)
    }
}
