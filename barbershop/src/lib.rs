//! # barbershop
//!
//! Client-side core for the barbershop booking app: the auth session, route
//! guarding, REST wire types, form validation and dashboard schedule math.
//!
//! This crate owns no transport and no storage. Front ends plug in an
//! [`api::Api`] implementation (browser fetch, `reqwest`) and a
//! [`storage::KeyValueStore`] implementation (`localStorage`, a JSON file),
//! then drive everything through [`session::SessionStore`].

pub mod api;
pub mod guard;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod types;
pub mod validation;

pub use api::{Api, ApiError, Credential};
pub use guard::{GuardDecision, decide};
pub use session::{SessionError, SessionStore};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use types::User;
