//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) and provided once at the app
//! root as Leptos context, so pages depend on small focused handles.

pub mod auth;
pub mod toast;
