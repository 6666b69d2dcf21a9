//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form controls, toasts, the dashboard chrome and the
//! route guard wrapper, reading shared state from Leptos context providers.

pub mod button;
pub mod calendar;
pub mod guard;
pub mod header;
pub mod input;
pub mod toast_container;
