//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and submit orchestration and delegates
//! rendering details to `components`. Validation and request shapes come from
//! `barbershop::validation`; failures surface as toasts built in `feedback`.

pub mod dashboard;
pub(crate) mod feedback;
pub mod forgot_password;
pub mod profile;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;
