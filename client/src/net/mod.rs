//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `barbershop::Api` seam over `fetch`. The wire types
//! themselves live in `barbershop::types`.

pub mod api;
