//! # client
//!
//! Leptos + WASM single-page front end for the barbershop booking app.
//!
//! Pages, components and reactive state live here. Session handling, route
//! guarding, validation and schedule math come from the `barbershop` crate;
//! this crate supplies the browser implementations of its seams (`fetch` via
//! `gloo-net`, `localStorage` via `web-sys`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
