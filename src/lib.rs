//! # portal
//!
//! Leptos + WASM single-page portal: a client-side router behind an
//! authentication gate. A static route table declares which views require a
//! signed-in session; a navigation guard evaluates every transition and
//! routes unauthenticated visits through the login view, remembering where
//! they wanted to go.

use wasm_bindgen::prelude::wasm_bindgen;

pub mod app;
pub mod components;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod session;

/// WASM entry point, called when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("starting portal");

    leptos::mount::mount_to_body(app::App);
}
