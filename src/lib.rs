//! # procure-ui
//!
//! Leptos + WASM frontend for a procurement management console: categories,
//! products, suppliers, purchase orders, invoices, payments, contracts, and
//! returns, all served by a remote REST backend.
//!
//! The backend owns every business rule. This crate fetches JSON, renders
//! tables and forms, and keeps a thin client-side session: a stored bearer
//! credential, advisory claim decoding, a route guard, and a role-filtered
//! navigation menu.

pub mod app;
pub mod components;
pub mod nav;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
