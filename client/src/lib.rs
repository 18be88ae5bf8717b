//! # client
//!
//! Leptos + WASM frontend for the workspace builder.
//!
//! The crate renders the desk scene, the product shelf, the item inspector
//! and the checkout modal. All workspace logic lives in the `configurator`
//! crate; components here read the session's `WorkspaceStore` from context
//! and route every mutation through its actions.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
