//! Field Notes documentation site
//!
//! A Leptos site shell whose navigation bar carries a responsive mobile
//! menu. Rendered on the server with the `ssr` feature and hydrated in the
//! browser with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount_to_body(app::App);
}
