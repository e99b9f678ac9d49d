//! Cedar Court Hotel marketing site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components render the public site; `net` carries form
//! submissions to the relay API. The crate builds twice: `ssr` for
//! server-side rendering inside the Axum binary, `hydrate` for the WASM
//! bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
