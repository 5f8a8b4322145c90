#![recursion_limit = "256"]

//! WebAssembly entry point for the Creators Guild site.
//!
//! Hydrates the server-rendered pages so the theme switcher, hero animations,
//! gallery lightbox and contact form become interactive.

/// Called by the generated JS loader once the wasm module is instantiated.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    // Browser console logging; a second init (e.g. hot reload) is harmless.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating {}", app::routes::SITE_NAME);
    leptos::mount::hydrate_body(app::component);
}
