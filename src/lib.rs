#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod links;
pub mod navigation;
pub mod portfolio;
pub mod reveal;
pub mod scroll;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (hot reload) is harmless
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
