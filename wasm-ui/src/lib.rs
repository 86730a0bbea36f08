//! Web UI for wortteiler
//!
//! A Yew front-end: a single lookup form whose results are the split trees
//! returned by `/split/<word>`.

mod app;
mod components;
mod fetch;
mod view;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
