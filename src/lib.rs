//! # terrain-client
//!
//! Leptos + WASM frontend for the terrain image generator. Shows a Leaflet
//! map, lets the user choose hillshade or contour rendering, posts the visible
//! bounding box to the image endpoint, and displays the returned image.
//!
//! Browser-only code sits behind the `csr` feature; native builds keep the
//! wire types, capture, dispatch, and state logic so they can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod map;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install console logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
