//! Browser controllers for the Quantum Pixel encode and decode pages.
//!
//! Server responses are trusted markup and are injected without escaping.

pub mod app;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    app::boot();
}

/// Mount the encode controller explicitly, for pages outside `/encode/`.
#[wasm_bindgen]
pub fn mount_encode() {
    let config = app::init();
    domain::encode::mount(config);
}

/// Mount the decode controller explicitly, for pages outside `/decode/`.
#[wasm_bindgen]
pub fn mount_decode() {
    let config = app::init();
    domain::decode::mount(config);
}
