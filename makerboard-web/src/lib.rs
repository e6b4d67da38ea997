#![forbid(unsafe_code)]
//! Makerboard web front end: a Yew single-page app with the ranked list
//! viewer and the roulette mini-game, over the `makerboard-core` engine.

pub mod app;
pub mod components;
pub mod content;
pub mod dom;
pub mod pages;
pub mod router;
pub mod storage;
pub mod theme;
pub mod video;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
