//! # portfolio-client
//!
//! WASM interaction layer for the static portfolio page. The markup is
//! rendered elsewhere; this crate attaches behavior to it once the document
//! is parsed: typing headline, smooth in-page scrolling, active nav link,
//! contact form validation, persisted light/dark theme and the stat counters.
//!
//! Pure logic lives in `state` and `util` and builds natively for tests.
//! Everything that touches the browser sits behind the `hydrate` feature.

pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;

/// WASM entry point, run by the generated JS glue when the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::boot();
}
