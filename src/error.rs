//! Error types for wiring behaviors onto the page.
//!
//! ERROR HANDLING
//! ==============
//! Each behavior's `install` returns `ControllerError` instead of panicking.
//! The controller logs the error and keeps wiring the remaining behaviors,
//! so one broken element never takes the whole page down.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("browser api unavailable: {0}")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ControllerError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
