//! Startup call into the external scroll-reveal library (AOS).
//!
//! The library owns the entrance animations; this only hands it options.

use wasm_bindgen::prelude::*;

use crate::config::RevealOptions;
use crate::error::ControllerError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;
}

/// Call `AOS.init(options)`. Fails when the library script is not loaded.
pub fn install(options: &RevealOptions) -> Result<(), ControllerError> {
    let raw = serde_json::to_string(options).map_err(|err| ControllerError::Js(err.to_string()))?;
    let value = js_sys::JSON::parse(&raw)?;
    aos_init(&value)?;
    log::debug!("scroll reveal: initialised with {raw}");
    Ok(())
}
