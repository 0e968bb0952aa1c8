//! Page interaction controller: boot, config loading and behavior wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` runs once when the WASM module starts. It waits for
//! `DOMContentLoaded` if the document is still parsing, then installs every
//! behavior in turn. Each install is independent; a failure is logged and
//! the rest still run.

use web_sys::Document;

use crate::components::{active_nav, contact_form, scroll_reveal, smooth_scroll, stat_counter, theme_toggle, typing_text};
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::error::ControllerError;
use crate::util::dom;

const LOG_LEVEL: log::Level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };

pub fn boot() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("logger not installed: {err}").into());
    }

    if let Err(err) = when_ready(run) {
        log::warn!("page controller not started: {err}");
    }
}

fn when_ready(start: fn()) -> Result<(), ControllerError> {
    let doc = dom::document()?;
    if doc.ready_state() == "loading" {
        dom::listen(&doc, "DOMContentLoaded", move |_event| start())
    } else {
        start();
        Ok(())
    }
}

fn run() {
    if let Err(err) = install_all() {
        log::warn!("page controller not started: {err}");
    }
}

fn install_all() -> Result<(), ControllerError> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let config = load_config(&doc);

    report("scroll reveal", scroll_reveal::install(&config.reveal));
    report("typing text", typing_text::install(&doc, &config.typing));
    report("smooth scroll", smooth_scroll::install(&doc, &config.scroll));
    report("active nav", active_nav::install(&window, &doc, &config.nav));
    report("contact form", contact_form::install(&doc, &config.contact));
    report("theme toggle", theme_toggle::install(&doc, &config.theme));
    report("stat counter", stat_counter::install(&doc, &config.counter));
    log::info!("page controller ready");
    Ok(())
}

/// Defaults, overridden by the inline JSON config element when present.
fn load_config(doc: &Document) -> PageConfig {
    let Some(raw) = doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => {
            log::debug!("config: loaded overrides from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("config: ignoring #{CONFIG_ELEMENT_ID}: {}", ControllerError::from(err));
            PageConfig::default()
        }
    }
}

fn report(behavior: &str, result: Result<(), ControllerError>) {
    match result {
        Ok(()) => log::debug!("{behavior}: installed"),
        Err(err) => log::warn!("{behavior}: skipped: {err}"),
    }
}
