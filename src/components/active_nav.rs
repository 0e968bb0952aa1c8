//! One-shot highlight of the nav link for the current page.

use web_sys::{Document, Window};

use crate::config::NavConfig;
use crate::error::ControllerError;
use crate::util::dom;
use crate::util::nav::{current_file, is_active_link};

pub fn install(window: &Window, doc: &Document, config: &NavConfig) -> Result<(), ControllerError> {
    let pathname = window.location().pathname()?;
    let file = current_file(&pathname);
    let mut active = 0usize;
    for link in dom::query_all(doc, &config.link_selector)? {
        let classes = link.class_list();
        classes.remove_1(&config.active_class)?;
        let href = link.get_attribute("href").unwrap_or_default();
        if is_active_link(file, &href) {
            classes.add_1(&config.active_class)?;
            active += 1;
        }
    }
    log::debug!("active nav: {active} link(s) match {file:?}");
    Ok(())
}
