//! Smooth scrolling for in-page anchors.

use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::ScrollConfig;
use crate::error::ControllerError;
use crate::util::dom;
use crate::util::scroll::scroll_target;

pub fn install(doc: &Document, config: &ScrollConfig) -> Result<(), ControllerError> {
    let anchors = dom::query_all(doc, &config.anchor_selector)?;
    log::debug!("smooth scroll: {} anchors", anchors.len());
    for anchor in anchors {
        let doc = doc.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            if let Some(target) = scroll_target(&href).and_then(|id| doc.get_element_by_id(id)) {
                scroll_to(&target);
            }
        })?;
    }
    Ok(())
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
