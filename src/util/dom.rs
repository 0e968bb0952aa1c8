//! Thin `web-sys` helpers shared by the behavior components.
//!
//! Listeners registered here live for the page's lifetime, so their
//! closures are leaked with `forget()` once attached.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement, NodeList, Window};

use crate::error::ControllerError;

pub fn window() -> Result<Window, ControllerError> {
    web_sys::window().ok_or(ControllerError::Unavailable("window"))
}

pub fn document() -> Result<Document, ControllerError> {
    window()?.document().ok_or(ControllerError::Unavailable("document"))
}

pub fn require_by_id(doc: &Document, id: &str) -> Result<Element, ControllerError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| ControllerError::MissingElement(format!("#{id}")))
}

/// Every element in `doc` matching `selector`.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, ControllerError> {
    Ok(elements(&doc.query_selector_all(selector)?))
}

/// Every element under `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, ControllerError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Current value of an `<input>` or `<textarea>`; text content otherwise.
pub fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    el.text_content().unwrap_or_default()
}

/// Attach `handler` to `event` on `target` for the rest of the page's life.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ControllerError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
