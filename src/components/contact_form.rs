//! Contact form submit handler.
//!
//! Reads the three fields, validates them and renders the result. Errors go
//! in a feedback element directly after the field. A valid form gets a
//! success banner after it, removed after a timeout or when its close
//! button is clicked, and is then reset. No request is made.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlFormElement};

use crate::config::ContactConfig;
use crate::error::ControllerError;
use crate::state::contact::{ContactDraft, Field, FormSurface, apply_report, validate};
use crate::util::dom;
use crate::util::handle::HandleSlot;

const BANNER_CLASS: &str = "alert alert-success alert-dismissible fade show mt-3";

/// A shown success banner and the callbacks that can dismiss it. Both the
/// close listener and the expiry timeout are freed on the first dismissal.
struct Banner {
    element: Element,
    close: Element,
    listener: HandleSlot<Closure<dyn FnMut(Event)>>,
    expiry: HandleSlot<Timeout>,
}

impl Banner {
    fn dismiss(&mut self) {
        self.element.remove();
        if let Some(listener) = self.listener.take() {
            if let Err(err) = self
                .close
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                log::warn!("contact form: close listener not detached: {err:?}");
            }
        }
        self.expiry.release();
    }
}

struct DomFormSurface {
    doc: Document,
    form: HtmlFormElement,
    config: ContactConfig,
}

impl DomFormSurface {
    fn field_id(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.config.name_id,
            Field::Email => &self.config.email_id,
            Field::Message => &self.config.message_id,
        }
    }

    fn field(&self, field: Field) -> Result<Element, ControllerError> {
        dom::require_by_id(&self.doc, self.field_id(field))
    }

    fn draft(&self) -> Result<ContactDraft, ControllerError> {
        Ok(ContactDraft::from_raw(
            &dom::field_value(&self.field(Field::Name)?),
            &dom::field_value(&self.field(Field::Email)?),
            &dom::field_value(&self.field(Field::Message)?),
        ))
    }

    fn submit(&mut self) -> Result<(), ControllerError> {
        let report = validate(&self.draft()?, self.config.min_message_chars);
        apply_report(self, &report)?;
        log::info!("contact form: submitted, valid={}", report.is_valid());
        Ok(())
    }
}

impl FormSurface for DomFormSurface {
    fn show_field_error(&mut self, field: Field, message: &str) -> Result<(), ControllerError> {
        self.clear_field_error(field)?;
        let el = self.field(field)?;
        el.class_list().add_1(&self.config.invalid_class)?;
        let feedback = self.doc.create_element("div")?;
        feedback.set_class_name(&self.config.feedback_class);
        feedback.set_text_content(Some(message));
        el.insert_adjacent_element("afterend", &feedback)?;
        Ok(())
    }

    fn clear_field_error(&mut self, field: Field) -> Result<(), ControllerError> {
        let el = self.field(field)?;
        el.class_list().remove_1(&self.config.invalid_class)?;
        while let Some(next) = el.next_element_sibling() {
            if !next.class_list().contains(&self.config.feedback_class) {
                break;
            }
            next.remove();
        }
        Ok(())
    }

    fn show_success(&mut self, title: &str, body: &str) -> Result<(), ControllerError> {
        let banner = self.doc.create_element("div")?;
        banner.set_class_name(BANNER_CLASS);

        let strong = self.doc.create_element("strong")?;
        strong.set_text_content(Some(title));
        banner.append_child(&strong)?;
        banner.append_child(&self.doc.create_text_node(&format!(" {body} ")))?;

        let close = self.doc.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", "Close")?;
        close.set_attribute("data-bs-dismiss", "alert")?;
        close.set_class_name("btn-close");
        banner.append_child(&close)?;

        self.form.insert_adjacent_element("afterend", &banner)?;

        let shown = Rc::new(RefCell::new(Banner {
            element: banner,
            close: close.clone(),
            listener: HandleSlot::new(),
            expiry: HandleSlot::new(),
        }));

        let on_close = Rc::clone(&shown);
        let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| on_close.borrow_mut().dismiss());
        close.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;

        let on_expiry = Rc::clone(&shown);
        let expiry = Timeout::new(self.config.banner_ms, move || on_expiry.borrow_mut().dismiss());

        let mut shown = shown.borrow_mut();
        shown.listener.arm(listener);
        shown.expiry.arm(expiry);
        Ok(())
    }

    fn reset(&mut self) -> Result<(), ControllerError> {
        self.form.reset();
        Ok(())
    }
}

pub fn install(doc: &Document, config: &ContactConfig) -> Result<(), ControllerError> {
    let Some(form) = doc.get_element_by_id(&config.form_id) else {
        log::debug!("contact form: #{} not on this page", config.form_id);
        return Ok(());
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| ControllerError::MissingElement(format!("form#{}", config.form_id)))?;

    let mut surface = DomFormSurface { doc: doc.clone(), form: form.clone(), config: config.clone() };
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        if let Err(err) = surface.submit() {
            log::warn!("contact form: {err}");
        }
    })
}
