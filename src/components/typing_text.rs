//! Typing headline driver.
//!
//! The first frame renders synchronously; each frame then arms a one-shot
//! timeout for the delay it computed. The loop runs for the page's lifetime
//! and holds only the one pending timeout.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::config::TypingConfig;
use crate::error::ControllerError;
use crate::state::typing::TypingState;
use crate::util::handle::HandleSlot;

struct TypingLoop {
    target: Element,
    state: TypingState,
    pending: HandleSlot<Timeout>,
}

pub fn install(doc: &Document, config: &TypingConfig) -> Result<(), ControllerError> {
    let Some(target) = doc.get_element_by_id(&config.element_id) else {
        log::debug!("typing text: #{} not on this page", config.element_id);
        return Ok(());
    };
    let typing = Rc::new(RefCell::new(TypingLoop {
        target,
        state: TypingState::new(config.phrases.clone(), config.timings),
        pending: HandleSlot::new(),
    }));
    step(&typing);
    Ok(())
}

fn step(typing: &Rc<RefCell<TypingLoop>>) {
    let next = Rc::clone(typing);
    let mut typing = typing.borrow_mut();
    let frame = typing.state.tick();
    typing.target.set_text_content(Some(&frame.text));
    // Replaces the timeout that just fired.
    typing.pending.arm(Timeout::new(frame.delay_ms, move || step(&next)));
}
