//! Scroll-triggered stat counters.
//!
//! The stats container is observed until it first crosses the visibility
//! threshold. Then every counter inside gets its own interval that ramps
//! the displayed number up to the value originally written in the markup,
//! and the container is unobserved so this happens once per page load.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::CounterConfig;
use crate::error::ControllerError;
use crate::state::counter::{CounterRamp, parse_leading_int};
use crate::util::dom;
use crate::util::handle::HandleSlot;

pub fn install(doc: &Document, config: &CounterConfig) -> Result<(), ControllerError> {
    let Some(container) = doc.query_selector(&config.container_selector)? else {
        log::debug!("stat counter: {} not on this page", config.container_selector);
        return Ok(());
    };

    let settings = config.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Err(err) = start_counters(&target, &settings) {
                    log::warn!("stat counter: {err}");
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&container);
    callback.forget();
    Ok(())
}

fn start_counters(container: &Element, config: &CounterConfig) -> Result<(), ControllerError> {
    let counters = dom::query_all_in(container, &config.item_selector)?;
    log::debug!("stat counter: animating {} counter(s)", counters.len());
    for counter in counters {
        let text = counter.text_content().unwrap_or_default();
        let Some(target) = parse_leading_int(&text) else {
            log::debug!("stat counter: {text:?} has no leading number, left as is");
            continue;
        };
        let ramp = CounterRamp::new(target, config.duration_ms, config.tick_ms);
        animate(counter, ramp, config.suffix.clone(), config.tick_ms);
    }
    Ok(())
}

/// Run `ramp` on its own interval; the final tick drops the interval.
fn animate(counter: Element, mut ramp: CounterRamp, suffix: String, tick_ms: u32) {
    let handle = Rc::new(RefCell::new(HandleSlot::<Interval>::new()));
    let handle_for_tick = Rc::clone(&handle);
    let interval = Interval::new(tick_ms, move || {
        let frame = ramp.tick();
        counter.set_text_content(Some(&frame.label(&suffix)));
        if frame.done {
            handle_for_tick.borrow_mut().release();
        }
    });
    handle.borrow_mut().arm(interval);
}
