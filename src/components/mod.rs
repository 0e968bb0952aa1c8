//! Behavior components attached to the page markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component exposes one `install` that looks up its own elements,
//! wires its listeners or timers, and returns. Components share no state.
//! A missing optional element is not an error: the component logs at debug
//! level and skips itself.

pub mod active_nav;
pub mod contact_form;
pub mod scroll_reveal;
pub mod smooth_scroll;
pub mod stat_counter;
pub mod theme_toggle;
pub mod typing_text;
