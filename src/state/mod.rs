//! Per-behavior page state.
//!
//! DESIGN
//! ======
//! Each behavior owns a small model with no browser types in it. DOM wiring
//! in `components` drives these models and renders their output, so the
//! rules here are tested natively.

pub mod contact;
pub mod counter;
pub mod theme;
pub mod typing;
