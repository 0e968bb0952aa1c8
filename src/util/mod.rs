//! Utility helpers shared across behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, DOM
//! lookups) and small pure rules (URL matching) from the behavior wiring.

pub mod handle;
pub mod nav;
pub mod scroll;
pub mod storage;

#[cfg(feature = "hydrate")]
pub mod dom;
