//! Owner for a browser callback handle (timeout, interval, listener).
//!
//! Dropping a `gloo_timers` handle or a `Closure` cancels and frees it, so
//! holding the handle here instead of calling `forget()` keeps at most one
//! allocation alive per slot. Arming a new handle drops the previous one.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

#[derive(Debug)]
pub struct HandleSlot<T> {
    current: Option<T>,
}

impl<T> Default for HandleSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> HandleSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `handle`, dropping whatever was held before.
    pub fn arm(&mut self, handle: T) {
        self.current = Some(handle);
    }

    /// Drop the held handle. Returns whether one was held.
    pub fn release(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Take the held handle out without dropping it.
    pub fn take(&mut self) -> Option<T> {
        self.current.take()
    }

    pub fn is_armed(&self) -> bool {
        self.current.is_some()
    }
}
