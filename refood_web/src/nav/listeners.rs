//! Global event subscriptions owned by a mounted component.
//!
//! A [`Subscription`] wraps a listener handle and detaches it at most once,
//! whether released explicitly from `on_cleanup` or dropped.

use leptos::prelude::WindowListenerHandle;

/// A registered listener that can be removed from its target.
pub trait Detach {
    fn detach(self);
}

impl Detach for WindowListenerHandle {
    fn detach(self) {
        self.remove();
    }
}

#[derive(Debug)]
pub struct Subscription<H: Detach> {
    event: &'static str,
    handle: Option<H>,
}

impl<H: Detach> Subscription<H> {
    pub fn new(event: &'static str, handle: H) -> Self {
        tracing::trace!(event, "listener attached");
        Self {
            event,
            handle: Some(handle),
        }
    }

    /// Detach the listener. Returns `false` if it was already released.
    pub fn release(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.detach();
                tracing::trace!(event = self.event, "listener detached");
                true
            }
            None => false,
        }
    }
}

impl<H: Detach> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.release();
    }
}
