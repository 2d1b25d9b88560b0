//! Event bus between the notes service and the UI.
//!
//! The bus is single-threaded (WASM constraint) and uses interior mutability
//! via RefCell. Events are buffered and drained by the UI on each frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use notekeeper_types::event::{AppEvent, Envelope};

/// Shared event bus, clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<Envelope>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event that belongs to no particular login.
    pub fn emit(&self, event: AppEvent) {
        self.emit_for(0, event);
    }

    /// Publish an event issued under `login`. Called when a backend call resolves.
    pub fn emit_for(&self, login: u64, event: AppEvent) {
        self.inner.borrow_mut().push_back(Envelope { login, event });
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<Envelope> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
