//! Trailing-Edge Debounce
//!
//! Collapses rapid repeated triggers into one delayed action. Each call
//! replaces the pending timer, so only the last value inside the window
//! reaches the action, and the action sees that value at fire time rather
//! than a snapshot captured when the debouncer was built.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

pub struct Debounce<T: 'static> {
    delay_ms: u32,
    action: Rc<dyn Fn(T)>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl<T> Clone for Debounce<T> {
    fn clone(&self) -> Self {
        Self {
            delay_ms: self.delay_ms,
            action: Rc::clone(&self.action),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<T: 'static> Debounce<T> {
    pub fn new(delay_ms: u32, action: impl Fn(T) + 'static) -> Self {
        Self {
            delay_ms,
            action: Rc::new(action),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `value` for delivery after the delay. Replacing the held
    /// `Timeout` drops it, which cancels the previous trailing edge.
    pub fn call(&self, value: T) {
        let action = Rc::clone(&self.action);
        let timer = Timeout::new(self.delay_ms, move || action(value));
        *self.pending.borrow_mut() = Some(timer);
    }
}
