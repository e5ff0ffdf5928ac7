//! Tiny single-threaded event bus with scoped subscriptions.
//!
//! Resize notifications from the host reach the scene through this rather
//! than ambient global state: the owning context holds a `Subscription`
//! guard, and dropping it unsubscribes. Callbacks must not subscribe or
//! unsubscribe reentrantly from inside `emit`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Box<dyn FnMut(&T)>;

struct Slots<T> {
    next_id: u64,
    subs: Vec<(u64, Callback<T>)>,
}

pub struct EventBus<T> {
    inner: Rc<RefCell<Slots<T>>>,
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Slots {
                next_id: 0,
                subs: Vec::new(),
            })),
        }
    }
}

impl<T> EventBus<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; it stays live for the lifetime of the
    /// returned guard.
    #[must_use]
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription<T> {
        let mut slots = self.inner.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        slots.subs.push((id, Box::new(callback)));
        Subscription {
            id,
            slots: Rc::downgrade(&self.inner),
        }
    }

    pub fn emit(&self, value: &T) {
        for (_, callback) in &mut self.inner.borrow_mut().subs {
            callback(value);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subs.len()
    }
}

/// RAII guard for one subscription; dropping it unsubscribes. Outliving
/// the bus is fine (the weak handle just goes dead).
pub struct Subscription<T> {
    id: u64,
    slots: Weak<RefCell<Slots<T>>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().subs.retain(|(id, _)| *id != self.id);
        }
    }
}
