//! Edit notification: [`Signal`] and [`Watcher`].
//!
//! Shared tables and bitmap slots each embed a [`Signal`]. A compositor that
//! caches derived data calls [`Signal::watch`] and polls the returned
//! [`Watcher`] once per frame; any write in between raises it. Dropping the
//! watcher cancels the subscription, so a compositor and its sources may be
//! torn down in either order.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

// ---------------------------------------------------------------------------
// Signal
// ---------------------------------------------------------------------------

/// Notification source embedded in a mutable shared resource.
#[derive(Debug, Default)]
pub struct Signal {
    watchers: RefCell<Vec<Weak<Cell<bool>>>>,
}

impl Signal {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe. The returned handle stays raised from the next
    /// [`notify`](Signal::notify) until it is [taken](Watcher::take).
    pub fn watch(&self) -> Watcher {
        let raised = Rc::new(Cell::new(false));
        self.watchers.borrow_mut().push(Rc::downgrade(&raised));
        Watcher { raised }
    }

    /// Raise every live watcher. Dead subscriptions are pruned here.
    pub fn notify(&self) {
        self.watchers.borrow_mut().retain(|w| match w.upgrade() {
            Some(flag) => {
                flag.set(true);
                true
            }
            None => false,
        });
    }
}

// ---------------------------------------------------------------------------
// Watcher
// ---------------------------------------------------------------------------

/// Subscription handle returned by [`Signal::watch`]. Dropping it ends the
/// subscription.
#[derive(Debug)]
pub struct Watcher {
    raised: Rc<Cell<bool>>,
}

impl Watcher {
    /// Whether a notification arrived since the last take.
    #[inline]
    pub fn is_raised(&self) -> bool {
        self.raised.get()
    }

    /// Consume the raised state, returning whether it was set.
    #[inline]
    pub fn take(&self) -> bool {
        self.raised.replace(false)
    }
}
