use std::{cell::RefCell, rc::Rc};

use slab::Slab;
use tracing::trace;

use super::{FragmentHistory, Subscription};

/// When a [`MemoryHistory`] tells its subscribers about a change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delivery {
    /// Notifications wait until [`MemoryHistory::flush`] is called.
    ///
    /// This mirrors a browser, where `hashchange` fires after the write has completed but not
    /// during the call that wrote the hash.
    #[default]
    Queued,
    /// Notifications are delivered right after the change, before the writing call returns.
    Immediate,
}

struct MemoryHistoryState {
    current: String,
    history: Vec<String>,
    future: Vec<String>,
    pending: usize,
}

type Listeners = Rc<RefCell<Slab<Rc<dyn Fn()>>>>;

/// A [`FragmentHistory`] that stores the fragment and its back/forward stacks in memory.
pub struct MemoryHistory {
    state: RefCell<MemoryHistoryState>,
    listeners: Listeners,
    delivery: Delivery,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_initial_fragment("")
    }
}

impl MemoryHistory {
    /// Create a [`MemoryHistory`] whose fragment starts as `fragment`.
    ///
    /// ```rust
    /// # use kallari_router::history::*;
    /// let history = MemoryHistory::with_initial_fragment("proyectos");
    /// assert_eq!(history.current_fragment(), "proyectos");
    /// assert_eq!(history.can_go_back(), false);
    /// ```
    pub fn with_initial_fragment(fragment: impl ToString) -> Self {
        Self {
            state: MemoryHistoryState {
                current: fragment.to_string(),
                history: Vec::new(),
                future: Vec::new(),
                pending: 0,
            }
            .into(),
            listeners: Default::default(),
            delivery: Delivery::default(),
        }
    }

    /// Choose when subscribers are notified.
    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = delivery;
        self
    }

    /// Deliver every queued change notification, in order. Returns how many were delivered.
    ///
    /// With [`Delivery::Immediate`] nothing is ever queued and this returns `0`.
    pub fn flush(&self) -> usize {
        let pending = std::mem::take(&mut self.state.borrow_mut().pending);
        for _ in 0..pending {
            self.notify();
        }
        pending
    }

    /// The number of notifications waiting for [`MemoryHistory::flush`].
    pub fn pending(&self) -> usize {
        self.state.borrow().pending
    }

    /// The number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn changed(&self) {
        match self.delivery {
            Delivery::Queued => self.state.borrow_mut().pending += 1,
            Delivery::Immediate => self.notify(),
        }
    }

    fn notify(&self) {
        // Callbacks may subscribe or unsubscribe, so never hold the borrow while calling them.
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        trace!("notifying {} fragment listeners", listeners.len());
        for listener in listeners {
            listener();
        }
    }
}

impl FragmentHistory for MemoryHistory {
    fn current_fragment(&self) -> String {
        self.state.borrow().current.clone()
    }

    fn set_fragment(&self, fragment: &str) {
        {
            let mut write = self.state.borrow_mut();
            // an unchanged fragment is not a navigation
            if write.current == fragment {
                return;
            }
            let old = std::mem::replace(&mut write.current, fragment.to_string());
            write.history.push(old);
            write.future.clear();
        }
        self.changed();
    }

    fn subscribe(&self, callback: Rc<dyn Fn()>) -> Subscription {
        let key = self.listeners.borrow_mut().insert(callback);
        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().try_remove(key);
            }
        })
    }

    fn can_go_back(&self) -> bool {
        !self.state.borrow().history.is_empty()
    }

    fn go_back(&self) {
        {
            let mut write = self.state.borrow_mut();
            let Some(last) = write.history.pop() else {
                return;
            };
            let old = std::mem::replace(&mut write.current, last);
            write.future.push(old);
        }
        self.changed();
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    fn go_forward(&self) {
        {
            let mut write = self.state.borrow_mut();
            let Some(next) = write.future.pop() else {
                return;
            };
            let old = std::mem::replace(&mut write.current, next);
            write.history.push(old);
        }
        self.changed();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter(history: &MemoryHistory) -> (Rc<Cell<usize>>, Subscription) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        let sub = history.subscribe(Rc::new(move || inner.set(inner.get() + 1)));
        (count, sub)
    }

    #[test]
    fn queued_notifications_wait_for_flush() {
        let history = MemoryHistory::default();
        let (count, _sub) = counter(&history);

        history.set_fragment("dona");
        assert_eq!(history.current_fragment(), "dona");
        assert_eq!(count.get(), 0);
        assert_eq!(history.pending(), 1);

        assert_eq!(history.flush(), 1);
        assert_eq!(count.get(), 1);
        assert_eq!(history.flush(), 0);
    }

    #[test]
    fn immediate_notifications() {
        let history = MemoryHistory::default().with_delivery(Delivery::Immediate);
        let (count, _sub) = counter(&history);

        history.set_fragment("dona");
        assert_eq!(count.get(), 1);
        assert_eq!(history.pending(), 0);
    }

    #[test]
    fn same_fragment_is_not_a_change() {
        let history = MemoryHistory::with_initial_fragment("dona");
        history.set_fragment("dona");
        assert_eq!(history.pending(), 0);
        assert!(!history.can_go_back());
    }

    #[test]
    fn back_and_forward() {
        let history = MemoryHistory::with_initial_fragment("inicio");
        history.set_fragment("proyectos");
        history.set_fragment("dona");
        assert_eq!(history.pending(), 2);

        history.go_back();
        assert_eq!(history.current_fragment(), "proyectos");
        assert!(history.can_go_forward());
        assert_eq!(history.pending(), 3);

        history.go_forward();
        assert_eq!(history.current_fragment(), "dona");
        assert!(!history.can_go_forward());
        assert_eq!(history.pending(), 4);

        history.go_back();
        history.set_fragment("contactos");
        assert_eq!(history.current_fragment(), "contactos");
        assert!(!history.can_go_forward());
        assert_eq!(history.pending(), 6);
    }

    #[test]
    fn going_nowhere_is_silent() {
        let history = MemoryHistory::default();
        history.go_back();
        history.go_forward();
        assert_eq!(history.pending(), 0);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let history = MemoryHistory::default().with_delivery(Delivery::Immediate);
        let (count, sub) = counter(&history);
        assert_eq!(history.subscriber_count(), 1);

        drop(sub);
        assert_eq!(history.subscriber_count(), 0);

        history.set_fragment("dona");
        assert_eq!(count.get(), 0);
    }
}
