use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::{
    history::{FragmentHistory, Subscription},
    resolve, RouteId, RouterConfig,
};

struct Inner {
    history: Rc<dyn FragmentHistory>,
    config: RouterConfig,
    current: RefCell<RouteId>,
}

impl Inner {
    fn sync(&self) {
        let next = resolve(&self.history.current_fragment(), &self.config.home);
        if *self.current.borrow() == next {
            return;
        }

        debug!("route changed: {} -> {next}", self.current.borrow());
        self.current.replace(next.clone());
        if let Some(on_update) = &self.config.on_update {
            on_update(&next);
        }
    }
}

/// The current [`RouteId`], kept in sync with a [`FragmentHistory`].
///
/// The route is read from the history when the state is created and again after every change
/// notification the history sends, until the state is dropped.
///
/// ```rust
/// # use std::rc::Rc;
/// # use kallari_router::prelude::*;
/// let history = Rc::new(MemoryHistory::default());
/// let state = RouteState::new(history.clone(), RouterConfig::new("inicio"));
///
/// // the empty fragment resolves to the home route
/// assert_eq!(state.current(), "inicio");
///
/// // navigating only writes the fragment...
/// state.navigate("dona");
/// assert_eq!(history.current_fragment(), "dona");
/// assert_eq!(state.current(), "inicio");
///
/// // ...the route follows once the history reports the change
/// history.flush();
/// assert_eq!(state.current(), "dona");
/// ```
pub struct RouteState {
    inner: Rc<Inner>,
    _subscription: Subscription,
}

impl RouteState {
    /// Read the initial route from `history` and subscribe to its changes.
    pub fn new(history: Rc<dyn FragmentHistory>, config: RouterConfig) -> Self {
        let current = resolve(&history.current_fragment(), &config.home);
        debug!("initial route: {current}");

        let inner = Rc::new(Inner {
            history,
            config,
            current: RefCell::new(current),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let subscription = inner.history.subscribe(Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.sync();
            }
        }));

        Self {
            inner,
            _subscription: subscription,
        }
    }

    /// The active route. Never empty unless the home route itself is empty.
    pub fn current(&self) -> RouteId {
        self.inner.current.borrow().clone()
    }

    /// The route an empty fragment resolves to.
    pub fn home(&self) -> &RouteId {
        &self.inner.config.home
    }

    /// Change the navigational fragment to `id`.
    ///
    /// The id is not validated, and [`RouteState::current`] does not change here. The new route
    /// is picked up when the history reports the change.
    pub fn navigate(&self, id: impl Into<RouteId>) {
        let id = id.into();
        debug!("navigating to #{id}");
        self.inner.history.set_fragment(id.as_str());
    }

    /// Go back in the history. The route follows on the next change notification.
    pub fn go_back(&self) {
        self.inner.history.go_back();
    }

    /// Go forward in the history. The route follows on the next change notification.
    pub fn go_forward(&self) {
        self.inner.history.go_forward();
    }
}

impl std::fmt::Debug for RouteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteState")
            .field("current", &*self.inner.current.borrow())
            .field("config", &self.inner.config)
            .finish()
    }
}
