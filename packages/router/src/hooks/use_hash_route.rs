use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    sync::Arc,
};

use dioxus::{core::schedule_update, prelude::*};

use crate::{history::history, RouteId, RouteState, RouterConfig};

type Updater = Arc<dyn Fn() + Send + Sync>;

/// Components to re-render after a route change. Entries die with the component that holds them.
#[derive(Default)]
struct Subscribers(RefCell<Vec<Weak<Updater>>>);

impl Subscribers {
    fn subscribe(&self, update: Updater) -> Rc<Updater> {
        let update = Rc::new(update);
        self.0.borrow_mut().push(Rc::downgrade(&update));
        update
    }

    fn update(&self) {
        let mut live = Vec::new();
        self.0.borrow_mut().retain(|s| match s.upgrade() {
            Some(update) => {
                live.push(update);
                true
            }
            None => false,
        });

        for update in live {
            update();
        }
    }

    fn len(&self) -> usize {
        self.0.borrow().iter().filter(|s| s.strong_count() > 0).count()
    }
}

/// A shared handle to the [`RouteState`] of the nearest hash router.
///
/// Two handles are equal when they share the same state.
#[derive(Clone)]
pub struct RouteHandle {
    state: Rc<RouteState>,
    subscribers: Rc<Subscribers>,
}

impl RouteHandle {
    /// The active route.
    pub fn current(&self) -> RouteId {
        self.state.current()
    }

    /// Change the fragment to `id`. See [`RouteState::navigate`].
    pub fn navigate(&self, id: impl Into<RouteId>) {
        self.state.navigate(id)
    }
}

impl PartialEq for RouteHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl std::fmt::Debug for RouteHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteHandle")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// A hook that follows the navigational fragment and re-renders the calling component whenever
/// the route changes.
///
/// The [`FragmentHistory`](crate::history::FragmentHistory) comes from the context (see
/// [`use_history_provider`](crate::history::use_history_provider)); without one the platform
/// default is used. The returned [`RouteHandle`] is also provided to descendants, who can read it
/// with [`use_route_handle`].
///
/// The subscription to the history ends when the calling component is dropped.
///
/// ```rust
/// # use dioxus::prelude::*;
/// # use kallari_router::{components::HashLink, hooks::use_hash_route, RouterConfig};
/// fn App() -> Element {
///     let route = use_hash_route(|| RouterConfig::new("inicio"));
///     let current = route.current();
///
///     rsx! {
///         p { "Current page: {current}" }
///         HashLink { to: "dona", "Dona" }
///     }
/// }
///
/// # let mut vdom = VirtualDom::new(App);
/// # vdom.rebuild_in_place();
/// ```
pub fn use_hash_route(config: impl FnOnce() -> RouterConfig) -> RouteHandle {
    let (handle, _update) = use_hook(|| {
        let subscribers = Rc::new(Subscribers::default());
        let update = subscribers.subscribe(schedule_update());

        let config = config();
        let user_update = config.on_update.clone();
        let notify = Rc::downgrade(&subscribers);
        let config = RouterConfig {
            on_update: Some(Rc::new(move |route: &RouteId| {
                if let Some(user_update) = &user_update {
                    user_update(route);
                }
                if let Some(subscribers) = notify.upgrade() {
                    subscribers.update();
                }
            })),
            ..config
        };

        let handle = RouteHandle {
            state: Rc::new(RouteState::new(history().history(), config)),
            subscribers,
        };
        (handle, update)
    });

    use_context_provider(|| handle.clone())
}

/// The [`RouteHandle`] of the nearest [`use_hash_route`] above the calling component.
///
/// The calling component re-renders on every route change until it is dropped.
///
/// # Panics
/// When no ancestor called [`use_hash_route`].
pub fn use_route_handle() -> RouteHandle {
    let handle = use_context::<RouteHandle>();
    use_hook(|| handle.subscribers.subscribe(schedule_update()));
    handle
}
