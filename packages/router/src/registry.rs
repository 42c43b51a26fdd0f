use rustc_hash::FxHashMap;
use tracing::debug;

use crate::RouteId;

/// A fixed mapping from [`RouteId`] to the view rendered for it.
///
/// A registry always has a home view, so [`ViewRegistry::dispatch`] is total: any id without an
/// entry gets the home view.
///
/// ```rust
/// # use kallari_router::{RouteId, ViewRegistry};
/// let registry = ViewRegistry::builder("inicio", "home")
///     .route("dona", "donate")
///     .build();
///
/// assert_eq!(*registry.dispatch(&"dona".into()), "donate");
/// assert_eq!(*registry.dispatch(&"no-such-page".into()), "home");
/// ```
#[derive(Clone, Debug)]
pub struct ViewRegistry<V> {
    home: RouteId,
    views: FxHashMap<RouteId, V>,
}

impl<V> ViewRegistry<V> {
    /// Start a registry whose home route `home` renders `view`.
    pub fn builder(home: impl Into<RouteId>, view: V) -> ViewRegistryBuilder<V> {
        let home = home.into();
        let mut views = FxHashMap::default();
        views.insert(home.clone(), view);
        ViewRegistryBuilder {
            registry: Self { home, views },
        }
    }

    /// The view registered for `id`, or the home view if there is none.
    pub fn dispatch(&self, id: &RouteId) -> &V {
        match self.views.get(id) {
            Some(view) => view,
            None => {
                debug!("no view for route {id:?}, rendering {}", self.home);
                self.home_view()
            }
        }
    }

    /// The view registered for exactly `id`.
    pub fn get(&self, id: &str) -> Option<&V> {
        self.views.get(id)
    }

    /// Whether `id` has its own view.
    pub fn contains(&self, id: &str) -> bool {
        self.views.contains_key(id)
    }

    /// The home route.
    pub fn home(&self) -> &RouteId {
        &self.home
    }

    /// The view rendered for the home route and for every unknown route.
    pub fn home_view(&self) -> &V {
        // the builder inserts the home entry and nothing ever removes it
        &self.views[self.home.as_str()]
    }

    /// The number of registered routes, home included.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// A registry is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The `targets` that have no view of their own, in the order given.
    ///
    /// Navigation links should only point at registered routes; this is how to check that.
    pub fn missing<'a>(&self, targets: impl IntoIterator<Item = &'a str>) -> Vec<RouteId> {
        targets
            .into_iter()
            .filter(|target| !self.contains(target))
            .map(RouteId::from)
            .collect()
    }
}

/// Builds a [`ViewRegistry`]. Created by [`ViewRegistry::builder`].
#[derive(Debug)]
pub struct ViewRegistryBuilder<V> {
    registry: ViewRegistry<V>,
}

impl<V> ViewRegistryBuilder<V> {
    /// Register `view` for `id`. Registering the same id twice keeps the last view.
    pub fn route(mut self, id: impl Into<RouteId>, view: V) -> Self {
        self.registry.views.insert(id.into(), view);
        self
    }

    /// Finish the registry.
    pub fn build(self) -> ViewRegistry<V> {
        self.registry
    }
}
