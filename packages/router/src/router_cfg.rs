use std::rc::Rc;

use crate::RouteId;

pub(crate) type RoutingCallback = Rc<dyn Fn(&RouteId)>;

/// Global configuration options for the router.
///
/// This follows the builder pattern, so you can use it like this:
/// ```rust
/// # use kallari_router::RouterConfig;
/// let cfg = RouterConfig::new("inicio").on_update(|route| println!("now at {route}"));
/// assert_eq!(cfg.home(), "inicio");
/// ```
#[derive(Clone)]
pub struct RouterConfig {
    pub(crate) home: RouteId,
    pub(crate) on_update: Option<RoutingCallback>,
}

impl RouterConfig {
    /// Create a config whose home route is `home`. An empty fragment resolves to it.
    pub fn new(home: impl Into<RouteId>) -> Self {
        Self {
            home: home.into(),
            on_update: None,
        }
    }

    /// The route used when the fragment is empty.
    pub fn home(&self) -> &RouteId {
        &self.home
    }

    /// A function to be called whenever the route changes.
    ///
    /// The callback is invoked after the current route has been updated, with the new route.
    /// It is not called for the initial route.
    ///
    /// Defaults to [`None`].
    pub fn on_update(self, callback: impl Fn(&RouteId) + 'static) -> Self {
        Self {
            on_update: Some(Rc::new(callback)),
            ..self
        }
    }
}

impl std::fmt::Debug for RouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterConfig")
            .field("home", &self.home)
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}
