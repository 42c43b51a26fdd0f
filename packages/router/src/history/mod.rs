//! Fragment history integration
//!
//! The router never touches the browser directly. It talks to a [`FragmentHistory`], which owns
//! the navigational fragment (the part of the URL after `#`) and tells its subscribers whenever
//! that fragment changes, no matter who changed it.
//!
//! [`MemoryHistory`] keeps everything in memory and is what tests and non-web platforms use.
//! With the `web` feature, [`WebHashHistory`] binds to `window.location.hash`.

use std::rc::Rc;

use dioxus::prelude::*;
use thiserror::Error;

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// An integration with some kind of navigational fragment.
///
/// Implementations must notify subscribers after every change of the fragment, including changes
/// they did not initiate themselves (back/forward, a clicked `href="#..."` link). Writing the
/// fragment that is already current must not produce a notification.
pub trait FragmentHistory {
    /// Get the raw current fragment. A leading `#` may or may not be present.
    ///
    /// ```rust
    /// # use kallari_router::history::{FragmentHistory, MemoryHistory};
    /// let history = MemoryHistory::with_initial_fragment("#dona");
    /// assert_eq!(history.current_fragment(), "#dona");
    /// ```
    fn current_fragment(&self) -> String;

    /// Write a new fragment.
    ///
    /// This is a side effect on the environment. Subscribers learn about the new value through the
    /// change notification, not through this call.
    fn set_fragment(&self, fragment: &str);

    /// Register `callback` to be called after every fragment change.
    ///
    /// The subscription lasts until the returned [`Subscription`] is dropped.
    fn subscribe(&self, callback: Rc<dyn Fn()>) -> Subscription;

    /// Check whether there is a previous fragment to go back to.
    ///
    /// If a [`FragmentHistory`] cannot know this, it should return [`true`].
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to the previous fragment, if there is one.
    fn go_back(&self) {}

    /// Check whether there is a future fragment to go forward to.
    ///
    /// If a [`FragmentHistory`] cannot know this, it should return [`true`].
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to the next fragment, if there is one.
    fn go_forward(&self) {}
}

/// Keeps a [`FragmentHistory::subscribe`] callback registered. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a subscription that runs `cancel` when dropped.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Errors raised while binding to a host environment.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// There is no global `window`, e.g. inside a worker.
    #[error("no global `window` is available")]
    MissingWindow,

    /// A call into the host environment threw.
    #[error("{operation} failed: {message}")]
    Host {
        /// What we tried to do.
        operation: &'static str,
        /// The stringified exception.
        message: String,
    },
}

/// A cloneable handle to a shared [`FragmentHistory`], used to inject one through the context.
///
/// Two handles are equal when they point at the same history.
#[derive(Clone)]
pub struct HistoryHandle(Rc<dyn FragmentHistory>);

impl HistoryHandle {
    /// Wrap a history.
    pub fn new(history: impl FragmentHistory + 'static) -> Self {
        Self(Rc::new(history))
    }

    /// The history best suited to the current platform.
    ///
    /// In a browser with the `web` feature this is a [`WebHashHistory`]. Everywhere else, or if the
    /// browser binding fails, it is a [`MemoryHistory`] that delivers notifications immediately.
    pub fn platform() -> Self {
        browser_history().unwrap_or_else(|| {
            Self::new(MemoryHistory::default().with_delivery(Delivery::Immediate))
        })
    }

    /// The shared history.
    pub fn history(&self) -> Rc<dyn FragmentHistory> {
        self.0.clone()
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn browser_history() -> Option<HistoryHandle> {
    match WebHashHistory::new() {
        Ok(history) => Some(HistoryHandle::new(history)),
        Err(err) => {
            tracing::warn!("falling back to an in-memory history: {err}");
            None
        }
    }
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn browser_history() -> Option<HistoryHandle> {
    None
}

impl<H: FragmentHistory + 'static> From<Rc<H>> for HistoryHandle {
    fn from(history: Rc<H>) -> Self {
        Self(history)
    }
}

impl PartialEq for HistoryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for HistoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HistoryHandle")
            .field(&self.0.current_fragment())
            .finish()
    }
}

/// Make `history` the [`FragmentHistory`] used by every router below the calling component.
pub fn use_history_provider(history: impl FnOnce() -> HistoryHandle) -> HistoryHandle {
    use_context_provider(history)
}

/// The [`FragmentHistory`] injected above the calling component, or the platform default.
pub fn history() -> HistoryHandle {
    try_consume_context::<HistoryHandle>().unwrap_or_else(HistoryHandle::platform)
}
