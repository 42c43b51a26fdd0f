use std::rc::Rc;

use gloo::events::EventListener;
use tracing::error;
use web_sys::{window, History, Window};

use super::{FragmentHistory, HistoryError, Subscription};

/// A [`FragmentHistory`] that integrates with a browser via `location.hash` and the
/// [`hashchange`](https://developer.mozilla.org/en-US/docs/Web/API/Window/hashchange_event) event.
///
/// The browser fires `hashchange` for every change of the hash, whether it came from
/// [`set_fragment`](FragmentHistory::set_fragment), a clicked `href="#..."` anchor or the
/// back/forward buttons, so subscribers see all of them.
pub struct WebHashHistory {
    window: Window,
    history: History,
}

impl WebHashHistory {
    /// Bind to the global `window`.
    pub fn new() -> Result<Self, HistoryError> {
        let window = window().ok_or(HistoryError::MissingWindow)?;
        let history = window.history().map_err(|err| HistoryError::Host {
            operation: "window.history",
            message: format!("{err:?}"),
        })?;

        Ok(Self { window, history })
    }
}

impl FragmentHistory for WebHashHistory {
    fn current_fragment(&self) -> String {
        self.window.location().hash().unwrap_or_else(|err| {
            error!("failed to read location.hash: {err:?}");
            String::new()
        })
    }

    fn set_fragment(&self, fragment: &str) {
        if let Err(err) = self.window.location().set_hash(fragment) {
            error!("failed to set location.hash to {fragment:?}: {err:?}");
        }
    }

    fn subscribe(&self, callback: Rc<dyn Fn()>) -> Subscription {
        let listener = EventListener::new(&self.window, "hashchange", move |_| callback());
        Subscription::new(move || drop(listener))
    }

    fn go_back(&self) {
        if let Err(err) = self.history.back() {
            error!("failed to go back: {err:?}");
        }
    }

    fn go_forward(&self) {
        if let Err(err) = self.history.forward() {
            error!("failed to go forward: {err:?}");
        }
    }
}
