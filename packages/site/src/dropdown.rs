//! Hover menus of the header.

use dioxus::prelude::*;
use kallari_router::components::HashLink;

/// A label and the route it leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// What the user reads.
    pub title: &'static str,
    /// The route id the item links to.
    pub target: &'static str,
}

impl MenuItem {
    /// Create a menu item.
    pub const fn new(title: &'static str, target: &'static str) -> Self {
        Self { title, target }
    }
}

/// Whether a menu shows its items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    /// Only the label is shown.
    #[default]
    Closed,
    /// The item list is shown below the label.
    Open,
}

/// What the pointer did to a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The pointer moved onto the label.
    PointerEnter,
    /// The pointer left the menu, label and item list included.
    PointerLeave,
    /// The label was clicked.
    Click,
}

impl DropdownState {
    /// The state after `event`.
    ///
    /// ```rust
    /// # use kallari_site::dropdown::{DropdownEvent::*, DropdownState::*};
    /// assert_eq!(Closed.next(PointerEnter), Open);
    /// assert_eq!(Open.next(Click), Closed);
    /// assert_eq!(Closed.next(PointerLeave), Closed);
    /// ```
    pub const fn next(self, event: DropdownEvent) -> Self {
        match (self, event) {
            (_, DropdownEvent::PointerEnter) => DropdownState::Open,
            (_, DropdownEvent::PointerLeave) => DropdownState::Closed,
            (DropdownState::Closed, DropdownEvent::Click) => DropdownState::Open,
            (DropdownState::Open, DropdownEvent::Click) => DropdownState::Closed,
        }
    }

    /// Whether the items are visible.
    pub const fn is_open(self) -> bool {
        matches!(self, DropdownState::Open)
    }
}

/// A header menu that opens on hover or click and closes when the pointer leaves it.
///
/// Every instance owns its own [`DropdownState`], starting at `initial` (closed by default).
#[component]
pub fn Menu(
    label: &'static str,
    items: &'static [MenuItem],
    #[props(default)] initial: DropdownState,
) -> Element {
    let mut state = use_signal(move || initial);

    rsx! {
        div {
            class: "relative",
            onmouseleave: move |_| state.set(state().next(DropdownEvent::PointerLeave)),
            button {
                class: "hover:text-emerald-700 font-medium",
                onmouseenter: move |_| state.set(state().next(DropdownEvent::PointerEnter)),
                onclick: move |_| state.set(state().next(DropdownEvent::Click)),
                "{label}"
            }
            if state().is_open() {
                div { class: "absolute mt-2 w-64 rounded-2xl border bg-white shadow-lg p-2 z-50",
                    for item in items.iter() {
                        HashLink {
                            key: "{item.title}",
                            to: item.target,
                            class: "block px-3 py-2 rounded-xl hover:bg-slate-50 text-sm",
                            "{item.title}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DropdownEvent::*, DropdownState, DropdownState::*};

    #[test]
    fn starts_closed() {
        assert_eq!(DropdownState::default(), Closed);
        assert!(!DropdownState::default().is_open());
    }

    #[test]
    fn hover_opens_and_leave_closes() {
        let state = Closed.next(PointerEnter);
        assert_eq!(state, Open);
        assert_eq!(state.next(PointerLeave), Closed);
    }

    #[test]
    fn click_toggles() {
        let state = Closed.next(Click);
        assert_eq!(state, Open);
        assert_eq!(state.next(Click), Closed);
    }

    #[test]
    fn leave_always_closes_and_enter_always_opens() {
        for state in [Closed, Open] {
            assert_eq!(state.next(PointerLeave), Closed);
            assert_eq!(state.next(PointerEnter), Open);
        }
    }

    #[test]
    fn hover_then_click_closes() {
        // entering opens, so the click that usually follows a hover closes the menu again
        assert_eq!(Closed.next(PointerEnter).next(Click), Closed);
    }

    #[test]
    fn instances_are_independent() {
        let mut about = DropdownState::default();
        let mut projects = DropdownState::default();

        about = about.next(PointerEnter);
        projects = projects.next(Click);
        assert_eq!((about, projects), (Open, Open));

        about = about.next(PointerLeave);
        assert_eq!((about, projects), (Closed, Open));

        projects = projects.next(Click);
        about = about.next(Click);
        assert_eq!((about, projects), (Open, Closed));
    }
}
