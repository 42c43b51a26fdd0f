use dioxus::prelude::*;

use crate::RouteId;

/// An anchor pointing at a route through the URL fragment.
///
/// Activating it is a plain browser navigation to `#<to>`: the router sees it as a fragment
/// change, exactly like the back button. No click handler is involved.
///
/// ```rust
/// # use dioxus::prelude::*;
/// # use kallari_router::components::HashLink;
/// fn Nav() -> Element {
///     rsx! {
///         HashLink { to: "contactos", class: "hover:underline", "Contactos" }
///     }
/// }
///
/// # let mut vdom = VirtualDom::new(Nav);
/// # vdom.rebuild_in_place();
/// ```
#[component]
pub fn HashLink(
    /// The route to go to.
    #[props(into)]
    to: RouteId,

    /// Classes of the anchor.
    #[props(into)]
    class: Option<String>,

    /// The contents of the anchor.
    children: Element,
) -> Element {
    rsx! {
        a { href: to.href(), class, {children} }
    }
}
