use std::rc::Rc;

use dioxus::{logger::tracing, prelude::*};
use kallari_router::{
    history::{use_history_provider, HistoryHandle},
    hooks::use_hash_route,
    RouterConfig,
};

use crate::{
    components::{Footer, Header},
    view::{View, ViewOutlet},
};

/// The entry point: binds the site to the platform's fragment history and loads the styles.
#[component]
pub fn App() -> Element {
    use_history_provider(HistoryHandle::platform);

    rsx! {
        document::Title { "KALLARI • Asociación Civil" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        Site {}
    }
}

/// The page itself: header, the view picked by the current route, footer.
///
/// The fragment history is taken from the context, so tests can render this with a
/// [`MemoryHistory`](kallari_router::history::MemoryHistory).
#[component]
pub fn Site() -> Element {
    let route = use_hash_route(|| {
        RouterConfig::new(View::HOME).on_update(|route| {
            tracing::info!("showing #{route}");
        })
    });
    let registry = use_hook(|| Rc::new(View::registry()));
    let view = *registry.dispatch(&route.current());

    rsx! {
        div { class: "min-h-screen bg-white text-slate-800",
            Header {}
            ViewOutlet { view }
            Footer {}
        }
    }
}
