use dioxus::prelude::*;
use kallari_router::components::HashLink;

use crate::{
    dropdown::Menu,
    nav::{DONATE_CTA, LEADING_LINKS, MENUS, TRAILING_LINKS},
};

const NAV_LINK: &str = "hover:text-emerald-700";

/// The sticky top bar: logo, navigation and the donate button.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "sticky top-0 z-40 backdrop-blur supports-[backdrop-filter]:bg-white/70 border-b",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-3 flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    span { class: "inline-flex items-center justify-center w-10 h-10 rounded-2xl bg-emerald-600 text-white font-bold",
                        "K"
                    }
                    div { class: "leading-tight",
                        p { class: "font-semibold", "KALLARI" }
                        p { class: "text-xs text-slate-500", "Asociación Civil • Perú" }
                    }
                }

                nav { class: "hidden md:flex items-center gap-6 text-sm",
                    for link in LEADING_LINKS.iter() {
                        HashLink { key: "{link.title}", to: link.target, class: NAV_LINK, "{link.title}" }
                    }
                    for menu in MENUS.iter() {
                        Menu { key: "{menu.label}", label: menu.label, items: menu.items }
                    }
                    for link in TRAILING_LINKS.iter() {
                        HashLink { key: "{link.title}", to: link.target, class: NAV_LINK, "{link.title}" }
                    }
                }

                div { class: "flex items-center gap-2",
                    HashLink {
                        to: DONATE_CTA.target,
                        class: "rounded-2xl px-4 py-2 bg-emerald-600 text-white text-sm font-semibold shadow-sm hover:bg-emerald-700",
                        "{DONATE_CTA.title}"
                    }
                }
            }
        }
    }
}
