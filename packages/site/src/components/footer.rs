use chrono::Datelike;
use dioxus::prelude::*;
use kallari_router::components::HashLink;

use crate::nav::{FOOTER_LINKS, FOOTER_PLACEHOLDERS};

const FOOTER_LINK: &str = "hover:text-emerald-700";

#[component]
pub fn Footer() -> Element {
    let year = use_hook(|| chrono::Local::now().year());

    rsx! {
        footer { class: "py-10 border-t",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-4",
                p { class: "text-sm text-slate-500", "© {year} KALLARI — Asociación Civil" }
                div { class: "flex items-center gap-4 text-sm",
                    for link in FOOTER_LINKS.iter() {
                        HashLink { key: "{link.title}", to: link.target, class: FOOTER_LINK, "{link.title}" }
                    }
                    for title in FOOTER_PLACEHOLDERS {
                        HashLink { key: "{title}", to: "", class: FOOTER_LINK, "{title}" }
                    }
                }
            }
        }
    }
}
