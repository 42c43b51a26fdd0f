use dioxus::prelude::*;
use kallari_router::components::HashLink;

use super::Card;

/// Blog posts in the news sidebar. There is no blog page yet, so `#blog` renders the home page.
const BLOG_POSTS: [&str; 2] = [
    "5 acciones de resiliencia climática en Caylloma →",
    "Salud Oral 60+: prótesis y prevención →",
];

const PRESS: [&str; 2] = ["Nota: Alianza con UGEL Caylloma", "Reporte trimestral de impacto"];

/// The "ACTUALIDAD" news sidebar shown next to every page.
#[component]
pub fn Actualidad() -> Element {
    rsx! {
        div { class: "space-y-4",
            Card {
                h3 { class: "font-semibold", "ACTUALIDAD" }
                p { class: "mt-1 text-sm text-slate-600", "Novedades, convocatorias y publicaciones." }
            }
            Card {
                h4 { class: "font-semibold", "Blog" }
                ul { class: "mt-2 text-sm space-y-2",
                    for post in BLOG_POSTS {
                        li { key: "{post}",
                            HashLink { to: "blog", class: "hover:underline", "{post}" }
                        }
                    }
                }
            }
            Card {
                h4 { class: "font-semibold", "Sala de prensa" }
                ul { class: "mt-2 text-sm space-y-2",
                    for note in PRESS {
                        li { key: "{note}", "{note}" }
                    }
                }
            }
            Card {
                h4 { class: "font-semibold", "Podcast y videos" }
                p { class: "mt-2 text-sm text-slate-600",
                    "Historias de comunidad y episodios de seguridad escolar."
                }
            }
            Card {
                h4 { class: "font-semibold", "Revista" }
                p { class: "mt-2 text-sm", "Próxima edición: \"Escuela Segura 360°\"" }
            }
        }
    }
}
