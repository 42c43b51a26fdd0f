use dioxus::prelude::*;
use kallari_router::components::HashLink;

use crate::components::{Actualidad, Card, Section};

const WAYS_TO_HELP: [(&str, &str); 3] = [
    ("Voluntariado", "Participa en campañas, formación y operaciones de campo."),
    ("Padrinazgo", "Apoya equipamiento, prótesis y materiales educativos."),
    ("¿Tienes un proyecto?", "Propón alianzas y pilotos en tu comunidad."),
];

const CAMPAIGNS: [&str; 2] = [
    "Caylloma • Jornada Salud Oral — 12/10",
    "La Esperanza • Escuela Segura — 20/10",
];

#[component]
pub fn Involucrate() -> Element {
    rsx! {
        Section {
            title: "Involúcrate",
            subtitle: "Tu apoyo multiplica el impacto",
            right: rsx! { Actualidad {} },
            div { class: "grid md:grid-cols-3 gap-6",
                for (title, description) in WAYS_TO_HELP {
                    Card { key: "{title}",
                        h4 { class: "font-semibold", "{title}" }
                        p { class: "mt-2 text-sm text-slate-600", "{description}" }
                        HashLink {
                            to: "contactos",
                            class: "mt-3 inline-block text-sm font-semibold text-emerald-700 hover:underline",
                            "Contactar →"
                        }
                    }
                }
            }
            Card { class: "mt-6",
                h4 { class: "font-semibold", "Calendario de campañas" }
                p { class: "mt-2 text-sm text-slate-600",
                    "Publicaremos aquí fechas de brigadas, capacitaciones y colectas."
                }
                div { class: "mt-3 grid sm:grid-cols-2 gap-3 text-sm",
                    for campaign in CAMPAIGNS {
                        div { key: "{campaign}", class: "rounded-xl border p-3", "{campaign}" }
                    }
                }
            }
        }
    }
}
