use dioxus::prelude::*;
use kallari_router::components::HashLink;

use crate::components::{Actualidad, Section};

const PRIMARY_BUTTON: &str =
    "rounded-xl px-5 py-3 bg-emerald-600 text-white font-semibold shadow hover:bg-emerald-700";
const SECONDARY_BUTTON: &str = "rounded-xl px-5 py-3 border font-semibold hover:bg-slate-50";

const STATS: [(&str, &str); 3] = [
    ("+10", "años de trabajo"),
    ("5k+", "beneficiarios/año"),
    ("15", "instituciones aliadas"),
];

const PARTNERS: [&str; 5] = [
    "APRAD",
    "Fundación Valore",
    "Priority Safety Perú",
    "CETPAR",
    "Kallari",
];

/// The landing page: hero, key figures and partners.
#[component]
pub fn Inicio() -> Element {
    rsx! {
        div {
            section { id: "inicio-hero", class: "relative overflow-hidden",
                div { class: "absolute inset-0 -z-10 bg-gradient-to-br from-emerald-50 via-white to-sky-50" }
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 lg:py-24 grid lg:grid-cols-[1fr_320px] gap-10 items-center",
                    div {
                        div { class: "flex items-center gap-3",
                            span { class: "inline-flex items-center justify-center w-12 h-12 rounded-2xl bg-emerald-600 text-white text-xl font-bold",
                                "K"
                            }
                            div {
                                p { class: "font-semibold", "KALLARI • Asociación Civil" }
                                p { class: "text-xs text-slate-500", "Fundación Valore • Perú" }
                            }
                        }
                        h1 { class: "mt-6 text-4xl sm:text-5xl font-bold tracking-tight text-slate-900",
                            "Comunidades que prosperan con educación, salud y resiliencia"
                        }
                        p { class: "mt-4 text-lg text-slate-600",
                            "Intervenimos en Arequipa y La Libertad con programas 360°: escuelas seguras, salud bucal para adultos mayores, discapacidad e inclusión, resiliencia climática y desarrollo económico local."
                        }
                        div { class: "mt-7 flex flex-wrap gap-3",
                            HashLink { to: "proyectos", class: PRIMARY_BUTTON, "Ver proyectos" }
                            HashLink { to: "involucrate", class: SECONDARY_BUTTON, "Involúcrate" }
                            HashLink { to: "dona", class: SECONDARY_BUTTON, "Dona" }
                        }
                        dl { class: "mt-10 grid grid-cols-3 gap-6",
                            for (figure, caption) in STATS {
                                div { key: "{figure}", class: "rounded-2xl border p-4 bg-white shadow-sm",
                                    dt { class: "text-2xl font-bold text-emerald-700", "{figure}" }
                                    dd { class: "text-sm text-slate-500", "{caption}" }
                                }
                            }
                        }
                    }
                    Actualidad {}
                }
            }

            Section {
                title: "Alianzas",
                subtitle: "Trabajamos en red con instituciones públicas, privadas y comunitarias.",
                right: rsx! { div {} },
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-6 items-center",
                    // logos are placeholders until the partners send artwork
                    for partner in PARTNERS {
                        div { key: "{partner}", class: "aspect-[3/1] rounded-xl border grid place-content-center bg-white",
                            span { class: "text-slate-400 text-xs", "{partner} (logo)" }
                        }
                    }
                }
            }
        }
    }
}
