use dioxus::prelude::*;
use kallari_router::components::HashLink;

use crate::components::{Actualidad, Card, Pill, Section};

/// A programme line: name and one-line summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Programme {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const PROGRAMMES: [Programme; 8] = [
    Programme {
        name: "Proyectos Educativos",
        summary: "SG-SST escolar (Ley 29783), patrullas, materiales pedagógicos, simulacros y formación docente.",
    },
    Programme {
        name: "Proyectos de Salud",
        summary: "Salud Oral 60+: prevención, prótesis, campañas y atención domiciliaria en zonas rurales y urbanas.",
    },
    Programme {
        name: "Discapacidad",
        summary: "Centro de Desarrollo Inclusivo y talleres productivos: joyería, panadería, carpintería, metalmecánica.",
    },
    Programme {
        name: "Equidad e Igualdad de Género",
        summary: "Prevención de violencia y acoso laboral/sexual, enfoque de género en escuelas y comunidades.",
    },
    Programme {
        name: "Desastres y Resiliencia",
        summary: "Sistemas comunitarios de alerta temprana, gestión de riesgo y anticipación.",
    },
    Programme {
        name: "Empoderamiento y Emprendimiento",
        summary: "Cadenas de valor local y “Gema Solidaria” para turismo responsable.",
    },
    Programme {
        name: "Cambio Climático",
        summary: "Gestión inteligente del agua/sequías, capacitación en datos y sensores.",
    },
    Programme {
        name: "Amazonía para el Futuro",
        summary: "Educación ambiental, vigilancia comunitaria y economía sostenible con identidad local.",
    },
];

#[component]
pub fn Proyectos() -> Element {
    rsx! {
        Section {
            title: "Proyectos",
            subtitle: "Líneas programáticas y carteras activas",
            right: rsx! { Actualidad {} },
            div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                for programme in PROGRAMMES {
                    Card { key: "{programme.name}",
                        Pill { "Programa" }
                        h3 { class: "mt-3 text-lg font-semibold", "{programme.name}" }
                        p { class: "mt-2 text-sm text-slate-600", "{programme.summary}" }
                        HashLink {
                            to: "contactos",
                            class: "mt-4 inline-block text-sm font-semibold text-emerald-700 hover:underline",
                            "Quiero saber más →"
                        }
                    }
                }
            }
        }
    }
}
