use dioxus::prelude::*;

use crate::components::{Actualidad, BulletList, Card, Section};

const VALUES: &[&str] = &[
    "Promover bienestar y oportunidades para todas las personas.",
    "Trabajo colaborativo con instituciones locales.",
    "Transparencia, respeto e igualdad.",
];

const GOALS: &[&str] = &[
    "Escuelas con SG-SST y cultura de prevención 360°.",
    "Atención de salud bucal a adultos mayores vulnerables.",
    "Inclusión y empleabilidad de personas con discapacidad.",
];

#[component]
pub fn SobreNosotros() -> Element {
    rsx! {
        Section {
            title: "Sobre nosotros",
            subtitle: "Quiénes somos, misión, valores y equipo",
            right: rsx! { Actualidad {} },
            div { class: "space-y-8",
                Card {
                    h3 { class: "font-semibold", "Quiénes somos" }
                    p { class: "mt-2 text-sm text-slate-600",
                        "Somos una asociación civil sin fines de lucro que impulsa proyectos de impacto social en educación, salud, discapacidad, equidad de género y resiliencia climática con enfoque territorial (Arequipa y La Libertad)."
                    }
                }
                div { class: "grid md:grid-cols-3 gap-6",
                    Card {
                        h4 { class: "font-semibold", "Misión y valores" }
                        BulletList { items: VALUES }
                    }
                    Card {
                        h4 { class: "font-semibold", "Nuestros objetivos" }
                        BulletList { items: GOALS }
                    }
                    Card {
                        h4 { class: "font-semibold", "Nuestro equipo" }
                        p { class: "mt-2 text-sm text-slate-600",
                            "Red interdisciplinaria de educadores, profesionales de salud, ingenieros, gestores sociales y voluntariado."
                        }
                    }
                }
                Card {
                    h4 { class: "font-semibold", "Nuestras alianzas" }
                    p { class: "mt-2 text-sm text-slate-600",
                        "APRAD, Fundación Valore, Priority Safety Perú, CETPAR, UGEL Caylloma, SENAMHI, INGEMMET, entre otras."
                    }
                }
            }
        }
    }
}
