use dioxus::prelude::*;
use kallari_router::components::HashLink;

use crate::components::{Actualidad, Card, Section};

#[component]
pub fn Dona() -> Element {
    rsx! {
        Section {
            title: "Dona",
            subtitle: "Transparencia y trazabilidad de aportes",
            right: rsx! { Actualidad {} },
            Card {
                ul { class: "text-sm space-y-2",
                    li { "• Cuenta para donaciones nacionales (placeholder)" }
                    li { "• Donaciones internacionales (SWIFT/IBAN) (placeholder)" }
                    li { "• Recibos y beneficios tributarios (si aplica)" }
                }
                div { class: "mt-6 grid sm:grid-cols-2 gap-4",
                    div { class: "rounded-2xl border p-4",
                        h5 { class: "font-semibold", "Aportes únicos" }
                        p { class: "text-sm text-slate-600 mt-1", "Campañas específicas o aporte general." }
                        HashLink {
                            to: "contactos",
                            class: "mt-3 inline-block rounded-xl bg-emerald-600 text-white font-semibold px-5 py-3 shadow hover:bg-emerald-700",
                            "Quiero donar"
                        }
                    }
                    div { class: "rounded-2xl border p-4",
                        h5 { class: "font-semibold", "Donante recurrente" }
                        p { class: "text-sm text-slate-600 mt-1", "Aportes mensuales con reporte trimestral." }
                        HashLink {
                            to: "transparencia",
                            class: "mt-3 inline-block rounded-xl border font-semibold px-5 py-3 hover:bg-slate-50",
                            "Ver transparencia"
                        }
                    }
                }
            }
        }
    }
}
