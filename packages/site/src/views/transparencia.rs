use dioxus::prelude::*;

use crate::components::{Actualidad, BulletList, Card, Section};

const LINK: &str = "mt-3 inline-block text-sm font-semibold text-emerald-700 hover:underline";

/// One row of the quarterly spending table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpendingReport {
    pub period: &'static str,
    pub programme: &'static str,
    pub amount_pen: &'static str,
    pub report_href: &'static str,
}

pub const SPENDING: [SpendingReport; 3] = [
    SpendingReport {
        period: "2025-Q1",
        programme: "Escuela Segura 360°",
        amount_pen: "48,500",
        report_href: "#",
    },
    SpendingReport {
        period: "2025-Q1",
        programme: "Salud Oral 60+",
        amount_pen: "27,900",
        report_href: "#",
    },
    SpendingReport {
        period: "2025-Q1",
        programme: "Resiliencia Climática",
        amount_pen: "35,200",
        report_href: "#",
    },
];

const POLICIES: &[&str] = &[
    "Política anticorrupción y conflictos de interés",
    "Protección de datos personales",
    "Salvaguardas para niñez y grupos vulnerables",
];

#[component]
pub fn Transparencia() -> Element {
    rsx! {
        Section {
            title: "Transparencia",
            subtitle: "Rendición de cuentas y cumplimiento",
            right: rsx! { Actualidad {} },
            div { class: "grid md:grid-cols-2 gap-6",
                Card {
                    h4 { class: "font-semibold", "Rendición de cuentas" }
                    p { class: "mt-2 text-sm text-slate-600",
                        "Reportes trimestrales de ejecución y resultados, indicadores clave e hitos por programa."
                    }
                    div { class: "mt-4 overflow-x-auto",
                        table { class: "w-full text-sm",
                            thead {
                                tr { class: "text-left text-slate-500",
                                    th { class: "py-2 pr-4", "Fecha" }
                                    th { class: "py-2 pr-4", "Programa" }
                                    th { class: "py-2 pr-4", "Gasto (PEN)" }
                                    th { class: "py-2", "Informe" }
                                }
                            }
                            tbody {
                                for row in SPENDING {
                                    tr { key: "{row.period}-{row.programme}", class: "border-t",
                                        td { class: "py-2 pr-4", "{row.period}" }
                                        td { class: "py-2 pr-4", "{row.programme}" }
                                        td { class: "py-2 pr-4", "{row.amount_pen}" }
                                        td { class: "py-2",
                                            a { class: "text-emerald-700 hover:underline", href: row.report_href, "PDF" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Card {
                    h4 { class: "font-semibold", "Memoria anual" }
                    p { class: "mt-2 text-sm text-slate-600",
                        "Síntesis de impacto, aprendizajes y proyección. Publicamos indicadores, auditorías y testimonios."
                    }
                    a { class: LINK, href: "#", "Descargar Memoria 2024 →" }
                }
                Card {
                    h4 { class: "font-semibold", "Compliance" }
                    BulletList { items: POLICIES }
                    a { class: LINK, href: "#", "Ver políticas →" }
                }
                Card {
                    h4 { class: "font-semibold", "Canal de denuncias" }
                    p { class: "mt-2 text-sm text-slate-600",
                        "Mecanismo confidencial para reportar incumplimientos éticos o de seguridad."
                    }
                    // not wired to any backend
                    form { class: "mt-3 grid grid-cols-1 gap-3",
                        input { class: "rounded-xl border px-3 py-2", placeholder: "Correo (opcional)" }
                        textarea { class: "rounded-xl border px-3 py-2 min-h-[120px]", placeholder: "Describe el hecho" }
                        label { class: "text-xs text-slate-500 inline-flex items-center gap-2",
                            input { r#type: "checkbox" }
                            "Mantener anonimato"
                        }
                        button {
                            r#type: "button",
                            class: "rounded-xl px-4 py-2 bg-emerald-600 text-white text-sm font-semibold hover:bg-emerald-700",
                            "Enviar"
                        }
                        p { class: "text-xs text-slate-500",
                            "*Este formulario puede integrarse con Formspree/Resend/Sendgrid o bandeja dedicada."
                        }
                    }
                }
            }
        }
    }
}
