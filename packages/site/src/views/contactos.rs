use dioxus::prelude::*;

use crate::components::{Actualidad, Card, Section};

const MAP_IMAGE: &str = "https://images.unsplash.com/photo-1535448588105-9e5a9c4b9078?q=80&w=1200&auto=format&fit=crop";

#[component]
pub fn Contactos() -> Element {
    rsx! {
        Section {
            title: "Contactos",
            subtitle: "Estamos atentos a nuevas alianzas",
            right: rsx! { Actualidad {} },
            div { class: "grid lg:grid-cols-2 gap-6",
                Card {
                    // not wired to any backend
                    form { class: "grid grid-cols-1 gap-4",
                        input { class: "rounded-xl border px-4 py-3", placeholder: "Nombre completo" }
                        input { class: "rounded-xl border px-4 py-3", placeholder: "Correo electrónico" }
                        textarea {
                            class: "rounded-xl border px-4 py-3 min-h-[120px]",
                            placeholder: "Cuéntanos sobre tu propuesta",
                        }
                        button {
                            r#type: "button",
                            class: "rounded-xl px-5 py-3 bg-emerald-600 text-white font-semibold hover:bg-emerald-700",
                            "Enviar"
                        }
                        p { class: "text-xs text-slate-500",
                            "También disponible por WhatsApp y correo institucional (placeholders)."
                        }
                    }
                }
                Card {
                    h4 { class: "font-semibold", "Sedes y ámbito" }
                    p { class: "mt-2 text-sm text-slate-600",
                        "Arequipa (Caylloma / Colca) • La Libertad (La Esperanza)"
                    }
                    div { class: "mt-4 aspect-video rounded-2xl overflow-hidden ring-1 ring-slate-200",
                        img { alt: "Mapa", class: "w-full h-full object-cover", src: MAP_IMAGE }
                    }
                }
            }
        }
    }
}
