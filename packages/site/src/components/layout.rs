use dioxus::prelude::*;

/// A page section: a title column and a sticky aside on large screens.
#[component]
pub fn Section(
    #[props(into)] title: String,
    #[props(into)] subtitle: Option<String>,
    /// Rendered in the aside, usually [`Actualidad`](super::Actualidad).
    right: Element,
    children: Element,
) -> Element {
    rsx! {
        section { class: "py-14 lg:py-20",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid lg:grid-cols-[1fr_320px] gap-10 items-start",
                div {
                    h2 { class: "text-3xl font-bold tracking-tight text-slate-900", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "mt-2 text-slate-600", "{subtitle}" }
                    }
                    div { class: "mt-8", {children} }
                }
                aside { class: "lg:sticky lg:top-20 space-y-4", {right} }
            }
        }
    }
}

#[component]
pub fn Card(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "rounded-2xl border bg-white shadow-sm p-6 {class}", {children} }
    }
}

#[component]
pub fn Pill(children: Element) -> Element {
    rsx! {
        span { class: "inline-flex items-center px-2 py-1 text-xs font-semibold rounded-full bg-emerald-50 text-emerald-700",
            {children}
        }
    }
}

/// A small bulleted list of static lines.
#[component]
pub fn BulletList(items: &'static [&'static str]) -> Element {
    rsx! {
        ul { class: "mt-2 text-sm list-disc pl-5 space-y-1 text-slate-600",
            for item in items.iter() {
                li { key: "{item}", "{item}" }
            }
        }
    }
}
