//! The pages of the site and the registry that maps route ids to them.

use dioxus::prelude::*;
use kallari_router::{RouteId, ViewRegistry};

use crate::views::{Contactos, Dona, Inicio, Involucrate, Proyectos, SobreNosotros, Transparencia};

/// One page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    /// The landing page with the hero section.
    Inicio,
    /// Who we are, mission, team and partners.
    SobreNosotros,
    /// Programme lines.
    Proyectos,
    /// Accountability, annual report, compliance and the whistleblower channel.
    Transparencia,
    /// Volunteering and sponsorship.
    Involucrate,
    /// How to donate.
    Dona,
    /// Contact form and locations.
    Contactos,
}

impl View {
    /// Every view, home first.
    pub const ALL: [View; 7] = [
        View::Inicio,
        View::SobreNosotros,
        View::Proyectos,
        View::Transparencia,
        View::Involucrate,
        View::Dona,
        View::Contactos,
    ];

    /// The view rendered for an empty fragment and for every unknown one.
    pub const HOME: View = View::Inicio;

    /// The fragment token that selects this view.
    pub const fn route_id(self) -> &'static str {
        match self {
            View::Inicio => "inicio",
            View::SobreNosotros => "sobre-nosotros",
            View::Proyectos => "proyectos",
            View::Transparencia => "transparencia",
            View::Involucrate => "involucrate",
            View::Dona => "dona",
            View::Contactos => "contactos",
        }
    }

    /// The registry of every view, keyed by [`View::route_id`].
    pub fn registry() -> ViewRegistry<View> {
        View::ALL
            .into_iter()
            .filter(|view| *view != View::HOME)
            .fold(
                ViewRegistry::builder(View::HOME.route_id(), View::HOME),
                |registry, view| registry.route(view.route_id(), view),
            )
            .build()
    }
}

impl From<View> for RouteId {
    fn from(view: View) -> Self {
        RouteId::from(view.route_id())
    }
}

/// Render the content block of `view`.
#[component]
pub fn ViewOutlet(view: View) -> Element {
    match view {
        View::Inicio => rsx! { Inicio {} },
        View::SobreNosotros => rsx! { SobreNosotros {} },
        View::Proyectos => rsx! { Proyectos {} },
        View::Transparencia => rsx! { Transparencia {} },
        View::Involucrate => rsx! { Involucrate {} },
        View::Dona => rsx! { Dona {} },
        View::Contactos => rsx! { Contactos {} },
    }
}
