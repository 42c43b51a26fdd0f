//! The navigation of the header and footer.

use crate::{dropdown::MenuItem, view::View};

const SOBRE_NOSOTROS: &str = View::SobreNosotros.route_id();
const PROYECTOS: &str = View::Proyectos.route_id();
const TRANSPARENCIA: &str = View::Transparencia.route_id();
const INVOLUCRATE: &str = View::Involucrate.route_id();

/// A header dropdown: its label and items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuGroup {
    /// The label the pointer hovers.
    pub label: &'static str,
    /// The entries, in display order.
    pub items: &'static [MenuItem],
}

/// The dropdowns of the header, left to right.
pub static MENUS: [MenuGroup; 4] = [
    MenuGroup {
        label: "Sobre nosotros",
        items: &[
            MenuItem::new("Quiénes somos", SOBRE_NOSOTROS),
            MenuItem::new("Misión y valores", SOBRE_NOSOTROS),
            MenuItem::new("Nuestros objetivos", SOBRE_NOSOTROS),
            MenuItem::new("Nuestro equipo", SOBRE_NOSOTROS),
            MenuItem::new("Nuestras alianzas", SOBRE_NOSOTROS),
        ],
    },
    MenuGroup {
        label: "Proyectos",
        items: &[
            MenuItem::new("Educativos", PROYECTOS),
            MenuItem::new("Salud", PROYECTOS),
            MenuItem::new("Discapacidad", PROYECTOS),
            MenuItem::new("Equidad de género", PROYECTOS),
            MenuItem::new("Desastres y resiliencia", PROYECTOS),
            MenuItem::new("Emprendimiento", PROYECTOS),
            MenuItem::new("Cambio climático", PROYECTOS),
            MenuItem::new("Amazonía para el Futuro", PROYECTOS),
        ],
    },
    MenuGroup {
        label: "Transparencia",
        items: &[
            MenuItem::new("Rendición de cuentas", TRANSPARENCIA),
            MenuItem::new("Memoria anual", TRANSPARENCIA),
            MenuItem::new("Compliance", TRANSPARENCIA),
            MenuItem::new("Canal de denuncias", TRANSPARENCIA),
        ],
    },
    MenuGroup {
        label: "Involúcrate",
        items: &[
            MenuItem::new("Voluntariado", INVOLUCRATE),
            MenuItem::new("Padrinazgo", INVOLUCRATE),
            MenuItem::new("¿Tienes un proyecto?", INVOLUCRATE),
        ],
    },
];

/// Plain header links before the dropdowns.
pub static LEADING_LINKS: [MenuItem; 1] = [MenuItem::new("Inicio", View::Inicio.route_id())];

/// Plain header links after the dropdowns.
pub static TRAILING_LINKS: [MenuItem; 2] = [
    MenuItem::new("Dona", View::Dona.route_id()),
    MenuItem::new("Contactos", View::Contactos.route_id()),
];

/// The call to action at the right of the header.
pub static DONATE_CTA: MenuItem = MenuItem::new("Donar", View::Dona.route_id());

/// The route links of the footer.
pub static FOOTER_LINKS: [MenuItem; 1] = [MenuItem::new("Transparencia", TRANSPARENCIA)];

/// Footer links without a page of their own. Their empty target goes home.
pub static FOOTER_PLACEHOLDERS: [&str; 2] = ["Privacidad", "Términos"];

/// Every route the header and footer can lead to.
pub fn targets() -> impl Iterator<Item = &'static str> {
    MENUS
        .iter()
        .flat_map(|menu| menu.items.iter())
        .chain(LEADING_LINKS.iter())
        .chain(TRAILING_LINKS.iter())
        .chain(std::iter::once(&DONATE_CTA))
        .chain(FOOTER_LINKS.iter())
        .map(|item| item.target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_has_a_view() {
        let missing = View::registry().missing(targets());
        assert!(missing.is_empty(), "unregistered targets: {missing:?}");
    }

    #[test]
    fn item_titles_are_unique_within_a_menu() {
        for menu in MENUS {
            let mut titles: Vec<_> = menu.items.iter().map(|item| item.title).collect();
            titles.sort_unstable();
            titles.dedup();
            assert_eq!(titles.len(), menu.items.len(), "{}", menu.label);
        }
    }
}
