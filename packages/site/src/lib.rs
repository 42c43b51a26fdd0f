//! The KALLARI Asociación Civil website.
//!
//! The page is a header, one view picked by the URL fragment, and a footer. [`view::View`]
//! lists the views and builds the registry that maps fragments to them, [`dropdown`] holds the
//! state machine behind the header menus.

#![allow(non_snake_case)]

pub mod dropdown;
pub mod nav;
pub mod view;

mod app;
pub use app::*;

/// Building blocks shared by the views.
pub mod components {
    mod actualidad;
    pub use actualidad::*;

    mod footer;
    pub use footer::*;

    mod header;
    pub use header::*;

    mod layout;
    pub use layout::*;
}

/// One component per page of the site.
pub mod views {
    mod contactos;
    pub use contactos::*;

    mod dona;
    pub use dona::*;

    mod inicio;
    pub use inicio::*;

    mod involucrate;
    pub use involucrate::*;

    mod proyectos;
    pub use proyectos::*;

    mod sobre_nosotros;
    pub use sobre_nosotros::*;

    mod transparencia;
    pub use transparencia::*;
}
