#![doc = include_str!("../README.md")]
// cannot use forbid, because props derive macro generates #[allow(missing_docs)]
#![deny(missing_docs)]
#![allow(non_snake_case)]

mod route_id;
pub use route_id::*;

pub mod history;

mod registry;
pub use registry::*;

mod router_cfg;
pub use router_cfg::RouterConfig;

mod state;
pub use state::*;

/// Components interacting with the router.
pub mod components {
    mod link;
    pub use link::*;
}

/// Hooks binding the router to a Dioxus component tree.
pub mod hooks {
    mod use_hash_route;
    pub use use_hash_route::*;
}

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::history::*;
    pub use crate::hooks::*;
    pub use crate::registry::*;
    pub use crate::route_id::*;
    pub use crate::router_cfg::RouterConfig;
    pub use crate::state::*;
}
