//! sift-ui - Dioxus bindings for URL-synchronized filter state
//!
//! `use_filter` wires the `sift-common` reducer into signals and a router
//! effect. The components are small building blocks for filter toolbars.

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::*;
