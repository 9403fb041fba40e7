//! sift web demo
//!
//! A talent table whose search, filters and page live in the URL. Reload or
//! share the address and the table comes back in the same state.

pub mod demo_data;
pub mod filters;
pub mod pages;

use dioxus::prelude::*;
use pages::{Home, Talents};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/talents?:..query")]
    Talents { query: String },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
