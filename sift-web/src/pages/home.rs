//! Landing page with deep links into filtered tables

use crate::Route;
use dioxus::prelude::*;

/// (query, title, description)
const SHORTCUTS: &[(&str, &str, &str)] = &[
    ("", "All talents", "No filters, first page"),
    (
        "status=active&verified=true",
        "Verified and active",
        "Two filters restored from the URL",
    ),
    (
        "passingGrade=80-100&page=2",
        "Top grades, page 2",
        "A range filter expanded for the query, and a page offset",
    ),
    ("title=ada", "Search: ada", "Search only, no other filters"),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "max-w-3xl mx-auto p-8",
            h1 { class: "text-2xl font-bold mb-6", "sift demo" }
            div { class: "space-y-2",
                for (query , title , description) in SHORTCUTS.iter().copied() {
                    Link {
                        key: "{title}",
                        to: Route::Talents {
                            query: query.to_string(),
                        },
                        class: "block p-4 rounded-lg bg-gray-800 hover:bg-gray-700",
                        div { class: "font-medium", "{title}" }
                        div { class: "text-sm text-gray-400", "{description}" }
                    }
                }
            }
        }
    }
}
