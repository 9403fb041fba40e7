//! Single-select filter widget
//!
//! The first option is always "no selection" with the empty string as its
//! value. Filter views drop empty strings, so picking it clears the filter.

use dioxus::prelude::*;

#[component]
pub fn FilterSelect(
    label: String,
    /// Current raw value, `""` for no selection
    value: String,
    /// (value, label) pairs
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
    #[props(default = "All".to_string())] empty_label: String,
) -> Element {
    rsx! {
        label { class: "flex flex-col gap-1 text-xs text-gray-400",
            "{label}"
            select {
                class: "px-3 py-2 bg-gray-800 rounded-lg text-sm text-gray-200 focus:outline-none focus:ring-1 focus:ring-indigo-500/50",
                value: "{value}",
                onchange: move |e| onchange.call(e.value()),
                option { value: "", selected: value.is_empty(), "{empty_label}" }
                for (option_value , option_label) in options {
                    option {
                        key: "{option_value}",
                        selected: option_value == value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
        }
    }
}
