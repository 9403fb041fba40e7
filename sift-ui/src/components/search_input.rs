//! Search box bound to the filter's search key

use dioxus::prelude::*;

#[component]
pub fn SearchInput(
    value: String,
    on_search: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] id: Option<String>,
) -> Element {
    rsx! {
        input {
            r#type: "search",
            class: "w-full px-3 py-2 bg-gray-800/50 rounded-lg focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-300 placeholder-gray-500",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            oninput: move |e| on_search.call(e.value()),
        }
    }
}
