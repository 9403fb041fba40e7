//! Talent table driven by URL-synced filter state

use crate::demo_data::{self, Talent, CITIES, STATUSES};
use crate::filters::{talent_filter_options, PASSING_GRADE_RANGES};
use crate::Route;
use dioxus::prelude::*;
use sift_common::{FilterState, FilterValue};
use sift_ui::{
    page_count, use_filter, Button, ButtonSize, ButtonVariant, FilterSelect, Pagination,
    SearchInput,
};

/// Values for the `orderBy` filter. `""` keeps the configured `sort`.
const ORDERINGS: &[(&str, &str)] = &[("name", "Name"), ("-grade", "Highest grade")];

fn select_options(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

fn to_json(state: &FilterState) -> String {
    serde_json::to_string_pretty(state).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

#[component]
pub fn Talents(query: String) -> Element {
    let filter = use_filter(talent_filter_options(), &query, |query| Route::Talents {
        query,
    });

    let result = demo_data::query_talents(&filter.filter_state);
    let total_pages = page_count(result.total, result.limit);
    let page = filter.page();

    let update = filter.update_filter_change;
    let set = move |name: &'static str| {
        move |value: String| update.call((name.to_string(), FilterValue::from(value)))
    };

    let verified = filter.raw_filter_state.get("verified") == Some(&FilterValue::Bool(true));

    rsx! {
        div { class: "max-w-6xl mx-auto p-6 space-y-4",
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold", "Talents" }
                if filter.is_search_and_filter_active {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: filter.reset_filter_click,
                        "Reset filters"
                    }
                }
            }

            SearchInput {
                value: filter.raw_str("title"),
                on_search: set("title"),
                placeholder: "Search by name",
            }

            div { class: "flex flex-wrap items-end gap-4",
                FilterSelect {
                    label: "Status",
                    value: filter.raw_str("status"),
                    options: select_options(STATUSES),
                    onchange: set("status"),
                }
                FilterSelect {
                    label: "City",
                    value: filter.raw_str("city"),
                    options: CITIES.iter().map(|c| (c.to_string(), c.to_string())).collect::<Vec<_>>(),
                    onchange: set("city"),
                }
                FilterSelect {
                    label: "Passing grade",
                    value: filter.raw_str("passingGrade"),
                    options: select_options(PASSING_GRADE_RANGES),
                    onchange: set("passingGrade"),
                    empty_label: "Any",
                }
                FilterSelect {
                    label: "Sort",
                    value: filter.raw_str("orderBy"),
                    options: select_options(ORDERINGS),
                    onchange: set("orderBy"),
                    empty_label: "Newest",
                }
                label { class: "flex items-center gap-2 text-sm text-gray-300",
                    input {
                        r#type: "checkbox",
                        checked: verified,
                        onchange: move |e| {
                            let value = if e.checked() { "true" } else { "" };
                            update.call(("verified".to_string(), value.into()));
                        },
                    }
                    "Verified only"
                }
                if filter.is_filter_active {
                    span { class: "text-xs text-indigo-400", "Filters applied" }
                }
            }

            TalentTable { rows: result.rows, total: result.total }

            Pagination {
                page,
                total_pages,
                on_page_change: move |page: i64| update.call(("page".to_string(), page.into())),
            }

            div { class: "grid grid-cols-2 gap-4 text-xs",
                div {
                    h2 { class: "text-gray-400 mb-1", "Query (formatted)" }
                    pre { class: "state-dump p-3 rounded bg-gray-800", "{to_json(&filter.filter_state)}" }
                }
                div {
                    h2 { class: "text-gray-400 mb-1", "URL (raw)" }
                    pre { class: "state-dump p-3 rounded bg-gray-800", "{to_json(&filter.raw_filter_state)}" }
                }
            }
        }
    }
}

#[component]
fn TalentTable(rows: Vec<Talent>, total: usize) -> Element {
    if rows.is_empty() {
        return rsx! {
            div { class: "py-12 text-center text-gray-400", "No talents match these filters" }
        };
    }

    rsx! {
        table { class: "w-full text-sm",
            thead {
                tr { class: "text-left text-gray-400 border-b border-gray-700",
                    th { class: "py-2", "Name" }
                    th { "City" }
                    th { "Status" }
                    th { "Grade" }
                    th { "Verified" }
                }
            }
            tbody {
                for talent in rows {
                    tr { key: "{talent.id}", class: "border-b border-gray-800",
                        td { class: "py-2", "{talent.name}" }
                        td { "{talent.city}" }
                        td { "{talent.status}" }
                        td { "{talent.grade}" }
                        td { if talent.verified { "Yes" } else { "No" } }
                    }
                }
            }
        }
        div { class: "text-xs text-gray-500", "{total} matching talents" }
    }
}
