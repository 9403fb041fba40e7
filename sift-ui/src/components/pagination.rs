//! Previous/next pager for filtered tables

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Number of pages needed for `total` rows, never less than 1
pub fn page_count(total: usize, limit_per_page: u32) -> i64 {
    let limit = limit_per_page.max(1) as usize;
    total.div_ceil(limit).max(1) as i64
}

#[component]
pub fn Pagination(page: i64, total_pages: i64, on_page_change: EventHandler<i64>) -> Element {
    let has_prev = page > 1;
    let has_next = page < total_pages;

    rsx! {
        div { class: "flex items-center justify-between gap-4 py-3 text-sm text-gray-400",
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: !has_prev,
                onclick: move |_| on_page_change.call(page - 1),
                "Previous"
            }
            span { "Page {page} of {total_pages}" }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: !has_next,
                onclick: move |_| on_page_change.call(page + 1),
                "Next"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(57, 10), 6);
        assert_eq!(page_count(5, 0), 5);
    }
}
