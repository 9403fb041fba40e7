//! Filter state synced with the URL query string

use dioxus::prelude::*;
use sift_common::{FilterAction, FilterOptions, FilterReducer, FilterState, FilterValue, UrlSync};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Return type for use_filter hook
#[derive(Clone, PartialEq)]
pub struct UseFilter {
    /// Formatted view, the shape to send to data queries
    pub filter_state: FilterState,
    /// Raw view, the shape filter widgets read and the URL stores
    pub raw_filter_state: FilterState,
    pub is_search_and_filter_active: bool,
    pub is_filter_active: bool,
    pub filter_dispatch: Callback<FilterAction>,
    /// Set one filter. In table mode this also returns to page 1.
    pub update_filter_change: Callback<(String, FilterValue)>,
    /// Restore the defaults. Cancels the click's default action.
    pub reset_filter_click: Callback<MouseEvent>,
}

impl UseFilter {
    pub fn set(&self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.update_filter_change.call((name.into(), value.into()));
    }

    pub fn go_to_page(&self, page: i64) {
        self.set("page", page);
    }

    /// Current page from the raw view, 1 when missing or unparseable
    pub fn page(&self) -> i64 {
        self.raw_filter_state
            .get("page")
            .and_then(FilterValue::parse_int)
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }

    /// Raw string value of a filter, `""` when unset
    pub fn raw_str(&self, name: &str) -> String {
        self.raw_filter_state
            .get(name)
            .and_then(FilterValue::to_query_value)
            .unwrap_or_default()
    }
}

/// Hook for filter and pagination state mirrored into the URL.
///
/// `query` is read once, on the first render. Afterwards the state only
/// flows toward the URL: each distinct state replaces the current history
/// entry with `to_route(query)`.
///
/// The first write happens on mount, so an incoming URL is rewritten to its
/// canonical form (empty values dropped, defaults filled in) right away.
///
/// # Example
/// ```rust,ignore
/// #[component]
/// fn Talents(query: String) -> Element {
///     let filter = use_filter(FilterOptions::default(), &query, |query| Route::Talents { query });
///
///     rsx! {
///         SearchInput {
///             value: filter.raw_str("title"),
///             on_search: move |title: String| filter.set("title", title),
///         }
///     }
/// }
/// ```
pub fn use_filter<R>(
    options: FilterOptions,
    query: &str,
    to_route: impl Fn(String) -> R + 'static,
) -> UseFilter
where
    R: Into<NavigationTarget> + 'static,
{
    let reducer = use_hook(|| {
        if let Err(e) = options.validate() {
            warn!("Filter options failed validation: {e}");
        }
        Rc::new(FilterReducer::from_query(options, query))
    });
    let to_route = use_hook(|| Rc::new(to_route));
    let url_sync = use_hook(|| Rc::new(RefCell::new(UrlSync::new())));

    let mut state = use_signal({
        let reducer = reducer.clone();
        move || reducer.initial_state().clone()
    });

    use_effect({
        let reducer = reducer.clone();
        move || {
            let current = state.read();
            if let Some(query) = url_sync.borrow_mut().observe(&reducer, &current) {
                navigator().replace(to_route(query));
            }
        }
    });

    let filter_dispatch = use_callback({
        let reducer = reducer.clone();
        move |action: FilterAction| {
            debug!("Dispatching filter action {action:?}");
            let next = reducer.reduce(&state.peek(), &action);
            if *state.peek() != next {
                state.set(next);
            }
        }
    });

    let update_filter_change = use_callback({
        let reducer = reducer.clone();
        move |(name, value): (String, FilterValue)| {
            filter_dispatch.call(reducer.update_action(name, value));
        }
    });

    let reset_filter_click = use_callback(move |evt: MouseEvent| {
        evt.prevent_default();
        filter_dispatch.call(FilterAction::ResetFilterData);
    });

    let view = reducer.view(&state.read());

    UseFilter {
        filter_state: view.filter_state,
        raw_filter_state: view.raw_filter_state,
        is_search_and_filter_active: view.is_search_and_filter_active,
        is_filter_active: view.is_filter_active,
        filter_dispatch,
        update_filter_change,
        reset_filter_click,
    }
}
