//! Filter reducer
//!
//! Reconciles incoming changes against the current state in a fixed order:
//! special-param rules, then the reset defaults, then the explicit change,
//! then the pagination offset derived from `page`.

use crate::options::FilterOptions;
use crate::query::parse_query;
use crate::state::FilterState;
use crate::value::FilterValue;
use serde::Deserialize;
use tracing::{debug, warn};

pub const SKIP: &str = "skip";
pub const LIMIT: &str = "limit";
pub const SORT: &str = "sort";
pub const PAGE: &str = "page";

/// Keys owned by table pagination
pub const PAGINATION_KEYS: [&str; 4] = [SKIP, LIMIT, SORT, PAGE];

/// Filter state transitions
///
/// Deserializes from `{"type": "UPDATE_FILTER_DATA", "filterData": {...}}`.
/// Unrecognized types become [`FilterAction::Unknown`], which leaves the
/// state unchanged.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterAction {
    /// Reconcile a change into the current state
    UpdateFilterData {
        #[serde(rename = "filterData")]
        filter_data: FilterState,
    },
    /// Return to the construction-time defaults
    ResetFilterData,
    #[serde(other)]
    Unknown,
}

/// Pure reducer over [`FilterState`], built once per filter instance
#[derive(Debug)]
pub struct FilterReducer {
    options: FilterOptions,
    init_filter_data: FilterState,
    initial_state: FilterState,
}

impl FilterReducer {
    /// Build the reset target from `options` and reconcile the parsed URL
    /// parameters against it to get the initial state.
    pub fn new(options: FilterOptions, params: &FilterState) -> Self {
        let mut init_filter_data = options.additional_init_params.clone();

        if options.is_table {
            init_filter_data.insert(SKIP, 0);
            init_filter_data.insert(LIMIT, options.limit_per_page);
            init_filter_data.insert(SORT, options.sort.as_str());
            init_filter_data.insert(PAGE, "1");

            if !options.reset_search {
                let search = params
                    .get(&options.search_name)
                    .cloned()
                    .unwrap_or_else(|| FilterValue::from(""));
                init_filter_data.insert(options.search_name.as_str(), search);
            }
        }

        let mut reducer = Self {
            options,
            init_filter_data,
            initial_state: FilterState::new(),
        };
        reducer.initial_state = reducer.format_filter_data(reducer.init_filter_data.clone(), params);
        reducer
    }

    /// Like [`new`](Self::new), parsing `query` first. A decode error is
    /// logged and treated as empty, though lossy decoding makes it rare.
    pub fn from_query(options: FilterOptions, query: &str) -> Self {
        let params = parse_query(query).unwrap_or_else(|e| {
            warn!("Ignoring malformed filter query '{query}': {e}");
            FilterState::new()
        });
        Self::new(options, &params)
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// The reset target
    pub fn init_filter_data(&self) -> &FilterState {
        &self.init_filter_data
    }

    /// State at mount: the reset target reconciled with the URL
    pub fn initial_state(&self) -> &FilterState {
        &self.initial_state
    }

    /// Reconcile `filter_data` into `state`.
    ///
    /// `skip` is always recomputed from `filter_data.page` and falls back to 0
    /// when the change carries no parseable page, even if `state` was on a
    /// later page.
    pub fn format_filter_data(&self, state: FilterState, filter_data: &FilterState) -> FilterState {
        let mut state = state;
        for rule in &self.options.special_params {
            state = state.merge_deep(&rule.derive(filter_data));
        }

        let skip = filter_data
            .get(PAGE)
            .and_then(FilterValue::parse_int)
            .and_then(|page| page.checked_sub(1))
            .and_then(|offset| offset.checked_mul(i64::from(self.options.limit_per_page)))
            .unwrap_or(0);

        state
            .merge(&self.init_filter_data)
            .merge(filter_data)
            .with(SKIP, skip)
    }

    pub fn reduce(&self, state: &FilterState, action: &FilterAction) -> FilterState {
        match action {
            FilterAction::UpdateFilterData { filter_data } => {
                self.format_filter_data(state.clone(), filter_data)
            }
            FilterAction::ResetFilterData => self.init_filter_data.clone(),
            FilterAction::Unknown => {
                debug!("Ignoring unknown filter action");
                state.clone()
            }
        }
    }

    /// The update dispatched for a single widget change. In table mode the
    /// change also sends the table back to the first page.
    pub fn update_action(&self, name: impl Into<String>, value: impl Into<FilterValue>) -> FilterAction {
        let mut filter_data = FilterState::new();
        if self.options.is_table {
            filter_data.insert(PAGE, 1);
        }
        filter_data.insert(name, value);
        FilterAction::UpdateFilterData { filter_data }
    }
}
