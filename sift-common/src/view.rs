//! Read views over the canonical filter state
//!
//! The raw view drives filter widgets and the URL. The formatted view is the
//! shape sent to data queries.

use crate::reducer::{FilterReducer, LIMIT, PAGINATION_KEYS, SKIP, SORT};
use crate::state::FilterState;
use crate::value::string_to_bool;

/// Projection of one filter state, recomputed on every render
#[derive(Clone, Debug, PartialEq)]
pub struct FilterView {
    /// Without raw special-param keys, pagination included
    pub filter_state: FilterState,
    /// Without formatted special-param keys and skip/limit/sort
    pub raw_filter_state: FilterState,
    /// Any search or filter differs from the page defaults
    pub is_search_and_filter_active: bool,
    /// Any filter other than search differs from the page defaults
    pub is_filter_active: bool,
}

/// Coerce boolean strings and drop `""`, which single-select widgets use as
/// their "no selection" option.
fn clean(state: FilterState) -> FilterState {
    state
        .map_values(string_to_bool)
        .retain(|_, value| !value.is_empty_str())
}

impl FilterReducer {
    pub fn raw_filter_state(&self, state: &FilterState) -> FilterState {
        let stripped = state
            .clone()
            .without(self.options().formatted_params_keys())
            .without([SKIP, LIMIT, SORT]);
        clean(stripped)
    }

    pub fn formatted_filter_state(&self, state: &FilterState) -> FilterState {
        clean(state.clone().without(self.options().raw_params_keys()))
    }

    pub fn view(&self, state: &FilterState) -> FilterView {
        let options = self.options();
        let raw_filter_state = self.raw_filter_state(state);

        let active = raw_filter_state
            .clone()
            .without(options.additional_init_params.keys())
            .without(PAGINATION_KEYS);
        let is_search_and_filter_active = !active.is_empty();
        let is_filter_active = !active.without([options.search_name.as_str()]).is_empty();

        FilterView {
            filter_state: self.formatted_filter_state(state),
            raw_filter_state,
            is_search_and_filter_active,
            is_filter_active,
        }
    }
}
