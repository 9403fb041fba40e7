//! sift-common - Framework-free filter state for URL-synchronized tables
//!
//! Holds the filter value model, the ordered merge/reconcile reducer, the
//! raw and formatted read views, and the query string codec. The Dioxus
//! bindings in `sift-ui` and any other host build on these types.

mod error;
mod manager;
mod options;
mod query;
mod reducer;
mod state;
mod sync;
mod value;
mod view;

pub use error::FilterError;
pub use manager::FilterManager;
pub use options::{
    FilterOptions, SpecialParamRule, DEFAULT_LIMIT_PER_PAGE, DEFAULT_SEARCH_NAME, DEFAULT_SORT,
};
pub use query::{parse_query, stringify_query};
pub use reducer::{FilterAction, FilterReducer, PAGINATION_KEYS};
pub use state::FilterState;
pub use sync::UrlSync;
pub use value::{string_to_bool, FilterValue};
pub use view::FilterView;
