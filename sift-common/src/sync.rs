//! State-to-URL synchronization

use crate::query::stringify_query;
use crate::reducer::FilterReducer;
use crate::state::FilterState;
use tracing::debug;

/// Tracks the last state written to the URL so the write happens once per
/// distinct state, no matter how often the host re-runs its effect.
#[derive(Debug, Default)]
pub struct UrlSync {
    last: Option<FilterState>,
}

impl UrlSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query string to write for `state`, or `None` if `state` was already synced.
    pub fn observe(&mut self, reducer: &FilterReducer, state: &FilterState) -> Option<String> {
        if self.last.as_ref() == Some(state) {
            return None;
        }
        self.last = Some(state.clone());

        let query = stringify_query(&reducer.raw_filter_state(state));
        debug!("Filter state changed, syncing URL query '{query}'");
        Some(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FilterOptions;
    use crate::reducer::FilterAction;

    #[test]
    fn test_first_observe_writes_normalized_query() {
        let reducer = FilterReducer::from_query(FilterOptions::default(), "?title=foo&page=2&status=");
        let mut sync = UrlSync::new();
        assert_eq!(
            sync.observe(&reducer, reducer.initial_state()).as_deref(),
            Some("page=2&title=foo")
        );
    }

    #[test]
    fn test_repeated_state_is_synced_once() {
        let reducer = FilterReducer::from_query(FilterOptions::default(), "");
        let mut sync = UrlSync::new();
        let state = reducer.initial_state().clone();

        assert_eq!(sync.observe(&reducer, &state).as_deref(), Some("page=1"));
        assert_eq!(sync.observe(&reducer, &state), None);

        let next = reducer.reduce(&state, &reducer.update_action("status", "active"));
        assert_eq!(
            sync.observe(&reducer, &next).as_deref(),
            Some("page=1&status=active")
        );
        assert_eq!(sync.observe(&reducer, &next.clone()), None);

        let reset = reducer.reduce(&next, &FilterAction::ResetFilterData);
        assert_eq!(sync.observe(&reducer, &reset).as_deref(), Some("page=1"));
    }
}
