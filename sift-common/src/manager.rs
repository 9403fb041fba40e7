//! Framework-free filter state holder
//!
//! Owns the current state and replaces it on every dispatched action. An
//! observer registered with [`FilterManager::set_observer`] receives the new
//! URL query after each distinct state, the same contract the Dioxus hook
//! implements with an effect.

use crate::options::FilterOptions;
use crate::reducer::{FilterAction, FilterReducer};
use crate::state::FilterState;
use crate::sync::UrlSync;
use crate::value::FilterValue;
use crate::view::FilterView;
use tracing::debug;

type Observer = Box<dyn FnMut(&str)>;

pub struct FilterManager {
    reducer: FilterReducer,
    state: FilterState,
    sync: UrlSync,
    observer: Option<Observer>,
}

impl FilterManager {
    pub fn new(options: FilterOptions, query: &str) -> Self {
        let reducer = FilterReducer::from_query(options, query);
        let state = reducer.initial_state().clone();
        Self {
            reducer,
            state,
            sync: UrlSync::new(),
            observer: None,
        }
    }

    pub fn reducer(&self) -> &FilterReducer {
        &self.reducer
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> FilterView {
        self.reducer.view(&self.state)
    }

    /// Register the URL writer. It runs right away for the current state,
    /// then after every state change.
    pub fn set_observer(&mut self, observer: impl FnMut(&str) + 'static) {
        self.observer = Some(Box::new(observer));
        self.sync = UrlSync::new();
        self.notify();
    }

    pub fn dispatch(&mut self, action: FilterAction) {
        debug!("Dispatching filter action {action:?}");
        let next = self.reducer.reduce(&self.state, &action);
        if next != self.state {
            self.state = next;
            self.notify();
        }
    }

    pub fn update_filter_change(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        let action = self.reducer.update_action(name, value);
        self.dispatch(action);
    }

    pub fn reset_filter(&mut self) {
        self.dispatch(FilterAction::ResetFilterData);
    }

    fn notify(&mut self) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        if let Some(query) = self.sync.observe(&self.reducer, &self.state) {
            observer(&query);
        }
    }
}

impl std::fmt::Debug for FilterManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterManager")
            .field("reducer", &self.reducer)
            .field("state", &self.state)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
