mod support;

use sift_common::{FilterAction, FilterError, FilterManager, FilterOptions, FilterValue};
use std::cell::RefCell;
use std::rc::Rc;
use support::{talent_options, tracing_init};
use tempfile::TempDir;

fn recording_manager(options: FilterOptions, query: &str) -> (FilterManager, Rc<RefCell<Vec<String>>>) {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let mut manager = FilterManager::new(options, query);
    let sink = writes.clone();
    manager.set_observer(move |query| sink.borrow_mut().push(query.to_string()));
    (manager, writes)
}

#[test]
fn test_reload_preserves_url_state() {
    tracing_init();
    let manager = FilterManager::new(FilterOptions::default(), "?page=2&title=foo");
    let state = manager.state();
    assert_eq!(state.get_str("page"), Some("2"));
    assert_eq!(state.get("skip"), Some(&FilterValue::Int(20)));
    assert_eq!(state.get_str("title"), Some("foo"));
}

#[test]
fn test_observer_fires_on_mount_and_on_each_change() {
    tracing_init();
    let (mut manager, writes) = recording_manager(FilterOptions::default(), "page=3");
    assert_eq!(*writes.borrow(), vec!["page=3"]);

    manager.update_filter_change("status", "active");
    assert_eq!(manager.state().get("page"), Some(&FilterValue::Int(1)));
    assert_eq!(manager.state().get("skip"), Some(&FilterValue::Int(0)));
    assert_eq!(*writes.borrow(), vec!["page=3", "page=1&status=active"]);

    // same change again reconciles to an identical state
    manager.update_filter_change("status", "active");
    assert_eq!(writes.borrow().len(), 2);

    manager.dispatch(FilterAction::Unknown);
    assert_eq!(writes.borrow().len(), 2);
}

#[test]
fn test_reset_restores_first_page_and_drops_filters() {
    tracing_init();
    let (mut manager, writes) = recording_manager(FilterOptions::default(), "");
    manager.update_filter_change("status", "active");
    manager.update_filter_change("page", 3);
    assert_eq!(manager.state().get("skip"), Some(&FilterValue::Int(40)));

    manager.reset_filter();
    let state = manager.state();
    assert_eq!(state.get_str("page"), Some("1"));
    assert_eq!(state.get("skip"), Some(&FilterValue::Int(0)));
    assert!(!state.contains_key("status"));
    assert_eq!(writes.borrow().last().map(String::as_str), Some("page=1"));

    let writes_before = writes.borrow().len();
    manager.reset_filter();
    assert_eq!(writes.borrow().len(), writes_before);
}

#[test]
fn test_special_param_round_trip_through_url() {
    tracing_init();
    let (mut manager, writes) = recording_manager(talent_options(), "passingGrade=60-80");

    let view = manager.view();
    assert_eq!(view.filter_state.get_str("passingGradeMin"), Some("60"));
    assert_eq!(view.filter_state.get_str("passingGradeMax"), Some("80"));
    assert!(!view.filter_state.contains_key("passingGrade"));
    assert_eq!(view.raw_filter_state.get_str("passingGrade"), Some("60-80"));
    assert!(view.is_filter_active);
    assert_eq!(
        writes.borrow().first().map(String::as_str),
        Some("kind=talent&page=1&passingGrade=60-80")
    );

    manager.update_filter_change("passingGrade", "");
    let view = manager.view();
    assert!(!view.filter_state.contains_key("passingGradeMin"));
    assert!(!view.raw_filter_state.contains_key("passingGrade"));
    assert!(!view.is_filter_active);
}

#[test]
fn test_reset_discards_special_param_outputs() {
    let mut manager = FilterManager::new(talent_options(), "passingGrade=0-59");
    assert!(manager.state().contains_key("passingGradeMin"));
    manager.reset_filter();
    assert!(!manager.state().contains_key("passingGradeMin"));
    assert!(!manager.state().contains_key("passingGrade"));
    assert_eq!(manager.state().get_str("kind"), Some("talent"));
}

#[test]
fn test_boolean_filters_are_coerced_for_widgets() {
    let mut manager = FilterManager::new(FilterOptions::default(), "");
    manager.update_filter_change("verified", "true");
    let view = manager.view();
    assert_eq!(view.raw_filter_state.get("verified"), Some(&FilterValue::Bool(true)));
    assert_eq!(view.filter_state.get("verified"), Some(&FilterValue::Bool(true)));
}

#[test]
fn test_options_from_yaml_file() {
    tracing_init();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("filters.yaml");
    std::fs::write(
        &path,
        "sort: name\nsearch_name: q\nlimit_per_page: 10\nadditional_init_params:\n  kind: talent\n",
    )
    .unwrap();

    let options = FilterOptions::from_yaml_file(&path).unwrap();
    let manager = FilterManager::new(options, "page=3&q=ada");
    let state = manager.state();
    assert_eq!(state.get_str("sort"), Some("name"));
    assert_eq!(state.get("skip"), Some(&FilterValue::Int(20)));
    assert_eq!(state.get_str("q"), Some("ada"));
    assert!(manager.view().is_search_and_filter_active);
    assert!(!manager.view().is_filter_active);
}

#[test]
fn test_missing_options_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = FilterOptions::from_yaml_file(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, FilterError::Io(_)));
}
