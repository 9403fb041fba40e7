//! Filter options for the talent table

use sift_common::{FilterOptions, FilterState, FilterValue, SpecialParamRule};
use std::sync::OnceLock;
use tracing::error;

const FILTERS_YAML: &str = include_str!("../filters.yaml");

/// Passing grade picker values, `min-max` inclusive
pub const PASSING_GRADE_RANGES: &[(&str, &str)] = &[
    ("0-59", "Below 60"),
    ("60-79", "60 to 79"),
    ("80-100", "80 and above"),
];

/// `passingGrade=60-79` is queried as `passingGradeMin=60&passingGradeMax=79`.
fn passing_grade_rule() -> SpecialParamRule {
    SpecialParamRule::new(
        ["passingGrade"],
        ["passingGradeMin", "passingGradeMax"],
        |filter_data| {
            let Some(range) = filter_data.get_str("passingGrade") else {
                return FilterState::new();
            };
            // "" clears both bounds
            let (min, max) = range.split_once('-').unwrap_or(("", ""));
            FilterState::from([
                ("passingGradeMin", FilterValue::from(min)),
                ("passingGradeMax", FilterValue::from(max)),
            ])
        },
    )
}

pub fn talent_filter_options() -> FilterOptions {
    static OPTIONS: OnceLock<FilterOptions> = OnceLock::new();
    OPTIONS
        .get_or_init(|| {
            let options = FilterOptions::from_yaml_str(FILTERS_YAML).unwrap_or_else(|e| {
                error!("Bundled filter config is invalid, using defaults: {e}");
                FilterOptions::default()
            });
            options.with_special_param(passing_grade_rule())
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_data::query_talents;
    use sift_common::{FilterManager, FilterReducer};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_bundled_config_loads() {
        let options = talent_filter_options();
        assert_eq!(options.limit_per_page, 10);
        assert_eq!(options.additional_init_params.get_str("kind"), Some("talent"));
        assert_eq!(options.formatted_params_keys(), vec!["passingGradeMin", "passingGradeMax"]);
    }

    #[test]
    fn test_passing_grade_expands_for_queries() {
        let reducer = FilterReducer::from_query(talent_filter_options(), "passingGrade=60-79&page=2");
        let view = reducer.view(reducer.initial_state());
        assert_eq!(view.filter_state.get_str("passingGradeMin"), Some("60"));
        assert_eq!(view.filter_state.get_str("passingGradeMax"), Some("79"));
        assert_eq!(view.filter_state.get("skip"), Some(&FilterValue::Int(10)));
        assert_eq!(view.raw_filter_state.get_str("passingGrade"), Some("60-79"));
    }

    #[test]
    fn test_ordering_survives_other_filters_and_reload() {
        let urls = Rc::new(RefCell::new(Vec::new()));
        let mut manager = FilterManager::new(talent_filter_options(), "");
        manager.set_observer({
            let urls = urls.clone();
            move |query| urls.borrow_mut().push(query.to_string())
        });

        manager.update_filter_change("orderBy", "name");
        manager.update_filter_change("status", "active");
        assert_eq!(manager.state().get_str("orderBy"), Some("name"));
        assert_eq!(manager.state().get_str("sort"), Some("-_id"));

        let url = urls.borrow().last().cloned().unwrap_or_default();
        assert!(url.contains("orderBy=name"), "{url}");

        let reloaded = FilterManager::new(talent_filter_options(), &url);
        assert_eq!(reloaded.state().get_str("orderBy"), Some("name"));
        assert_eq!(reloaded.state().get_str("status"), Some("active"));
        let rows = query_talents(&reloaded.view().filter_state).rows;
        assert!(rows.windows(2).all(|w| w[0].name <= w[1].name));
        assert!(rows.iter().all(|t| t.status == "active"));
    }
}
