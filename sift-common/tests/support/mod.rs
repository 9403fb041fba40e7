use sift_common::{FilterOptions, FilterState, FilterValue, SpecialParamRule};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// `passingGrade=60-80` expands to `passingGradeMin=60` and `passingGradeMax=80`.
/// Clearing the picker clears both bounds.
#[allow(dead_code)]
pub fn passing_grade_rule() -> SpecialParamRule {
    SpecialParamRule::new(
        ["passingGrade"],
        ["passingGradeMin", "passingGradeMax"],
        |filter_data| {
            let Some(range) = filter_data.get_str("passingGrade") else {
                return FilterState::new();
            };
            let (min, max) = range.split_once('-').unwrap_or(("", ""));
            FilterState::from([
                ("passingGradeMin", FilterValue::from(min)),
                ("passingGradeMax", FilterValue::from(max)),
            ])
        },
    )
}

#[allow(dead_code)]
pub fn talent_options() -> FilterOptions {
    FilterOptions::new()
        .with_init_param("kind", "talent")
        .with_special_param(passing_grade_rule())
}
