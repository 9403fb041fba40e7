//! Construction-time filter options
//!
//! Plain settings deserialize from YAML so a page can ship its filter
//! defaults as a config file. Special-param rules carry callbacks and are
//! attached in code with [`FilterOptions::with_special_param`].

use crate::error::FilterError;
use crate::state::FilterState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Rows per page when `limit_per_page` is not configured
pub const DEFAULT_LIMIT_PER_PAGE: u32 = 20;
pub const DEFAULT_SORT: &str = "-_id";
pub const DEFAULT_SEARCH_NAME: &str = "title";

type DeriveFn = dyn Fn(&FilterState) -> FilterState + Send + Sync;

/// Expands raw filter keys into formatted keys for data queries.
///
/// Example: a `passingGrade` range picker (raw) becomes `passingGradeMin`
/// and `passingGradeMax` (formatted). The callback receives the incoming
/// change, which may not contain any of `param`, and returns only the
/// formatted keys it can compute.
#[derive(Clone)]
pub struct SpecialParamRule {
    /// Raw keys, hidden from the formatted view
    pub param: Vec<String>,
    /// Formatted keys, hidden from the raw view
    pub output: Vec<String>,
    callback: Arc<DeriveFn>,
}

impl SpecialParamRule {
    pub fn new<P, O>(
        param: P,
        output: O,
        callback: impl Fn(&FilterState) -> FilterState + Send + Sync + 'static,
    ) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            param: param.into_iter().map(Into::into).collect(),
            output: output.into_iter().map(Into::into).collect(),
            callback: Arc::new(callback),
        }
    }

    /// Run the callback against an incoming change.
    pub fn derive(&self, filter_data: &FilterState) -> FilterState {
        (self.callback)(filter_data)
    }
}

impl fmt::Debug for SpecialParamRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecialParamRule")
            .field("param", &self.param)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_search_name() -> String {
    DEFAULT_SEARCH_NAME.to_string()
}

fn default_limit_per_page() -> u32 {
    DEFAULT_LIMIT_PER_PAGE
}

/// Filter options, fixed for the lifetime of one filter instance
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Server-side sort expression
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Whether pagination keys (skip, limit, sort, page) are managed at all
    #[serde(default = "default_true")]
    pub is_table: bool,
    /// Defaults that survive a reset, merged before pagination and search
    #[serde(default)]
    pub additional_init_params: FilterState,
    /// Make reset clear the search key too
    #[serde(default)]
    pub reset_search: bool,
    /// Key used for the free-text search
    #[serde(default = "default_search_name")]
    pub search_name: String,
    #[serde(default = "default_limit_per_page")]
    pub limit_per_page: u32,
    #[serde(skip)]
    pub special_params: Vec<SpecialParamRule>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            is_table: true,
            additional_init_params: FilterState::new(),
            reset_search: false,
            search_name: default_search_name(),
            limit_per_page: DEFAULT_LIMIT_PER_PAGE,
            special_params: Vec::new(),
        }
    }
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, FilterError> {
        let options: FilterOptions = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let options = Self::from_yaml_str(&yaml)?;
        info!("Loaded filter options from {}", path.display());
        Ok(options)
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn with_table(mut self, is_table: bool) -> Self {
        self.is_table = is_table;
        self
    }

    pub fn with_init_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<crate::FilterValue>,
    ) -> Self {
        self.additional_init_params.insert(key, value);
        self
    }

    pub fn with_reset_search(mut self, reset_search: bool) -> Self {
        self.reset_search = reset_search;
        self
    }

    pub fn with_search_name(mut self, search_name: impl Into<String>) -> Self {
        self.search_name = search_name.into();
        self
    }

    pub fn with_limit_per_page(mut self, limit_per_page: u32) -> Self {
        self.limit_per_page = limit_per_page;
        self
    }

    pub fn with_special_param(mut self, rule: SpecialParamRule) -> Self {
        self.special_params.push(rule);
        self
    }

    /// Every raw key of every special-param rule
    pub fn raw_params_keys(&self) -> Vec<&str> {
        self.special_params
            .iter()
            .flat_map(|rule| rule.param.iter().map(String::as_str))
            .collect()
    }

    /// Every formatted key of every special-param rule
    pub fn formatted_params_keys(&self) -> Vec<&str> {
        self.special_params
            .iter()
            .flat_map(|rule| rule.output.iter().map(String::as_str))
            .collect()
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.search_name.is_empty() {
            return Err(FilterError::InvalidOptions(
                "search_name must not be empty".to_string(),
            ));
        }
        if self.limit_per_page == 0 {
            return Err(FilterError::InvalidOptions(
                "limit_per_page must be at least 1".to_string(),
            ));
        }
        for rule in &self.special_params {
            if let Some(key) = rule.param.iter().find(|key| rule.output.contains(key)) {
                return Err(FilterError::InvalidOptions(format!(
                    "special param '{key}' is listed as both param and output"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterValue;

    #[test]
    fn test_defaults() {
        let options = FilterOptions::default();
        assert_eq!(options.sort, "-_id");
        assert!(options.is_table);
        assert!(!options.reset_search);
        assert_eq!(options.search_name, "title");
        assert_eq!(options.limit_per_page, 20);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_fills_missing_fields() {
        let options = FilterOptions::from_yaml_str(
            "sort: name\nadditional_init_params:\n  kind: talent\n  archived: false\n",
        )
        .unwrap();
        assert_eq!(options.sort, "name");
        assert!(options.is_table);
        assert_eq!(options.search_name, "title");
        assert_eq!(
            options.additional_init_params.get("kind"),
            Some(&FilterValue::from("talent"))
        );
        assert_eq!(
            options.additional_init_params.get("archived"),
            Some(&FilterValue::Bool(false))
        );
    }

    #[test]
    fn test_from_yaml_rejects_zero_limit() {
        let err = FilterOptions::from_yaml_str("limit_per_page: 0").unwrap_err();
        assert!(matches!(err, FilterError::InvalidOptions(_)));
    }

    #[test]
    fn test_from_yaml_reports_syntax_errors() {
        let err = FilterOptions::from_yaml_str("is_table: [").unwrap_err();
        assert!(matches!(err, FilterError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_overlapping_rule_keys() {
        let options = FilterOptions::new().with_special_param(SpecialParamRule::new(
            ["grade"],
            ["grade", "gradeMax"],
            |_| FilterState::new(),
        ));
        assert!(matches!(
            options.validate(),
            Err(FilterError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_rule_keys_are_flattened_in_order() {
        let options = FilterOptions::new()
            .with_special_param(SpecialParamRule::new(["a"], ["aMin", "aMax"], |_| {
                FilterState::new()
            }))
            .with_special_param(SpecialParamRule::new(["b"], ["bMin"], |_| FilterState::new()));
        assert_eq!(options.raw_params_keys(), vec!["a", "b"]);
        assert_eq!(options.formatted_params_keys(), vec!["aMin", "aMax", "bMin"]);
    }
}
