//! Filter values
//!
//! Filter state holds strings (everything parsed from a URL), numbers
//! (pagination written by the reducer itself), booleans (coerced for
//! widgets) and nested maps (only ever produced by special-param callbacks).

use crate::state::FilterState;
use serde::{Deserialize, Serialize};

/// A single value in the filter state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Map(FilterState),
}

impl FilterValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&FilterState> {
        match self {
            FilterValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Whether this is the empty string, which widgets use as "no selection".
    pub fn is_empty_str(&self) -> bool {
        matches!(self, FilterValue::Str(s) if s.is_empty())
    }

    /// Parse as a base-10 integer the way a browser's `parseInt` would.
    ///
    /// Strings are read up to the first non-digit after optional leading
    /// whitespace and sign, so `"2abc"` is 2 and `"abc"` is `None`.
    /// Floats truncate toward zero. Booleans and maps never parse.
    pub fn parse_int(&self) -> Option<i64> {
        match self {
            FilterValue::Int(i) => Some(*i),
            FilterValue::Float(f) => f.is_finite().then(|| f.trunc() as i64),
            FilterValue::Str(s) => parse_leading_int(s),
            FilterValue::Bool(_) | FilterValue::Map(_) => None,
        }
    }

    /// Render for an unencoded query string. Maps have no flat form.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            FilterValue::Bool(b) => Some(b.to_string()),
            FilterValue::Int(i) => Some(i.to_string()),
            FilterValue::Float(f) => Some(f.to_string()),
            FilterValue::Str(s) => Some(s.clone()),
            FilterValue::Map(_) => None,
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce `"true"`/`"false"` strings to booleans. Everything else is unchanged.
pub fn string_to_bool(value: FilterValue) -> FilterValue {
    match value {
        FilterValue::Str(s) if s == "true" => FilterValue::Bool(true),
        FilterValue::Str(s) if s == "false" => FilterValue::Bool(false),
        other => other,
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Str(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value.into())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Int(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<FilterState> for FilterValue {
    fn from(value: FilterState) -> Self {
        FilterValue::Map(value)
    }
}
