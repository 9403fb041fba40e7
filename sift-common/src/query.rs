//! Query string codec
//!
//! Parsing decodes percent escapes. Stringifying does not encode: values are
//! written as-is, matching what the filter widgets put in the address bar.

use crate::error::FilterError;
use crate::state::FilterState;
use crate::value::FilterValue;
use tracing::debug;

/// Parse a flat `key=value&...` query string. A leading `?` is ignored,
/// pairs with an empty key are dropped and a repeated key keeps its last value.
///
/// Decoding is lossy: a bad `%` escape is kept literally and invalid UTF-8
/// becomes U+FFFD, so a flat query string does not produce
/// [`FilterError::Query`] in practice.
pub fn parse_query(query: &str) -> Result<FilterState, FilterError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;

    Ok(pairs
        .into_iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key, FilterValue::Str(value)))
        .collect())
}

/// Serialize to `key=value&...` with no encoding and no leading `?`.
pub fn stringify_query(state: &FilterState) -> String {
    state
        .iter()
        .filter_map(|(key, value)| match value.to_query_value() {
            Some(rendered) => Some(format!("{key}={rendered}")),
            None => {
                debug!("Skipping nested filter value '{key}' in query string");
                None
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
