//! Fetch query filters
//!
//! A [`FilterSet`] carries the query parameters a list fetch sends to the
//! backend. Insertion order is preserved so rendered query strings are
//! stable.

use indexmap::IndexMap;

/// Value of one query filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric value (offsets, group ids)
    Int(i64),
    /// String value (queries, sort expressions)
    Str(String),
}

impl FilterValue {
    /// Render the value the way it appears in a query string
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            FilterValue::Bool(flag) => flag.to_string(),
            FilterValue::Int(value) => value.to_string(),
            FilterValue::Str(value) => value.clone(),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(flag: bool) -> Self {
        FilterValue::Bool(flag)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
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

/// Ordered query filter set
pub type FilterSet = IndexMap<String, FilterValue>;

/// Whether a flag value is literally `true` or the string `"true"`
///
/// The inclusion rule for boolean flags: anything else (including
/// `"True"`, `1`, or an absent key) leaves the flag out of the query.
#[must_use]
pub fn is_true(value: &FilterValue) -> bool {
    match value {
        FilterValue::Bool(flag) => *flag,
        FilterValue::Str(text) => text == "true",
        FilterValue::Int(_) => false,
    }
}

/// Render a filter set as a query string (no leading `?`)
#[must_use]
pub fn render_query(filters: &FilterSet) -> String {
    filters
        .iter()
        .map(|(key, value)| format!("{key}={}", value.render()))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_true_accepts_only_literal_truth() {
        assert!(is_true(&FilterValue::Bool(true)));
        assert!(is_true(&FilterValue::Str("true".to_string())));

        assert!(!is_true(&FilterValue::Bool(false)));
        assert!(!is_true(&FilterValue::Str("True".to_string())));
        assert!(!is_true(&FilterValue::Str("1".to_string())));
        assert!(!is_true(&FilterValue::Int(1)));
    }

    #[test]
    fn query_rendering_preserves_insertion_order() {
        let mut filters = FilterSet::new();
        filters.insert("query".to_string(), "status:running".into());
        filters.insert("sort".to_string(), "-created_at".into());
        filters.insert("offset".to_string(), FilterValue::Int(30));

        assert_eq!(
            render_query(&filters),
            "query=status:running&sort=-created_at&offset=30"
        );
    }
}
