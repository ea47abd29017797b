// Filter set domain model and query string encoding
use std::fmt;

pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";
pub const BUSINESS_GROUP: &str = "business_group";
pub const FUNCTION: &str = "function";

/// A single filter value. A missing value (null or undefined) is modeled as
/// `None` in [`FilterSet`], not as a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FilterValue {
    fn is_empty(&self) -> bool {
        matches!(self, FilterValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::Integer(n) => write!(f, "{}", n),
            FilterValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

/// Insertion-ordered mapping of filter keys to optional values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    entries: Vec<(String, Option<FilterValue>)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Date range used for the first page load.
    pub fn initial() -> Self {
        Self::new()
            .with(START_DATE, "2025-01-01")
            .with(END_DATE, "2025-12-31")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(key, Some(value.into()));
        self
    }

    /// Replaces the value in place when the key already exists.
    pub fn set(&mut self, key: impl Into<String>, value: Option<FilterValue>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Drilldown requests are scoped by business group and function only.
    pub fn drilldown_scope(&self) -> Self {
        let mut scoped = Self::new();
        scoped.set(BUSINESS_GROUP, self.get(BUSINESS_GROUP).cloned());
        scoped.set(FUNCTION, self.get(FUNCTION).cloned());
        scoped
    }

    /// Usable entries: present and not the empty string.
    fn usable(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().filter_map(|(k, v)| match v {
            Some(value) if !value.is_empty() => Some((k.as_str(), value)),
            _ => None,
        })
    }
}

impl FromIterator<(String, String)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (key, value) in iter {
            filters.set(key, Some(FilterValue::Text(value)));
        }
        filters
    }
}

/// Encode the usable entries of a filter set as a URL query string.
pub fn encode_query(filters: &FilterSet) -> String {
    filters
        .usable()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&value.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
