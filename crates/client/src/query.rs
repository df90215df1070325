//! Query parameters for a single API request

// standard library
use std::fmt::Display;

// internal modules
use crate::common::Field;

/// Named query parameters sent with a request
///
/// Parameters keep their insertion order and setting an existing name
/// replaces its value. Values may be anything implementing `Display`, so
/// strings and numbers can be mixed freely.
///
/// ```rust
/// # use livechart_client::{Field, Query};
/// let query = Query::new(Field::BetaSpectra)
///     .with("nuclides", "60co")
///     .with("rad_types", "bm")
///     .with("metastable_seqno", 1);
///
/// assert_eq!(query.get("fields"), Some("bin_beta"));
/// assert_eq!(query.get("metastable_seqno"), Some("1"));
/// assert_eq!(
///     query.to_string(),
///     "fields=bin_beta&nuclides=60co&rad_types=bm&metastable_seqno=1"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Start a query for the given field set
    pub fn new(field: Field) -> Self {
        Self::empty().with("fields", field.query_name())
    }

    /// A query without any parameters, not even `fields`
    ///
    /// Mostly useful for probing how the API responds to incomplete requests.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder style [Query::set]
    pub fn with<K: Into<String>, V: Display>(mut self, name: K, value: V) -> Self {
        self.set(name, value);
        self
    }

    /// Set a parameter, replacing any previous value under the same name
    pub fn set<K: Into<String>, V: Display>(&mut self, name: K, value: V) {
        let name = name.into();
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.params.push((name, value)),
        }
    }

    /// Value of a parameter, if set
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a parameter is set
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All parameters in insertion order
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True if no parameters are set
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl Display for Query {
    /// Unencoded `name=value` pairs joined by `&`, for logging
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| std::format!("{k}={v}"))
            .collect();
        write!(f, "{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_value() {
        let mut query = Query::new(Field::Levels).with("nuclides", "60co");
        query.set("nuclides", "135xe");
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("nuclides"), Some("135xe"));
    }

    #[test]
    fn empty_query_has_no_fields() {
        let query = Query::empty();
        assert!(query.is_empty());
        assert!(!query.contains("fields"));
        assert_eq!(query.to_string(), "");
    }
}
