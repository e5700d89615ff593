//! Query string handling.
//!
//! Parameters are always added to an already parsed URL and re-serialized
//! with standard form encoding, so values never leak into neighbouring
//! parameters and Redmine's own filter operators (`<`, `>`, `=`) arrive
//! escaped.

use std::collections::BTreeMap;

use url::Url;

use super::error::{ApiError, Result};

/// Add a single `key=value` pair to `url`.
///
/// Existing parameters are kept and all parameters are sorted by key.
/// An empty key leaves the URL untouched.
pub fn add_query_parameter(url: &str, key: &str, value: &str) -> Result<String> {
    add_query_parameters(url, &[(key, value)])
}

/// Add several `key=value` pairs to `url`.
///
/// Pairs with an empty key are skipped. When nothing is left to add the URL
/// is returned as given.
pub fn add_query_parameters<K, V>(url: &str, pairs: &[(K, V)]) -> Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let added: Vec<(String, String)> = pairs
        .iter()
        .filter(|(key, _)| !key.as_ref().is_empty())
        .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string()))
        .collect();

    if added.is_empty() {
        return Ok(url.to_string());
    }

    let mut parsed = Url::parse(url).map_err(|source| ApiError::InvalidUrl {
        key: added
            .iter()
            .map(|(key, _)| key.as_str())
            .collect::<Vec<_>>()
            .join(","),
        url: url.to_string(),
        source,
    })?;

    let mut all: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    all.extend(added);
    // stable: repeated keys keep their relative order
    all.sort_by(|a, b| a.0.cmp(&b.0));

    parsed.set_query(None);
    parsed.query_pairs_mut().extend_pairs(&all);

    Ok(parsed.into())
}

/// Join raw `key=value` fragments with `&`, dropping empty fragments.
pub fn concat_parameters(parameters: &[&str]) -> String {
    parameters
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("&")
}

/// Ad-hoc filter parameters (e.g. `status_id`, `assigned_to_id`).
///
/// Values are stored raw and escaped when the filter is appended to a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    filters: BTreeMap<String, String>,
}

impl Filter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter from alternating keys and values.
    ///
    /// An odd number of arguments yields an empty filter.
    pub fn from_pairs(args: &[&str]) -> Self {
        let mut filter = Self::new();
        if args.len() % 2 == 0 {
            for pair in args.chunks(2) {
                filter.add_pair(pair[0], pair[1]);
            }
        }
        filter
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn add_pair(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(key.into(), value.into());
    }

    /// Get the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Merge another filter into this one. Keys from `other` win.
    pub fn extend(&mut self, other: &Filter) {
        for (key, value) in &other.filters {
            self.filters.insert(key.clone(), value.clone());
        }
    }

    /// The filter as ordered key/value pairs.
    pub fn to_params(&self) -> Vec<(String, String)> {
        self.filters
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
