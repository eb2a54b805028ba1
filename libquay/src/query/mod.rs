//! Tag query construction.
//!
//! Maps tag listing parameters onto the query keys the Quay Tag API expects
//! (`onlyActiveTags`, `page`, `limit`, `specificTag`). Two mapping styles
//! exist because the two tag operations build their queries differently:
//!
//! - [`TagQuery::sparse`] only includes keys whose parameter was supplied.
//! - [`TagQuery::dense`] always includes every key, possibly with a null value.

use crate::error::{QuayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests;

/// Query key for the active-tags filter.
pub const ONLY_ACTIVE_TAGS: &str = "onlyActiveTags";
/// Query key for the page index.
pub const PAGE: &str = "page";
/// Query key for the page size.
pub const LIMIT: &str = "limit";
/// Query key for the single-tag filter.
pub const SPECIFIC_TAG: &str = "specificTag";

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Bool(b) => write!(f, "{}", b),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

/// Ordered query mapping.
///
/// A key can be present with a `None` value. Such keys are part of the
/// mapping but are never written to the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, Option<QueryValue>)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`.
    ///
    /// An existing key keeps its position and has its value replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use libquay::query::{Query, QueryValue};
    ///
    /// let mut query = Query::new();
    /// query.set("page", Some(QueryValue::Int(1)));
    /// query.set("page", Some(QueryValue::Int(2)));
    /// assert_eq!(query.len(), 1);
    /// assert_eq!(query.get("page"), Some(&Some(QueryValue::Int(2))));
    /// ```
    pub fn set(&mut self, key: &'static str, value: Option<QueryValue>) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Returns the value stored for `key`, if the key is present.
    pub fn get(&self, key: &str) -> Option<&Option<QueryValue>> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns true if `key` is present, null or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys in the mapping, null values included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Key/value pairs as they go on the wire, null values skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use libquay::query::{Query, QueryValue};
    ///
    /// let mut query = Query::new();
    /// query.set("onlyActiveTags", Some(QueryValue::Bool(true)));
    /// query.set("page", None);
    /// assert_eq!(
    ///     query.encoded_pairs(),
    ///     vec![("onlyActiveTags", "true".to_string())]
    /// );
    /// ```
    pub fn encoded_pairs(&self) -> Vec<(&'static str, String)> {
        self.pairs
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (*k, v.to_string())))
            .collect()
    }
}

/// How the sparse mapping treats the `limit` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitMapping {
    /// `limit` is sent as the `limit` key.
    #[default]
    Limit,
    /// A supplied `limit` re-assigns the `page` key to the page value and
    /// no `limit` key is sent. Matches the tag_info module as first shipped.
    Legacy,
}

/// Parameters of one tag listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    /// Full repository path, `namespace/name`
    pub repository: String,
    pub only_active_tags: Option<bool>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub specific_tag: Option<String>,
}

impl TagQuery {
    /// Creates a query for `repository` with no filters.
    pub fn new<S: Into<String>>(repository: S) -> Self {
        Self {
            repository: repository.into(),
            ..Self::default()
        }
    }

    pub fn with_only_active_tags(mut self, only_active: bool) -> Self {
        self.only_active_tags = Some(only_active);
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_specific_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.specific_tag = Some(tag.into());
        self
    }

    /// Rejects a blank repository. Everything else is left to the registry.
    pub fn validate(&self) -> Result<()> {
        if self.repository.trim().is_empty() {
            return Err(QuayError::params("repository must not be empty"));
        }
        Ok(())
    }

    /// Path of the tag listing endpoint, relative to the API base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use libquay::query::TagQuery;
    ///
    /// let query = TagQuery::new("acme/widgets");
    /// assert_eq!(query.path(), "repository/acme/widgets/tag/");
    /// ```
    pub fn path(&self) -> String {
        format!("repository/{}/tag/", self.repository)
    }

    /// Builds a mapping holding only the supplied parameters.
    pub fn sparse(&self, limit_mapping: LimitMapping) -> Query {
        let mut query = Query::new();

        if let Some(only_active) = self.only_active_tags {
            query.set(ONLY_ACTIVE_TAGS, Some(only_active.into()));
        }
        if let Some(page) = self.page {
            query.set(PAGE, Some(page.into()));
        }
        if let Some(limit) = self.limit {
            match limit_mapping {
                LimitMapping::Limit => query.set(LIMIT, Some(limit.into())),
                LimitMapping::Legacy => query.set(PAGE, self.page.map(QueryValue::from)),
            }
        }
        if let Some(tag) = &self.specific_tag {
            query.set(SPECIFIC_TAG, Some(tag.as_str().into()));
        }

        query
    }

    /// Builds a mapping holding every key, null where the parameter is absent.
    pub fn dense(&self) -> Query {
        let mut query = Query::new();
        query.set(ONLY_ACTIVE_TAGS, self.only_active_tags.map(QueryValue::from));
        query.set(PAGE, self.page.map(QueryValue::from));
        query.set(LIMIT, self.limit.map(QueryValue::from));
        query.set(
            SPECIFIC_TAG,
            self.specific_tag.as_deref().map(QueryValue::from),
        );
        query
    }
}
