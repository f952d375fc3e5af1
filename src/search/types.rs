//! Search request and response types

use crate::types::StatusId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parameter name for the free-text query
pub const QUERY: &str = "q";
/// Parameter name for the inclusive upper-bound cursor
pub const MAX_ID: &str = "max_id";
/// Parameter name for the exclusive lower bound
pub const SINCE_ID: &str = "since_id";
/// Parameter name for the result type
pub const RESULT_TYPE: &str = "result_type";
/// Parameter name for the page size
pub const COUNT: &str = "count";

/// Named search parameters, sent as query string pairs.
///
/// Keys are kept sorted so logs and rendered headings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchParams(BTreeMap<String, String>);

impl SearchParams {
    /// Create params holding only the query text
    pub fn new(query: impl Into<String>) -> Self {
        let mut params = Self::default();
        params.insert(QUERY, query);
        params
    }

    /// Insert or replace a parameter, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value.to_string());
        self
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The query text, if set
    pub fn query(&self) -> Option<&str> {
        self.get(QUERY)
    }

    /// The `max_id` cursor, if set and numeric
    pub fn max_id(&self) -> Option<StatusId> {
        self.get(MAX_ID).and_then(|v| v.parse().ok())
    }

    /// Set the `max_id` cursor
    pub fn set_max_id(&mut self, id: StatusId) {
        self.insert(MAX_ID, id.to_string());
    }

    /// The `since_id` bound, if set and numeric
    pub fn since_id(&self) -> Option<StatusId> {
        self.get(SINCE_ID).and_then(|v| v.parse().ok())
    }

    /// Set the `since_id` bound
    pub fn set_since_id(&mut self, id: StatusId) {
        self.insert(SINCE_ID, id.to_string());
    }

    /// Iterate over `(name, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

/// A single search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Result identifier
    pub id: StatusId,
    /// Tweet text (absent in extended mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Creation timestamp as sent by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Status {
    /// Create a status with only an id
    pub fn new(id: StatusId) -> Self {
        Self {
            id,
            text: None,
            created_at: None,
        }
    }
}

/// Summary metadata returned alongside a page. Only ever logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub completed_in: Option<f64>,
    #[serde(default)]
    pub max_id: Option<StatusId>,
    #[serde(default)]
    pub since_id: Option<StatusId>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub next_results: Option<String>,
    #[serde(default)]
    pub refresh_url: Option<String>,
}

/// One page of search results.
///
/// `statuses` is required: a body without it is a contract violation and
/// fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Results in the order the API returned them
    pub statuses: Vec<Status>,
    /// Optional summary metadata
    #[serde(default)]
    pub search_metadata: Option<SearchMetadata>,
}

impl SearchResponse {
    /// Build a response from bare ids
    pub fn from_ids(ids: impl IntoIterator<Item = StatusId>) -> Self {
        Self {
            statuses: ids.into_iter().map(Status::new).collect(),
            search_metadata: None,
        }
    }

    /// Number of results in this page
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Whether this page is empty
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Consume the page, keeping only the ids in response order
    pub fn into_ids(self) -> Vec<StatusId> {
        self.statuses.into_iter().map(|s| s.id).collect()
    }
}
