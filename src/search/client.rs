//! Twitter v1.1 search client

use super::types::{SearchParams, SearchResponse};
use super::SearchApi;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use async_trait::async_trait;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

/// Standard search endpoint, relative to the API root
pub const SEARCH_PATH: &str = "/1.1/search/tweets.json";

/// `SearchApi` backed by the standard v1.1 search endpoint.
///
/// Every search parameter is sent verbatim as a query string pair.
#[derive(Debug)]
pub struct TwitterClient {
    http: HttpClient,
    search_path: String,
}

impl TwitterClient {
    /// Create a client that searches `SEARCH_PATH` under the HTTP client's base URL
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            search_path: SEARCH_PATH.to_string(),
        }
    }

    /// Override the search endpoint path
    #[must_use]
    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = path.into();
        self
    }
}

#[async_trait]
impl SearchApi for TwitterClient {
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        let config = params
            .iter()
            .fold(RequestConfig::new(), |config, (key, value)| {
                config.query(key, value)
            });

        self.http
            .get_json_with_config(&self.search_path, config)
            .await
    }
}
