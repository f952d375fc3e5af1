//! Search module
//!
//! The paginated search walker and the capability it drives.
//!
//! # Overview
//!
//! - [`SearchApi`] - the narrow seam to the remote API (params in, page out)
//! - [`walk_ids`] - lazily walks backwards through result pages using a
//!   `max_id` cursor, yielding result identifiers
//! - [`TwitterClient`] - `SearchApi` over the v1.1 `search/tweets` endpoint

mod client;
mod types;
mod walker;

pub use client::{TwitterClient, DEFAULT_BASE_URL, SEARCH_PATH};
pub use types::{
    SearchMetadata, SearchParams, SearchResponse, Status, COUNT, MAX_ID, QUERY, RESULT_TYPE,
    SINCE_ID,
};
pub use walker::{collect_ids, walk_ids};

use crate::error::Result;
use async_trait::async_trait;

/// A search capability: one call returns one page of results.
///
/// Implementations own transport, authentication and retries. Callers such as
/// [`walk_ids`] pass errors through untouched.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Run a single search with the given parameters
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse>;
}

#[async_trait]
impl<T: SearchApi + ?Sized> SearchApi for std::sync::Arc<T> {
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        (**self).search(params).await
    }
}
