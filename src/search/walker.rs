//! Paginated search walker
//!
//! Walks backwards through search results by lowering the `max_id` cursor
//! after every page. The stream is lazy: a search call is only made when the
//! consumer asks for an identifier that is not already buffered, so dropping
//! the stream early never triggers another request.

use super::types::SearchParams;
use super::SearchApi;
use crate::error::Result;
use crate::types::StatusId;
use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

/// Walk a search, yielding result identifiers in the order received.
///
/// Stops once `limit` identifiers have been yielded (0 means no limit), or
/// when a search returns an empty page. The limit is a hard cutoff and may
/// end the walk in the middle of a page.
///
/// After each full page the cursor becomes `page minimum - 1`, where the
/// minimum is taken over that page only, not over the whole walk. Any
/// `max_id` in `params` is used for the first call and overwritten after it.
///
/// Errors from `api` are yielded unchanged and end the stream.
pub fn walk_ids<'a, A>(
    api: &'a A,
    limit: usize,
    params: SearchParams,
) -> impl Stream<Item = Result<StatusId>> + Send + 'a
where
    A: SearchApi + ?Sized,
{
    let walk = Walk {
        api,
        params,
        limit,
        yielded: 0,
        page: Vec::new().into_iter(),
        page_min: None,
        finished: false,
    };
    stream::try_unfold(walk, Walk::advance)
}

/// Run a walk to completion and collect its identifiers.
pub async fn collect_ids<A>(api: &A, limit: usize, params: SearchParams) -> Result<Vec<StatusId>>
where
    A: SearchApi + ?Sized,
{
    walk_ids(api, limit, params).try_collect().await
}

struct Walk<'a, A: ?Sized> {
    api: &'a A,
    params: SearchParams,
    limit: usize,
    yielded: usize,
    page: std::vec::IntoIter<StatusId>,
    page_min: Option<StatusId>,
    finished: bool,
}

impl<'a, A> Walk<'a, A>
where
    A: SearchApi + ?Sized,
{
    async fn advance(mut self) -> Result<Option<(StatusId, Self)>> {
        loop {
            if self.finished {
                return Ok(None);
            }

            if let Some(id) = self.page.next() {
                self.yielded += 1;
                if self.limit != 0 && self.yielded == self.limit {
                    self.finished = true;
                }
                self.page_min = Some(self.page_min.map_or(id, |min| min.min(id)));
                return Ok(Some((id, self)));
            }

            // Page exhausted: move the cursor below it (no-op before the first call)
            if let Some(min) = self.page_min.take() {
                self.params.set_max_id(min.saturating_sub(1));
            }

            let response = self.api.search(&self.params).await?;

            debug!(params = %self.params, "Search params");
            debug!(metadata = ?response.search_metadata, "Search response");
            debug!(count = response.len(), "Search result count");

            if response.is_empty() {
                self.finished = true;
                continue;
            }

            self.page = response.into_ids().into_iter();
        }
    }
}
