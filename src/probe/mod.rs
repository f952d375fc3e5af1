//! Pagination probe
//!
//! Runs the same query three ways and compares which identifiers come back:
//!
//! 1. no cursor at all
//! 2. `max_id` set to the newest id seen in (1)
//! 3. as (2), plus `since_id` just below the oldest id seen in (1)
//!
//! If the API honours both parameters, all three walks return the same ids.

mod report;

pub use report::{ProbeReport, ProbeRow, Variant};

use crate::error::Result;
use crate::search::{collect_ids, SearchApi, SearchParams, COUNT, RESULT_TYPE};
use crate::types::ResultType;
use tracing::info;

/// Largest page size the search endpoint accepts
pub const MAX_PAGE_SIZE: usize = 100;

/// Labels of the three variants, in run order
pub const VARIANT_LABELS: [&str; 3] = ["initial", "max_id", "max_id+since_id"];

/// Params for the first, cursor-free search.
///
/// Page size is `MAX_PAGE_SIZE`, shrunk to `limit` when a smaller limit is set.
pub fn initial_params(query: &str, result_type: ResultType, limit: usize) -> SearchParams {
    let count = if limit == 0 {
        MAX_PAGE_SIZE
    } else {
        limit.min(MAX_PAGE_SIZE)
    };

    SearchParams::new(query)
        .with(RESULT_TYPE, result_type)
        .with(COUNT, count)
}

/// Result of a probe run
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// The initial search found nothing, so there are no bounds to probe with
    NoResults {
        /// Params of the initial search
        params: SearchParams,
    },
    /// All three searches ran
    Report(ProbeReport),
}

/// Runs the three searches against one search capability
pub struct Probe<'a, A: ?Sized> {
    api: &'a A,
    limit: usize,
}

impl<'a, A> Probe<'a, A>
where
    A: SearchApi + ?Sized,
{
    /// Create a probe; `limit` caps each walk (0 for no limit)
    pub fn new(api: &'a A, limit: usize) -> Self {
        Self { api, limit }
    }

    /// Run all three searches, starting from `initial`
    pub async fn run(&self, initial: SearchParams) -> Result<ProbeOutcome> {
        let initial_ids = collect_ids(self.api, self.limit, initial.clone()).await?;
        info!(count = initial_ids.len(), "Initial search complete");

        let bounds = (initial_ids.iter().max(), initial_ids.iter().min());
        let (Some(&max_id), Some(&min_id)) = bounds else {
            return Ok(ProbeOutcome::NoResults { params: initial });
        };

        let mut max_only = initial.clone();
        max_only.set_max_id(max_id);
        let max_only_ids = collect_ids(self.api, self.limit, max_only.clone()).await?;
        info!(count = max_only_ids.len(), max_id, "max_id search complete");

        let mut both = max_only.clone();
        both.set_since_id(min_id.saturating_sub(1));
        let both_ids = collect_ids(self.api, self.limit, both.clone()).await?;
        info!(
            count = both_ids.len(),
            max_id,
            since_id = min_id.saturating_sub(1),
            "max_id+since_id search complete"
        );

        let [initial_label, max_label, both_label] = VARIANT_LABELS;
        Ok(ProbeOutcome::Report(ProbeReport::new(vec![
            Variant::new(initial_label, initial, initial_ids),
            Variant::new(max_label, max_only, max_only_ids),
            Variant::new(both_label, both, both_ids),
        ])))
    }
}
