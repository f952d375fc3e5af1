//! Set comparison across probe variants

use crate::search::SearchParams;
use crate::types::StatusId;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// One search run and the ids it returned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    /// Short name of the variant
    pub label: String,
    /// Params of the first search call
    pub params: SearchParams,
    /// Ids in the order they were yielded
    pub ids: Vec<StatusId>,
}

impl Variant {
    /// Create a variant
    pub fn new(label: impl Into<String>, params: SearchParams, ids: Vec<StatusId>) -> Self {
        Self {
            label: label.into(),
            params,
            ids,
        }
    }
}

/// Presence of one id across all variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeRow {
    /// The id
    pub id: StatusId,
    /// `present[i]` is true when variant `i` returned the id
    pub present: Vec<bool>,
}

/// Every id seen by any variant, newest first, with per-variant presence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub variants: Vec<Variant>,
    pub rows: Vec<ProbeRow>,
}

impl ProbeReport {
    /// Build the comparison from finished variants
    pub fn new(variants: Vec<Variant>) -> Self {
        let sets: Vec<HashSet<StatusId>> = variants
            .iter()
            .map(|v| v.ids.iter().copied().collect())
            .collect();

        let union: BTreeSet<StatusId> = sets.iter().flatten().copied().collect();

        let rows = union
            .into_iter()
            .rev()
            .map(|id| ProbeRow {
                id,
                present: sets.iter().map(|set| set.contains(&id)).collect(),
            })
            .collect();

        Self { variants, rows }
    }

    /// True when every variant returned exactly the same ids
    pub fn is_consistent(&self) -> bool {
        self.rows.iter().all(|row| row.present.iter().all(|&p| p))
    }

    /// Ids seen by some variant but not by the one at `index`, newest first
    pub fn missing_from(&self, index: usize) -> Vec<StatusId> {
        self.rows
            .iter()
            .filter(|row| !row.present.get(index).copied().unwrap_or(false))
            .map(|row| row.id)
            .collect()
    }
}
