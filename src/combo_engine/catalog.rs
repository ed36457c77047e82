//! Candidate providers: where combo pools come from.
//!
//! The engine only needs a filtered [`CandidatePool`]. Production deployments
//! implement [`CandidateProvider`] over their own store; [`TrickCatalog`] is
//! the in-memory implementation used by the demo, tests, and small services.

use std::collections::HashSet;

use crate::combo_engine::{
    error::{ComboError, ComboResult},
    models::{ComboFilters, TrickCandidate, TrickSummary},
    pool::CandidatePool,
};

/// Supplies the tricks eligible for one request.
pub trait CandidateProvider {
    fn candidates(&self, filters: &ComboFilters) -> ComboResult<CandidatePool>;
}

/// Read-only, unique-by-id list of tricks held in memory.
#[derive(Debug, Clone, Default)]
pub struct TrickCatalog {
    tricks: Vec<TrickCandidate>,
}

impl TrickCatalog {
    pub fn new(tricks: Vec<TrickCandidate>) -> ComboResult<Self> {
        let mut seen = HashSet::with_capacity(tricks.len());
        if let Some(dup) = tricks.iter().find(|t| !seen.insert(t.id)) {
            return Err(ComboError::DuplicateCandidate(dup.id));
        }
        Ok(TrickCatalog { tricks })
    }

    /// Load a catalog from a JSON array of tricks.
    ///
    /// Only `id` and `name` are required; `weight` defaults to 0 (drawn as 1)
    /// and the optional attributes default to unset.
    pub fn from_json_str(json: &str) -> ComboResult<Self> {
        let tricks: Vec<TrickCandidate> = serde_json::from_str(json)?;
        Self::new(tricks)
    }

    pub fn get(&self, id: u32) -> Option<&TrickCandidate> {
        self.tricks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tricks.is_empty()
    }

    /// `(id, name)` listing sorted by name, for pickers and dropdowns.
    pub fn summaries(&self) -> Vec<TrickSummary> {
        let mut out: Vec<TrickSummary> = self.tricks.iter().map(TrickCandidate::summary).collect();
        out.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        out
    }
}

impl CandidateProvider for TrickCatalog {
    /// Every trick passing `filters`, in catalog order.
    fn candidates(&self, filters: &ComboFilters) -> ComboResult<CandidatePool> {
        let eligible = self
            .tricks
            .iter()
            .filter(|t| filters.admits(t))
            .cloned()
            .collect();
        CandidatePool::new(eligible)
    }
}
