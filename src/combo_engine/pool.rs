use std::collections::HashSet;

use crate::combo_engine::{
    error::{ComboError, ComboResult},
    models::TrickCandidate,
};

/// Tricks eligible for one combo request, unique by id.
///
/// The pool is read-only input; samplers copy it into a [`WorkingSet`]
/// and never touch the caller's list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    tricks: Vec<TrickCandidate>,
}

impl CandidatePool {
    /// Build a pool, rejecting duplicate ids.
    pub fn new(tricks: Vec<TrickCandidate>) -> ComboResult<Self> {
        let mut seen = HashSet::with_capacity(tricks.len());
        for t in &tricks {
            if !seen.insert(t.id) {
                return Err(ComboError::DuplicateCandidate(t.id));
            }
        }
        Ok(CandidatePool { tricks })
    }

    pub fn len(&self) -> usize {
        self.tricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tricks.is_empty()
    }

    pub fn tricks(&self) -> &[TrickCandidate] {
        &self.tricks
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrickCandidate> {
        self.tricks.iter()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.tricks.iter().any(|t| t.id == id)
    }

    /// Fail unless `count` distinct tricks can be drawn from this pool.
    pub fn check_drawable(&self, count: usize) -> ComboResult<()> {
        if count == 0 {
            return Err(ComboError::InvalidSize { requested: 0, min: 1 });
        }
        if self.len() < count {
            return Err(ComboError::InsufficientCandidates {
                requested: count,
                available: self.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a TrickCandidate;
    type IntoIter = std::slice::Iter<'a, TrickCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.tricks.iter()
    }
}

/// Request-scoped copy of a pool that tricks are drawn out of.
pub struct WorkingSet {
    remaining: Vec<TrickCandidate>,
}

impl WorkingSet {
    /// Copy `pool` into a fresh buffer.
    pub fn from_pool(pool: &CandidatePool) -> Self {
        WorkingSet { remaining: pool.tricks.clone() }
    }

    /// Take the trick at `index` out of the set.
    ///
    /// Swap-with-last removal: O(1), and since weight sums are recomputed on
    /// every draw the reordering does not bias later draws.
    pub fn take(&mut self, index: usize) -> TrickCandidate {
        assert!(index < self.remaining.len(), "WorkingSet index out of range");
        self.remaining.swap_remove(index)
    }

    /// Take the trick with `id`, if it is still in the set.
    pub fn take_id(&mut self, id: u32) -> Option<TrickCandidate> {
        let index = self.remaining.iter().position(|t| t.id == id)?;
        Some(self.take(index))
    }

    /// Tricks not drawn yet.
    pub fn remaining(&self) -> &[TrickCandidate] {
        &self.remaining
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
