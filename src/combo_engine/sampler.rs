//! Weighted sampling without replacement.
//!
//! Every draw recomputes the total effective weight of what is left, picks a
//! uniform `target` in `[0, total)`, and walks the candidates accumulating
//! weights until the running sum exceeds `target` (CDF inversion). The winner
//! is swap-removed from the working set and appended to the output, so the
//! output order is the draw order.

use rand::Rng;

use crate::combo_engine::{
    error::ComboResult,
    flow::FlowSampler,
    models::{SamplingStrategy, TrickCandidate},
    pool::{CandidatePool, WorkingSet},
};

/// A way of drawing `count` distinct tricks from a pool.
///
/// Implementations must fail with `InvalidSize` when `count == 0` and with
/// `InsufficientCandidates` when the pool is too small, and must otherwise
/// return exactly `count` tricks.
pub trait ComboSampler {
    fn select<R: Rng + ?Sized>(
        &self,
        pool: &CandidatePool,
        count: usize,
        rng: &mut R,
    ) -> ComboResult<Vec<TrickCandidate>>;
}

/// Pick one index of `remaining` among the candidates `eligible` admits,
/// with probability proportional to effective weight.
///
/// Returns `None` only when no candidate is eligible. Ties in the running
/// sum go to the first candidate in slice order that crosses `target`.
pub fn weighted_pick<R, F>(rng: &mut R, remaining: &[TrickCandidate], eligible: F) -> Option<usize>
where
    R: Rng + ?Sized,
    F: Fn(&TrickCandidate) -> bool,
{
    let total: u64 = remaining
        .iter()
        .filter(|t| eligible(*t))
        .map(TrickCandidate::effective_weight)
        .sum();
    if total == 0 {
        return None;
    }

    let target = rng.gen_range(0..total);
    let mut cumulative = 0u64;
    let mut last = None;
    for (idx, trick) in remaining.iter().enumerate() {
        if !eligible(trick) {
            continue;
        }
        cumulative += trick.effective_weight();
        if cumulative > target {
            return Some(idx);
        }
        last = Some(idx);
    }
    // cumulative ends at `total > target`, so the loop always returns.
    last
}

/// Plain weighted draw; ignores stances entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSampler;

impl ComboSampler for WeightedSampler {
    fn select<R: Rng + ?Sized>(
        &self,
        pool: &CandidatePool,
        count: usize,
        rng: &mut R,
    ) -> ComboResult<Vec<TrickCandidate>> {
        pool.check_drawable(count)?;

        let mut set = WorkingSet::from_pool(pool);
        let mut selected = Vec::with_capacity(count);
        while selected.len() < count {
            let Some(idx) = weighted_pick(rng, set.remaining(), |_| true) else {
                break;
            };
            selected.push(set.take(idx));
        }
        Ok(selected)
    }
}

/// Callers pick a strategy by value; both variants share the same contract.
impl ComboSampler for SamplingStrategy {
    fn select<R: Rng + ?Sized>(
        &self,
        pool: &CandidatePool,
        count: usize,
        rng: &mut R,
    ) -> ComboResult<Vec<TrickCandidate>> {
        match self {
            SamplingStrategy::Weighted => WeightedSampler.select(pool, count, rng),
            SamplingStrategy::Flow     => FlowSampler.select(pool, count, rng),
        }
    }
}
