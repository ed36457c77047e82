//! Stance-aware sampling.
//!
//! After the first pick, each draw is restricted to tricks that can be thrown
//! out of the previous trick's landing: no takeoff requirement, or a takeoff
//! stance equal to that landing. When nothing left qualifies the draw falls
//! back to everything remaining, so the flow preference biases combos but
//! can never shorten or fail one.

use rand::Rng;

use crate::combo_engine::{
    error::ComboResult,
    models::TrickCandidate,
    pool::{CandidatePool, WorkingSet},
    sampler::{weighted_pick, ComboSampler},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct FlowSampler;

impl ComboSampler for FlowSampler {
    fn select<R: Rng + ?Sized>(
        &self,
        pool: &CandidatePool,
        count: usize,
        rng: &mut R,
    ) -> ComboResult<Vec<TrickCandidate>> {
        pool.check_drawable(count)?;

        let mut set = WorkingSet::from_pool(pool);
        let mut selected: Vec<TrickCandidate> = Vec::with_capacity(count);
        while selected.len() < count {
            let landing = selected.last().and_then(|t| t.landing_stance);
            let pick = weighted_pick(rng, set.remaining(), |t| t.flows_from(landing))
                .or_else(|| weighted_pick(rng, set.remaining(), |_| true));
            let Some(idx) = pick else {
                break;
            };
            selected.push(set.take(idx));
        }
        Ok(selected)
    }
}
