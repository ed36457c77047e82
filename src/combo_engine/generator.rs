use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::combo_engine::{
    assembler::build_combo,
    catalog::CandidateProvider,
    config::ComboConfig,
    error::{ComboError, ComboResult},
    models::{ComboRequest, GeneratedCombo},
    sampler::ComboSampler,
};

/// Check a caller-supplied size against the configured bounds.
fn validate_size(size: i64, config: &ComboConfig) -> ComboResult<usize> {
    let min = config.min_size.max(1);
    if size < min as i64 {
        return Err(ComboError::InvalidSize { requested: size, min });
    }
    if size > config.max_size as i64 {
        return Err(ComboError::SizeTooLarge { requested: size, max: config.max_size });
    }
    Ok(size as usize)
}

/// Generate a combo for `request`.
///
/// Each call builds its own `StdRng`: from `request.rng_seed` when set (same
/// seed, same catalog → same combo), otherwise from OS entropy.
pub fn generate_combo<P>(
    provider: &P,
    request: &ComboRequest,
    config: &ComboConfig,
) -> ComboResult<GeneratedCombo>
where
    P: CandidateProvider + ?Sized,
{
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_combo_with_rng(provider, request, config, &mut rng)
}

/// Like [`generate_combo`] but draws from a caller-owned RNG.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(size = request.size, strategy = %request.strategy)
)]
pub fn generate_combo_with_rng<P, R>(
    provider: &P,
    request: &ComboRequest,
    config: &ComboConfig,
    rng: &mut R,
) -> ComboResult<GeneratedCombo>
where
    P: CandidateProvider + ?Sized,
    R: Rng + ?Sized,
{
    let size = validate_size(request.size, config)?;

    let pool = provider.candidates(&request.filters)?;
    debug!(pool_size = pool.len(), "fetched candidate pool");

    let selected = request.strategy.select(&pool, size, rng).map_err(|err| {
        if err.is_unsatisfiable() {
            warn!(requested = size, available = pool.len(), "combo request cannot be satisfied");
        }
        err
    })?;

    let combo = build_combo(&selected);
    info!(tricks = combo.tricks.len(), notation = %combo.notation, "generated combo");
    Ok(combo)
}

/// Generate an unfiltered combo of `size` tricks with the configured default
/// strategy and an entropy-seeded RNG.
pub fn generate_simple_combo<P>(
    provider: &P,
    size: i64,
    config: &ComboConfig,
) -> ComboResult<GeneratedCombo>
where
    P: CandidateProvider + ?Sized,
{
    let request = ComboRequest::new(size).with_strategy(config.default_strategy);
    generate_combo(provider, &request, config)
}
