//! # trick_combo_gen
//!
//! Randomised trick-combo generation for a tricking catalog.
//!
//! A combo is an ordered sequence of tricks meant to be performed back to
//! back. This library picks those tricks from a filtered candidate pool with
//! weighted sampling without replacement: a trick's `weight` sets how likely
//! it is to be drawn, and no trick appears twice in one combo.
//!
//! ## How it works
//!
//! 1. Build a [`TrickCatalog`] (or implement [`CandidateProvider`] over your
//!    own data source).
//! 2. Create a [`ComboRequest`] with a size, optional [`ComboFilters`], a
//!    [`SamplingStrategy`] and an optional RNG seed.
//! 3. Call [`generate_combo`] — the engine validates the size, asks the
//!    provider for candidates, draws the tricks and assembles a
//!    [`GeneratedCombo`].
//!
//! ## Strategies
//!
//! - **`Weighted`** (default): each draw is proportional to `max(weight, 1)`.
//! - **`Flow`**: after the first pick, prefers tricks whose takeoff stance
//!   matches the previous trick's landing stance. Falls back to the whole
//!   remaining pool when nothing matches, so it never fails because of
//!   stances.
//!
//! ## Quick start
//!
//! ```rust
//! use trick_combo_gen::{
//!     generate_combo, ComboConfig, ComboRequest, SamplingStrategy, TrickCandidate, TrickCatalog,
//! };
//!
//! let catalog = TrickCatalog::new(vec![
//!     TrickCandidate::new(1, "Backflip", 10),
//!     TrickCandidate::new(2, "540 Kick", 5),
//!     TrickCandidate::new(3, "Webster", 3),
//! ])
//! .unwrap();
//!
//! let combo = generate_combo(
//!     &catalog,
//!     &ComboRequest::new(3).with_seed(42).with_strategy(SamplingStrategy::Flow),
//!     &ComboConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(combo.tricks.len(), 3);
//! println!("{}", combo.notation);
//! ```

pub mod combo_engine;

// Convenience re-exports so callers can use `trick_combo_gen::generate_combo`
// directly without reaching into `combo_engine::`.
pub use combo_engine::{
    generate_combo, generate_combo_with_rng, generate_simple_combo, CandidatePool,
    CandidateProvider, ComboConfig, ComboError, ComboFilters, ComboRequest, ComboResult,
    ComboSampler, ConfigError, FlowSampler, GeneratedCombo, SamplingStrategy, StanceId,
    TrickCandidate, TrickCatalog, TrickSummary, WeightedSampler,
};

#[cfg(test)]
mod tests;
