use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Trick primitives
// ---------------------------------------------------------------------------

/// Takeoff / landing orientation category (e.g. "complete", "hyper", "mega").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StanceId(pub u32);

impl fmt::Display for StanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stance#{}", self.0)
    }
}

/// One trick as seen by the samplers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickCandidate {
    pub id: u32,
    pub name: String,
    /// Relative selection likelihood. Values below 1 count as 1.
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub takeoff_stance: Option<StanceId>,
    #[serde(default)]
    pub landing_stance: Option<StanceId>,
    #[serde(default)]
    pub difficulty: Option<i64>,
    /// Flip category, used by the category-exclusion filter.
    #[serde(default)]
    pub category_id: Option<u32>,
}

impl TrickCandidate {
    /// A trick with no stances, difficulty, or category.
    pub fn new(id: u32, name: impl Into<String>, weight: i32) -> Self {
        TrickCandidate {
            id,
            name: name.into(),
            weight,
            takeoff_stance: None,
            landing_stance: None,
            difficulty: None,
            category_id: None,
        }
    }

    pub fn with_stances(mut self, takeoff: Option<StanceId>, landing: Option<StanceId>) -> Self {
        self.takeoff_stance = takeoff;
        self.landing_stance = landing;
        self
    }

    pub fn with_difficulty(mut self, difficulty: i64) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_category(mut self, category_id: u32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Weight used by the draw: never below 1, so no trick is unselectable.
    pub fn effective_weight(&self) -> u64 {
        self.weight.max(1) as u64
    }

    /// Can this trick be thrown out of a landing in `landing`?
    ///
    /// Tricks without a takeoff requirement fit anywhere, and an unknown
    /// landing places no constraint on what follows.
    pub fn flows_from(&self, landing: Option<StanceId>) -> bool {
        match (landing, self.takeoff_stance) {
            (None, _) | (_, None) => true,
            (Some(l), Some(t)) => l == t,
        }
    }

    /// Public `(id, name)` projection.
    pub fn summary(&self) -> TrickSummary {
        TrickSummary { id: self.id, name: self.name.clone() }
    }
}

impl fmt::Display for TrickCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// Minimal public form of a trick, as returned in combos and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickSummary {
    pub id: u32,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingStrategy {
    /// Plain weighted draw without replacement.
    #[default]
    Weighted,
    /// Weighted draw biased toward stance-compatible follow-ups.
    Flow,
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingStrategy::Weighted => write!(f, "weighted"),
            SamplingStrategy::Flow     => write!(f, "flow"),
        }
    }
}

/// Attribute filters applied by a [`CandidateProvider`](super::CandidateProvider)
/// before the pool reaches a sampler. All fields are optional; the default
/// filter admits every trick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboFilters {
    /// Inclusive lower difficulty bound.
    pub min_difficulty: Option<i64>,
    /// Inclusive upper difficulty bound.
    pub max_difficulty: Option<i64>,
    pub exclude_category_ids: Vec<u32>,
    /// When non-empty, only these tricks are eligible.
    pub trick_ids: Vec<u32>,
    pub exclude_trick_ids: Vec<u32>,
}

impl ComboFilters {
    /// Does `trick` pass every active filter?
    ///
    /// An unrated trick fails any active difficulty bound.
    pub fn admits(&self, trick: &TrickCandidate) -> bool {
        if let Some(min) = self.min_difficulty {
            if !trick.difficulty.is_some_and(|d| d >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_difficulty {
            if !trick.difficulty.is_some_and(|d| d <= max) {
                return false;
            }
        }
        if let Some(category) = trick.category_id {
            if self.exclude_category_ids.contains(&category) {
                return false;
            }
        }
        if !self.trick_ids.is_empty() && !self.trick_ids.contains(&trick.id) {
            return false;
        }
        !self.exclude_trick_ids.contains(&trick.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboRequest {
    /// Requested number of tricks, as received from the caller.
    pub size: i64,
    #[serde(default)]
    pub filters: ComboFilters,
    #[serde(default)]
    pub strategy: SamplingStrategy,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl ComboRequest {
    /// Unfiltered weighted request seeded from entropy.
    pub fn new(size: i64) -> Self {
        ComboRequest {
            size,
            filters: ComboFilters::default(),
            strategy: SamplingStrategy::default(),
            rng_seed: None,
        }
    }

    pub fn with_filters(mut self, filters: ComboFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCombo {
    /// Tricks in performance order.
    pub tricks: Vec<TrickSummary>,
    /// Sum of difficulty ratings; unrated tricks count as 0.
    pub total_difficulty: i64,
    /// Human-readable sequence, e.g. "Backflip > 540 Kick > Webster".
    pub notation: String,
}
