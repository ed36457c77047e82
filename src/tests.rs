//! Crate-level tests for `trick_combo_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Contract | Exact length, distinct ids, drawn from the pool, for both strategies |
//! | Errors | `InvalidSize` for 0, `InsufficientCandidates` when the pool is short |
//! | Determinism | Same seed → identical combo; strategies interchangeable behind one trait |
//! | End to end | JSON catalog → filters → flow combo → serialized response |

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::combo_engine::{
    generate_combo, CandidatePool, CandidateProvider, ComboConfig, ComboError, ComboFilters,
    ComboRequest, ComboSampler, FlowSampler, SamplingStrategy, StanceId, TrickCandidate,
    TrickCatalog, WeightedSampler,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const STRATEGIES: [SamplingStrategy; 2] = [SamplingStrategy::Weighted, SamplingStrategy::Flow];

/// Small catalog with stances; ids 1..=8.
fn stance_catalog() -> TrickCatalog {
    let s = |n| Some(StanceId(n));
    TrickCatalog::new(vec![
        TrickCandidate::new(1, "Backflip", 8).with_stances(s(1), s(1)).with_difficulty(2),
        TrickCandidate::new(2, "Webster", 5).with_stances(s(1), s(2)).with_difficulty(3),
        TrickCandidate::new(3, "Gainer", 4).with_stances(s(2), s(1)).with_difficulty(3),
        TrickCandidate::new(4, "Butterfly Kick", 6).with_stances(s(3), s(3)).with_difficulty(2),
        TrickCandidate::new(5, "540 Kick", 3).with_stances(s(3), s(2)).with_difficulty(4),
        TrickCandidate::new(6, "Cork", 2).with_stances(s(2), s(3)).with_difficulty(6),
        TrickCandidate::new(7, "Aerial", 0).with_stances(None, s(3)).with_difficulty(3),
        TrickCandidate::new(8, "Scoot", 1).with_difficulty(1),
    ])
    .unwrap()
}

fn ids(tricks: &[TrickCandidate]) -> Vec<u32> {
    tricks.iter().map(|t| t.id).collect()
}

fn arb_pool() -> impl Strategy<Value = CandidatePool> {
    let shape = (-5i32..50, prop::option::of(0u32..4), prop::option::of(0u32..4));
    prop::collection::vec(shape, 1..20).prop_map(|shapes| {
        let tricks = shapes
            .into_iter()
            .enumerate()
            .map(|(i, (weight, takeoff, landing))| {
                TrickCandidate::new(i as u32 + 1, format!("t{i}"), weight)
                    .with_stances(takeoff.map(StanceId), landing.map(StanceId))
            })
            .collect();
        CandidatePool::new(tricks).unwrap()
    })
}

// ── contract ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn selection_has_exact_length_distinct_members(
        pool in arb_pool(),
        count_seed in any::<usize>(),
        seed in any::<u64>(),
    ) {
        let count = count_seed % pool.len() + 1;
        for strategy in STRATEGIES {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = strategy.select(&pool, count, &mut rng).unwrap();
            prop_assert_eq!(picked.len(), count);
            let unique: HashSet<u32> = picked.iter().map(|t| t.id).collect();
            prop_assert_eq!(unique.len(), count);
            for t in &picked {
                prop_assert!(pool.contains(t.id));
            }
        }
    }

    #[test]
    fn oversized_requests_always_fail(
        pool in arb_pool(),
        extra in 1usize..10,
        seed in any::<u64>(),
    ) {
        let count = pool.len() + extra;
        for strategy in STRATEGIES {
            let mut rng = StdRng::seed_from_u64(seed);
            prop_assert_eq!(
                strategy.select(&pool, count, &mut rng),
                Err(ComboError::InsufficientCandidates {
                    requested: count,
                    available: pool.len(),
                })
            );
        }
    }

    #[test]
    fn zero_count_always_fails(pool in arb_pool(), seed in any::<u64>()) {
        for strategy in STRATEGIES {
            let mut rng = StdRng::seed_from_u64(seed);
            prop_assert_eq!(
                strategy.select(&pool, 0, &mut rng),
                Err(ComboError::InvalidSize { requested: 0, min: 1 })
            );
        }
    }
}

// ── errors ───────────────────────────────────────────────────────────────────

#[test]
fn two_trick_pool_cannot_make_five() {
    let pool = CandidatePool::new(vec![
        TrickCandidate::new(1, "Backflip", 1),
        TrickCandidate::new(2, "Webster", 1),
    ])
    .unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let err = WeightedSampler.select(&pool, 5, &mut rng).unwrap_err();
    assert!(err.is_unsatisfiable());
    let msg = err.to_string();
    assert!(msg.contains("need 5") && msg.contains("only 2"), "{msg}");
}

#[test]
fn empty_catalog_is_unsatisfiable_not_invalid() {
    let catalog = TrickCatalog::default();
    let err = generate_combo(&catalog, &ComboRequest::new(1), &ComboConfig::default())
        .unwrap_err();
    assert_eq!(err, ComboError::InsufficientCandidates { requested: 1, available: 0 });
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_combo() {
    let catalog = stance_catalog();
    for strategy in STRATEGIES {
        let request = ComboRequest::new(5).with_seed(12345).with_strategy(strategy);
        let a = generate_combo(&catalog, &request, &ComboConfig::default()).unwrap();
        let b = generate_combo(&catalog, &request, &ComboConfig::default()).unwrap();
        assert_eq!(a, b, "mismatch for {strategy}");
    }
}

#[test]
fn different_seeds_produce_varied_combos() {
    let catalog = stance_catalog();
    let distinct: HashSet<String> = (0..40u64)
        .map(|seed| {
            let request = ComboRequest::new(4).with_seed(seed);
            generate_combo(&catalog, &request, &ComboConfig::default()).unwrap().notation
        })
        .collect();
    assert!(distinct.len() > 10, "only {} distinct combos over 40 seeds", distinct.len());
}

#[test]
fn strategy_enum_delegates_to_sampler_structs() {
    let pool = stance_catalog().candidates(&ComboFilters::default()).unwrap();
    for seed in [1u64, 42, 999, 0xDEAD_BEEF] {
        let via_enum = |s: SamplingStrategy| {
            let mut rng = StdRng::seed_from_u64(seed);
            ids(&s.select(&pool, 6, &mut rng).unwrap())
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let weighted = ids(&WeightedSampler.select(&pool, 6, &mut rng).unwrap());
        let mut rng = StdRng::seed_from_u64(seed);
        let flow = ids(&FlowSampler.select(&pool, 6, &mut rng).unwrap());

        assert_eq!(via_enum(SamplingStrategy::Weighted), weighted, "seed={seed}");
        assert_eq!(via_enum(SamplingStrategy::Flow), flow, "seed={seed}");
    }
}

#[test]
fn sampling_leaves_pool_intact() {
    let pool = stance_catalog().candidates(&ComboFilters::default()).unwrap();
    let before = pool.clone();
    let mut rng = StdRng::seed_from_u64(8);
    FlowSampler.select(&pool, 8, &mut rng).unwrap();
    assert_eq!(pool, before);
}

// ── end to end ───────────────────────────────────────────────────────────────

#[test]
fn json_catalog_to_filtered_flow_combo() {
    let catalog = TrickCatalog::from_json_str(
        r#"[
            { "id": 1, "name": "Backflip",  "weight": 5, "difficulty": 2, "category_id": 1,
              "takeoff_stance": 1, "landing_stance": 2 },
            { "id": 2, "name": "Gainer",    "weight": 5, "difficulty": 3, "category_id": 1,
              "takeoff_stance": 2, "landing_stance": 1 },
            { "id": 3, "name": "Cork",      "weight": 5, "difficulty": 7, "category_id": 2 },
            { "id": 4, "name": "Webster",   "weight": 1, "difficulty": 3, "category_id": 3,
              "takeoff_stance": 9, "landing_stance": 9 }
        ]"#,
    )
    .unwrap();

    let request = ComboRequest::new(2)
        .with_seed(7)
        .with_strategy(SamplingStrategy::Flow)
        .with_filters(ComboFilters {
            max_difficulty: Some(5),
            exclude_category_ids: vec![3],
            ..Default::default()
        });
    let combo = generate_combo(&catalog, &request, &ComboConfig::default()).unwrap();

    // Only Backflip and Gainer survive the filters, and they flow into each other.
    let mut got: Vec<u32> = combo.tricks.iter().map(|t| t.id).collect();
    got.sort_unstable();
    assert_eq!(got, vec![1, 2]);
    assert_eq!(combo.total_difficulty, 5);

    let json = serde_json::to_value(&combo).unwrap();
    assert_eq!(json["tricks"].as_array().map(Vec::len), Some(2));
    assert!(json["tricks"][0].get("weight").is_none(), "internal fields must not leak");
}
