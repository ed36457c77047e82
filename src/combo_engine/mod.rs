//! Core combo engine — candidate pools, sampling strategies, and assembly.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: tricks, stances, filters, request/response structs |
//! | `error`     | `ComboError` and the `ComboResult` alias |
//! | `pool`      | `CandidatePool` — unique-by-id candidate list handed to samplers |
//! | `sampler`   | `ComboSampler` trait, weighted draw, `WeightedSampler` |
//! | `flow`      | `FlowSampler` — stance-aware variant of the weighted sampler |
//! | `assembler` | Projects a selection to `(id, name)` summaries and notation |
//! | `catalog`   | `CandidateProvider` trait and the in-memory `TrickCatalog` |
//! | `config`    | Size bounds and default strategy, loaded with figment |
//! | `generator` | Entry points `generate_combo()` / `generate_simple_combo()` |

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flow;
pub mod generator;
pub mod models;
pub mod pool;
pub mod sampler;

// Re-export the public API surface so callers can use
// `combo_engine::generate_combo` without reaching into sub-modules.
pub use catalog::{CandidateProvider, TrickCatalog};
pub use config::{ComboConfig, ConfigError};
pub use error::{ComboError, ComboResult};
pub use flow::FlowSampler;
pub use generator::{generate_combo, generate_combo_with_rng, generate_simple_combo};
pub use models::{
    ComboFilters, ComboRequest, GeneratedCombo, SamplingStrategy, StanceId, TrickCandidate,
    TrickSummary,
};
pub use pool::CandidatePool;
pub use sampler::{ComboSampler, WeightedSampler};
