use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use trick_combo_gen::{
    generate_combo, generate_simple_combo, ComboConfig, ComboError, ComboFilters, ComboRequest,
    GeneratedCombo, SamplingStrategy, TrickCatalog,
};

// ---------------------------------------------------------------------------
// Shared state: read-only catalog and bounds; every request builds its own RNG
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct ComboState {
    pub catalog: Arc<TrickCatalog>,
    pub config: Arc<ComboConfig>,
}

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct GenerateQuery {
    pub size: i64,
    pub min_difficulty: Option<i64>,
    pub max_difficulty: Option<i64>,
    /// Comma-separated ids, e.g. `exclude_category_ids=1,4`.
    pub exclude_category_ids: Option<String>,
    pub trick_ids: Option<String>,
    pub exclude_trick_ids: Option<String>,
    pub strategy: Option<SamplingStrategy>,
}

#[derive(Deserialize)]
pub struct SimpleQuery {
    pub size: i64,
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(msg: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg.into() })))
}

fn parse_ids(field: &str, raw: Option<&str>) -> Result<Vec<u32>, ApiError> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(|s| {
            s.trim()
                .parse::<u32>()
                .map_err(|_| bad_request(format!("Invalid id in {field}: {s}")))
        })
        .collect()
}

/// 400 for malformed sizes, 422 for requests the catalog cannot satisfy.
fn to_response(err: ComboError) -> ApiError {
    let status = if err.is_caller_error() {
        StatusCode::BAD_REQUEST
    } else if err.is_unsatisfiable() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        tracing::error!(error = %err, "combo generation failed");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to generate combo" })),
        );
    };
    (status, Json(json!({ "error": err.to_string() })))
}

// ---------------------------------------------------------------------------
// GET /api/v1/combos/generate?size=...&max_difficulty=...&strategy=flow
// ---------------------------------------------------------------------------

pub async fn generate(
    State(state): State<ComboState>,
    Query(params): Query<GenerateQuery>,
) -> Result<Json<GeneratedCombo>, ApiError> {
    let exclude_category_ids =
        parse_ids("exclude_category_ids", params.exclude_category_ids.as_deref())?;
    let trick_ids = parse_ids("trick_ids", params.trick_ids.as_deref())?;
    let exclude_trick_ids = parse_ids("exclude_trick_ids", params.exclude_trick_ids.as_deref())?;
    let filters = ComboFilters {
        min_difficulty: params.min_difficulty,
        max_difficulty: params.max_difficulty,
        exclude_category_ids,
        trick_ids,
        exclude_trick_ids,
    };
    let request = ComboRequest::new(params.size)
        .with_filters(filters)
        .with_strategy(params.strategy.unwrap_or(state.config.default_strategy));

    generate_combo(state.catalog.as_ref(), &request, &state.config)
        .map(Json)
        .map_err(to_response)
}

// ---------------------------------------------------------------------------
// GET /api/v1/combos/generate/simple?size=...
// ---------------------------------------------------------------------------

pub async fn generate_simple(
    State(state): State<ComboState>,
    Query(params): Query<SimpleQuery>,
) -> Result<Json<GeneratedCombo>, ApiError> {
    generate_simple_combo(state.catalog.as_ref(), params.size, &state.config)
        .map(Json)
        .map_err(to_response)
}
