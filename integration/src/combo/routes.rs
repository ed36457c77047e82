use axum::{routing::get, Router};
use super::handler::{generate, generate_simple, ComboState};

pub fn router(state: ComboState) -> Router {
    Router::new()
        .route("/api/v1/combos/generate",        get(generate))
        .route("/api/v1/combos/generate/simple", get(generate_simple))
        .with_state(state)
}
