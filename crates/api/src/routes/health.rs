//! `/health`: a JSON liveness report for the database and the template
//! registry.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::views;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when every check passes, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the embedded templates parsed. Without them no page renders.
    pub templates_loaded: bool,
}

impl HealthResponse {
    fn new(db_healthy: bool, templates_loaded: bool) -> Self {
        let status = if db_healthy && templates_loaded { "ok" } else { "degraded" };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            templates_loaded,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = pets_db::health_check(&state.pool).await.is_ok();
    let templates_loaded = views::preload().is_ok();
    if !db_healthy {
        tracing::warn!("Health check: database unreachable");
    }

    Json(HealthResponse::new(db_healthy, templates_loaded))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
