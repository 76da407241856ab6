use crate::{AppState, dto::HealthResponse};
use axum::{Json, extract::State};
use std::time::{SystemTime, UNIX_EPOCH};

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    Json(HealthResponse {
        status: "healthy",
        posts: state.store.len(),
        timestamp,
    })
}
