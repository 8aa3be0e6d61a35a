use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use crate::store::FishingResultStore;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    records: usize,
    timestamp: i64,
}

// GET /health - Liveness plus the current record count
pub async fn health_check(
    State(store): State<FishingResultStore>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok",
        records: store.len().await,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
