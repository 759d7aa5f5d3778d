use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use mongodb::bson::doc;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// Simple health check endpoint, the only unauthenticated GET.
///
/// Pings the database so a dead connection shows up here instead of as a
/// stream of 500s on the data routes.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_status = if state.db.run_command(doc! { "ping": 1 }).await.is_ok() {
        "Connected"
    } else {
        "Disconnected"
    };

    let response = HealthResponse {
        status: "reelbase is healthy".to_string(),
        database: db_status.to_string(),
    };

    (StatusCode::OK, Json(response))
}
