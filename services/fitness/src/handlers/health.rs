use axum::{Json, extract::State, http::StatusCode};

use ascent_core::health::HealthStatus;

use crate::state::AppState;

pub const SERVER_NAME: &str = "fitness-server";

// ── GET /health ──────────────────────────────────────────────────────────────

pub async fn health() -> Json<HealthStatus> {
    HealthStatus::healthy(SERVER_NAME)
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

/// Ready when the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
