use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Body of the public `GET /health` endpoint.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub server: &'static str,
}

impl HealthStatus {
    pub fn healthy(server: &'static str) -> Json<Self> {
        Json(Self {
            status: "healthy",
            server,
        })
    }
}

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
