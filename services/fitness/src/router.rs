use axum::{
    Router,
    body::Body,
    http::Request,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use ascent_core::health::healthz;
use ascent_core::middleware::{
    REQUEST_ID_HEADER, cors_layer, propagate_request_id_layer, request_id_layer,
};

use crate::handlers::{
    health::{health, readyz},
    onboarding::{list_onboarding, submit_onboarding},
    plan::{add_session, generate_plan, get_latest_plan, get_plan, save_plan},
    user::{get_user, login_user, register_user, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        // Health
        .route("/health", get(health))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/api/user/register", post(register_user))
        .route("/api/user/login", post(login_user))
        .route("/api/user/{user_id}", get(get_user).patch(update_user))
        // Onboarding
        .route("/api/onboarding/submit", post(submit_onboarding))
        .route("/api/onboarding/{user_id}", get(list_onboarding))
        // Plans
        .route("/api/plan", post(save_plan))
        .route("/api/plan/generate", post(generate_plan))
        .route("/api/plan/{user_id}", get(get_latest_plan))
        .route("/api/plans/{plan_id}", get(get_plan))
        .route("/api/plans/{plan_id}/sessions", post(add_session))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(request_span as fn(&Request<Body>) -> Span)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(propagate_request_id_layer())
                .layer(cors_layer(allowed_origins)),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id,
    )
}
