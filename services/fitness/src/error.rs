use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use ascent_domain::PlanError;

/// Fitness service error variants.
#[derive(Debug, thiserror::Error)]
pub enum FitnessServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("plan not found")]
    PlanNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("plan already exists")]
    PlanAlreadyExists,
    #[error("session already exists")]
    SessionAlreadyExists,
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {min} characters")]
    WeakPassword { min: usize },
    #[error("invalid email or password")]
    InvalidCredential,
    #[error("missing data")]
    MissingData,
    #[error("{0}")]
    MalformedInput(String),
    #[error(transparent)]
    InvalidPlan(#[from] PlanError),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl FitnessServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PlanNotFound => "PLAN_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::PlanAlreadyExists => "PLAN_ALREADY_EXISTS",
            Self::SessionAlreadyExists => "SESSION_ALREADY_EXISTS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::MissingData => "MISSING_DATA",
            Self::MalformedInput(_) => "MALFORMED_INPUT",
            Self::InvalidPlan(e) => e.kind(),
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<JsonRejection> for FitnessServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedInput(rejection.body_text())
    }
}

impl IntoResponse for FitnessServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::PlanNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists | Self::PlanAlreadyExists | Self::SessionAlreadyExists => {
                StatusCode::CONFLICT
            }
            Self::InvalidEmail
            | Self::WeakPassword { .. }
            | Self::MissingData
            | Self::MalformedInput(_)
            | Self::InvalidPlan(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredential => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            let chain = format!("{e:#}");
            tracing::error!(error = %chain, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
