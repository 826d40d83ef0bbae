use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use ascent_domain::UserId;

use crate::domain::types::OnboardingAnswers;
use crate::error::FitnessServiceError;
use crate::state::AppState;
use crate::usecase::onboarding::{
    ListOnboardingUseCase, SubmitOnboardingInput, SubmitOnboardingUseCase,
};

// ── POST /api/onboarding/submit ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitOnboardingRequest {
    pub user_id: String,
    pub answers: Map<String, Value>,
}

#[derive(Serialize)]
pub struct SubmitOnboardingResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub user_id: String,
    pub id: String,
}

pub async fn submit_onboarding(
    State(state): State<AppState>,
    payload: Result<Json<SubmitOnboardingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitOnboardingResponse>), FitnessServiceError> {
    let Json(body) = payload?;
    let usecase = SubmitOnboardingUseCase {
        repo: state.onboarding_repo(),
    };
    let stored = usecase
        .execute(SubmitOnboardingInput {
            user_id: UserId::from(body.user_id),
            answers: body.answers,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitOnboardingResponse {
            status: "success",
            message: "Onboarding answers processed successfully",
            user_id: stored.user_id.into_inner(),
            id: stored.id.into_inner(),
        }),
    ))
}

// ── GET /api/onboarding/{user_id} ────────────────────────────────────────────

#[derive(Serialize)]
pub struct OnboardingResponse {
    pub id: String,
    pub user_id: String,
    pub answers: Map<String, Value>,
    #[serde(serialize_with = "ascent_domain::timestamp::serialize")]
    pub created_at: DateTime<Utc>,
}

impl From<OnboardingAnswers> for OnboardingResponse {
    fn from(a: OnboardingAnswers) -> Self {
        Self {
            id: a.id.into_inner(),
            user_id: a.user_id.into_inner(),
            answers: a.answers,
            created_at: a.created_at,
        }
    }
}

pub async fn list_onboarding(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<OnboardingResponse>>, FitnessServiceError> {
    let usecase = ListOnboardingUseCase {
        repo: state.onboarding_repo(),
    };
    let submissions = usecase.execute(&UserId::from(user_id)).await?;
    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}
