use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use ascent_domain::wire::{PlanWire, SessionWire};
use ascent_domain::{Goal, Plan, PlanError, PlanId, Session, UserId};

use crate::error::FitnessServiceError;
use crate::state::AppState;
use crate::usecase::plan::{
    AddSessionUseCase, GeneratePlanInput, GeneratePlanUseCase, GetLatestPlanUseCase,
    GetPlanUseCase, SavePlanUseCase,
};

// ── POST /api/plan/generate ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeneratePlanRequest {
    pub user_id: String,
    pub goal: String,
    #[serde(default, with = "ascent_domain::timestamp::option")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub weeks: Option<i64>,
}

pub async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Plan>), FitnessServiceError> {
    let Json(body) = payload?;
    let goal = body.goal.parse::<Goal>().map_err(PlanError::from)?;
    let usecase = GeneratePlanUseCase {
        repo: state.plan_repo(),
    };
    let plan = usecase
        .execute(GeneratePlanInput {
            user_id: UserId::from(body.user_id),
            goal,
            start_date: body.start_date,
            weeks: body.weeks,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

// ── POST /api/plan ───────────────────────────────────────────────────────────

/// Store a client-authored plan. A missing `plan_id` is generated.
pub async fn save_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanWire>, JsonRejection>,
) -> Result<(StatusCode, Json<Plan>), FitnessServiceError> {
    let Json(wire) = payload?;
    let plan = Plan::try_from(wire.with_generated_id())?;
    let usecase = SavePlanUseCase {
        repo: state.plan_repo(),
    };
    let plan = usecase.execute(plan).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

// ── GET /api/plan/{user_id} ──────────────────────────────────────────────────

pub async fn get_latest_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Plan>, FitnessServiceError> {
    let usecase = GetLatestPlanUseCase {
        repo: state.plan_repo(),
    };
    Ok(Json(usecase.execute(&UserId::from(user_id)).await?))
}

// ── GET /api/plans/{plan_id} ─────────────────────────────────────────────────

pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> Result<Json<Plan>, FitnessServiceError> {
    let usecase = GetPlanUseCase {
        repo: state.plan_repo(),
    };
    Ok(Json(usecase.execute(&PlanId::from(plan_id)).await?))
}

// ── POST /api/plans/{plan_id}/sessions ───────────────────────────────────────

pub async fn add_session(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
    payload: Result<Json<SessionWire>, JsonRejection>,
) -> Result<(StatusCode, Json<Session>), FitnessServiceError> {
    let Json(wire) = payload?;
    let session = Session::try_from(wire)?;
    let usecase = AddSessionUseCase {
        repo: state.plan_repo(),
    };
    let session = usecase.execute(&PlanId::from(plan_id), session).await?;
    Ok((StatusCode::CREATED, Json(session)))
}
