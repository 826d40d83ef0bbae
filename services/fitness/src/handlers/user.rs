use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ascent_domain::UserId;

use crate::domain::types::User;
use crate::error::FitnessServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    GetUserUseCase, LoginInput, LoginUseCase, RegisterUserInput, RegisterUserUseCase,
    UpdateUserInput, UpdateUserUseCase,
};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[serde(serialize_with = "ascent_domain::timestamp::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "ascent_domain::timestamp::serialize")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

// ── POST /api/user/register ──────────────────────────────────────────────────

pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), FitnessServiceError> {
    let Json(body) = payload?;
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
        credentials: state.credentials(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /api/user/login ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(serialize_with = "ascent_domain::timestamp::serialize")]
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

pub async fn login_user(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, FitnessServiceError> {
    let Json(body) = payload?;
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        credentials: state.credentials(),
        tokens: state.token_issuer(),
    };
    let output = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        token: output.token.token,
        expires_at: output.token.expires_at,
        user: output.user.into(),
    }))
}

// ── GET /api/user/{user_id} ──────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, FitnessServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&UserId::from(user_id)).await?;
    Ok(Json(user.into()))
}

// ── PATCH /api/user/{user_id} ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, FitnessServiceError> {
    let Json(body) = payload?;
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
        credentials: state.credentials(),
    };
    let user = usecase
        .execute(
            &UserId::from(user_id),
            UpdateUserInput {
                email: body.email,
                password: body.password,
            },
        )
        .await?;
    Ok(Json(user.into()))
}
