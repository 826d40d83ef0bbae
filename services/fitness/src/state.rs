use sea_orm::DatabaseConnection;

use crate::infra::credential::Argon2Credentials;
use crate::infra::db::{DbOnboardingRepository, DbPlanRepository, DbUserRepository};
use crate::infra::token::JwtTokenIssuer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn plan_repo(&self) -> DbPlanRepository {
        DbPlanRepository {
            db: self.db.clone(),
        }
    }

    pub fn onboarding_repo(&self) -> DbOnboardingRepository {
        DbOnboardingRepository {
            db: self.db.clone(),
        }
    }

    pub fn credentials(&self) -> Argon2Credentials {
        Argon2Credentials
    }

    pub fn token_issuer(&self) -> JwtTokenIssuer {
        JwtTokenIssuer {
            secret: self.jwt_secret.clone(),
            ttl_secs: self.token_ttl_secs,
        }
    }
}
