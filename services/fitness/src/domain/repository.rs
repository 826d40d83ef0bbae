#![allow(async_fn_in_trait)]

use ascent_domain::{Plan, PlanId, Session, UserId};

use crate::domain::types::{IssuedToken, OnboardingAnswers, User};
use crate::error::FitnessServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, FitnessServiceError>;
    /// `email` must already be normalized.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, FitnessServiceError>;
    /// Fails with `UserAlreadyExists` if the email is taken.
    async fn create(&self, user: &User) -> Result<(), FitnessServiceError>;
    /// Update email and/or password hash and bump `updated_at`.
    /// Returns the updated user, `UserNotFound` if there is none.
    async fn update(
        &self,
        id: &UserId,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, FitnessServiceError>;
}

/// Repository for plan aggregates.
pub trait PlanRepository: Send + Sync {
    /// Persist the plan with all of its sessions in one transaction.
    /// Fails with `UserNotFound` if the owner does not exist.
    async fn create(&self, plan: &Plan) -> Result<(), FitnessServiceError>;

    /// Append a session to an existing plan. Fails with `PlanNotFound` if the
    /// plan does not exist, `SessionAlreadyExists` if the id is taken within it.
    async fn add_session(
        &self,
        plan_id: &PlanId,
        session: &Session,
    ) -> Result<(), FitnessServiceError>;

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, FitnessServiceError>;

    /// Most recently created plan of the user.
    async fn find_latest_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Plan>, FitnessServiceError>;
}

/// Repository for onboarding submissions.
pub trait OnboardingRepository: Send + Sync {
    /// Fails with `UserNotFound` if the owner does not exist.
    async fn create(&self, answers: &OnboardingAnswers) -> Result<(), FitnessServiceError>;

    /// All submissions of the user, oldest first.
    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<OnboardingAnswers>, FitnessServiceError>;
}

/// Password hashing capability. Plaintext never leaves this boundary.
pub trait CredentialPort: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, FitnessServiceError>;
    /// `Ok(false)` for a wrong password; `Err` only for an unreadable hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, FitnessServiceError>;
    /// Run one verification against a decoy hash. Called when the login email
    /// is unknown so that path costs as much as a wrong password.
    fn verify_decoy(&self, password: &str) -> Result<(), FitnessServiceError>;
}

/// Issues login tokens.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<IssuedToken, FitnessServiceError>;
}
