use serde_json::{Map, Value};

use ascent_domain::{OnboardingId, UserId, timestamp};

use crate::domain::repository::OnboardingRepository;
use crate::domain::types::OnboardingAnswers;
use crate::error::FitnessServiceError;

// ── SubmitOnboarding ─────────────────────────────────────────────────────────

pub struct SubmitOnboardingInput {
    pub user_id: UserId,
    pub answers: Map<String, Value>,
}

pub struct SubmitOnboardingUseCase<R: OnboardingRepository> {
    pub repo: R,
}

impl<R: OnboardingRepository> SubmitOnboardingUseCase<R> {
    pub async fn execute(
        &self,
        input: SubmitOnboardingInput,
    ) -> Result<OnboardingAnswers, FitnessServiceError> {
        let submission = OnboardingAnswers {
            id: OnboardingId::generate(),
            user_id: input.user_id,
            answers: input.answers,
            created_at: timestamp::now(),
        };
        self.repo.create(&submission).await?;
        tracing::info!(
            user_id = %submission.user_id,
            answers = submission.answers.len(),
            "onboarding answers stored"
        );
        Ok(submission)
    }
}

// ── ListOnboarding ───────────────────────────────────────────────────────────

pub struct ListOnboardingUseCase<R: OnboardingRepository> {
    pub repo: R,
}

impl<R: OnboardingRepository> ListOnboardingUseCase<R> {
    pub async fn execute(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<OnboardingAnswers>, FitnessServiceError> {
        self.repo.list_by_user(user_id).await
    }
}
