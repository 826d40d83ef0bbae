use chrono::{DateTime, Utc};

use ascent_domain::{Goal, Plan, PlanError, PlanId, Session, UserId, timestamp};

use crate::domain::repository::PlanRepository;
use crate::domain::template::{MAX_WEEKS, starter_plan};
use crate::error::FitnessServiceError;

// ── GeneratePlan ─────────────────────────────────────────────────────────────

pub struct GeneratePlanInput {
    pub user_id: UserId,
    pub goal: Goal,
    pub start_date: Option<DateTime<Utc>>,
    pub weeks: Option<i64>,
}

pub struct GeneratePlanUseCase<R: PlanRepository> {
    pub repo: R,
}

impl<R: PlanRepository> GeneratePlanUseCase<R> {
    pub async fn execute(&self, input: GeneratePlanInput) -> Result<Plan, FitnessServiceError> {
        let requested = input.weeks.unwrap_or(1);
        if !(1..=i64::from(MAX_WEEKS)).contains(&requested) {
            return Err(PlanError::OutOfRange {
                field: "weeks",
                value: requested,
            }
            .into());
        }
        let weeks = requested as u32;
        let plan = starter_plan(
            PlanId::generate(),
            input.user_id,
            input.goal,
            input.start_date.unwrap_or_else(timestamp::now),
            weeks,
        );
        plan.validate()?;
        self.repo.create(&plan).await?;
        tracing::info!(
            plan_id = %plan.id,
            user_id = %plan.user_id,
            goal = %plan.goal,
            weeks,
            "plan generated"
        );
        Ok(plan)
    }
}

// ── SavePlan ─────────────────────────────────────────────────────────────────

pub struct SavePlanUseCase<R: PlanRepository> {
    pub repo: R,
}

impl<R: PlanRepository> SavePlanUseCase<R> {
    /// Store a client-authored plan as-is after re-checking the aggregate.
    pub async fn execute(&self, plan: Plan) -> Result<Plan, FitnessServiceError> {
        plan.validate()?;
        self.repo.create(&plan).await?;
        tracing::info!(plan_id = %plan.id, user_id = %plan.user_id, "plan stored");
        Ok(plan)
    }
}

// ── GetPlan ──────────────────────────────────────────────────────────────────

pub struct GetPlanUseCase<R: PlanRepository> {
    pub repo: R,
}

impl<R: PlanRepository> GetPlanUseCase<R> {
    pub async fn execute(&self, plan_id: &PlanId) -> Result<Plan, FitnessServiceError> {
        self.repo
            .find_by_id(plan_id)
            .await?
            .ok_or(FitnessServiceError::PlanNotFound)
    }
}

// ── GetLatestPlan ────────────────────────────────────────────────────────────

pub struct GetLatestPlanUseCase<R: PlanRepository> {
    pub repo: R,
}

impl<R: PlanRepository> GetLatestPlanUseCase<R> {
    pub async fn execute(&self, user_id: &UserId) -> Result<Plan, FitnessServiceError> {
        self.repo
            .find_latest_by_user(user_id)
            .await?
            .ok_or(FitnessServiceError::PlanNotFound)
    }
}

// ── AddSession ───────────────────────────────────────────────────────────────

pub struct AddSessionUseCase<R: PlanRepository> {
    pub repo: R,
}

impl<R: PlanRepository> AddSessionUseCase<R> {
    pub async fn execute(
        &self,
        plan_id: &PlanId,
        session: Session,
    ) -> Result<Session, FitnessServiceError> {
        session.validate()?;
        self.repo.add_session(plan_id, &session).await?;
        Ok(session)
    }
}
