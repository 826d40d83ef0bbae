use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};
use serde_json::Value;

use ascent_domain::{
    Block, Plan, PlanId, PlannedWeek, Session, SessionId, UserId, timestamp,
};
use ascent_fitness_schema::{onboarding_answers, plans, sessions, users};

use crate::domain::repository::{OnboardingRepository, PlanRepository, UserRepository};
use crate::domain::types::{OnboardingAnswers, User};
use crate::error::FitnessServiceError;

// ── Constraint classification ────────────────────────────────────────────────

enum Violation {
    Unique,
    ForeignKey,
}

fn violation(err: &DbErr) -> Option<Violation> {
    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(_) => Some(Violation::Unique),
        SqlErr::ForeignKeyConstraintViolation(_) => Some(Violation::ForeignKey),
        _ => None,
    }
}

fn internal(err: DbErr, context: &'static str) -> FitnessServiceError {
    FitnessServiceError::Internal(anyhow::Error::new(err).context(context))
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, FitnessServiceError> {
        let model = users::Entity::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, FitnessServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), FitnessServiceError> {
        let model = users::ActiveModel {
            id: Set(user.id.to_string()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };
        users::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => FitnessServiceError::UserAlreadyExists,
                _ => internal(e, "create user"),
            })?;
        Ok(())
    }

    async fn update(
        &self,
        id: &UserId,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, FitnessServiceError> {
        let mut am = users::ActiveModel {
            id: Set(id.to_string()),
            ..Default::default()
        };
        if let Some(new_email) = email {
            am.email = Set(new_email.to_owned());
        }
        if let Some(new_hash) = password_hash {
            am.password_hash = Set(new_hash.to_owned());
        }
        am.updated_at = Set(timestamp::now());
        match am.update(&self.db).await {
            Ok(model) => Ok(user_from_model(model)),
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => {
                Err(FitnessServiceError::UserNotFound)
            }
            Err(e) => Err(match violation(&e) {
                Some(Violation::Unique) => FitnessServiceError::UserAlreadyExists,
                _ => internal(e, "update user"),
            }),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId::from(model.id),
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Plan repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanRepository {
    pub db: DatabaseConnection,
}

impl PlanRepository for DbPlanRepository {
    async fn create(&self, plan: &Plan) -> Result<(), FitnessServiceError> {
        let header = plans::ActiveModel {
            id: Set(plan.id.to_string()),
            user_id: Set(plan.user_id.to_string()),
            goal: Set(plan.goal.as_str().to_owned()),
            start_date: Set(plan.start_date),
            notes_coach: Set(plan.notes_coach.clone()),
            weeks: Set(serde_json::to_value(&plan.weeks).context("encode plan weeks")?),
            created_at: Set(timestamp::now()),
        };
        let rows = plan
            .sessions
            .iter()
            .enumerate()
            .map(|(position, session)| session_row(&plan.id, position, session))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let txn = self.db.begin().await.context("begin plan transaction")?;
        plans::Entity::insert(header)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => FitnessServiceError::PlanAlreadyExists,
                Some(Violation::ForeignKey) => FitnessServiceError::UserNotFound,
                None => internal(e, "insert plan"),
            })?;
        for row in rows {
            sessions::Entity::insert(row)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| internal(e, "insert plan session"))?;
        }
        txn.commit().await.context("commit plan transaction")?;
        Ok(())
    }

    async fn add_session(
        &self,
        plan_id: &PlanId,
        session: &Session,
    ) -> Result<(), FitnessServiceError> {
        let txn = self.db.begin().await.context("begin session transaction")?;
        let position = sessions::Entity::find()
            .filter(sessions::Column::PlanId.eq(plan_id.as_str()))
            .count(&txn)
            .await
            .context("count plan sessions")?;
        let row = session_row(plan_id, position as usize, session)?;
        sessions::Entity::insert(row)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => FitnessServiceError::SessionAlreadyExists,
                Some(Violation::ForeignKey) => FitnessServiceError::PlanNotFound,
                None => internal(e, "insert session"),
            })?;
        txn.commit().await.context("commit session transaction")?;
        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, FitnessServiceError> {
        let model = plans::Entity::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .context("find plan by id")?;
        match model {
            Some(model) => Ok(Some(self.load(model).await?)),
            None => Ok(None),
        }
    }

    async fn find_latest_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Plan>, FitnessServiceError> {
        let model = plans::Entity::find()
            .filter(plans::Column::UserId.eq(user_id.as_str()))
            .order_by_desc(plans::Column::CreatedAt)
            .order_by_desc(plans::Column::Id)
            .one(&self.db)
            .await
            .context("find latest plan by user")?;
        match model {
            Some(model) => Ok(Some(self.load(model).await?)),
            None => Ok(None),
        }
    }
}

impl DbPlanRepository {
    async fn load(&self, header: plans::Model) -> Result<Plan, FitnessServiceError> {
        let rows = sessions::Entity::find()
            .filter(sessions::Column::PlanId.eq(header.id.as_str()))
            .order_by_asc(sessions::Column::Position)
            .order_by_asc(sessions::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("load plan sessions")?;
        Ok(plan_from_models(header, rows)?)
    }
}

fn session_row(
    plan_id: &PlanId,
    position: usize,
    session: &Session,
) -> anyhow::Result<sessions::ActiveModel> {
    Ok(sessions::ActiveModel {
        plan_id: Set(plan_id.to_string()),
        id: Set(session.id.to_string()),
        position: Set(i32::try_from(position).context("session position overflow")?),
        title: Set(session.title.clone()),
        session_data: Set(serde_json::to_value(&session.blocks).context("encode session blocks")?),
        created_at: Set(timestamp::now()),
    })
}

/// Rebuild the aggregate from its rows. A document that no longer decodes, or
/// an aggregate that fails validation, is a storage fault.
fn plan_from_models(header: plans::Model, rows: Vec<sessions::Model>) -> anyhow::Result<Plan> {
    let weeks: Vec<PlannedWeek> = serde_json::from_value(header.weeks)
        .with_context(|| format!("decode stored weeks of plan {}", header.id))?;
    let sessions = rows
        .into_iter()
        .map(|row| {
            let blocks: Vec<Block> = serde_json::from_value(row.session_data)
                .with_context(|| format!("decode stored session {}", row.id))?;
            Ok(Session {
                id: SessionId::from(row.id),
                title: row.title,
                blocks,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let plan = Plan {
        goal: header
            .goal
            .parse()
            .with_context(|| format!("decode stored goal of plan {}", header.id))?,
        id: PlanId::from(header.id),
        user_id: UserId::from(header.user_id),
        start_date: header.start_date,
        notes_coach: header.notes_coach,
        weeks,
        sessions,
    };
    plan.validate()
        .with_context(|| format!("stored plan {} is inconsistent", plan.id))?;
    Ok(plan)
}

// ── Onboarding repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOnboardingRepository {
    pub db: DatabaseConnection,
}

impl OnboardingRepository for DbOnboardingRepository {
    async fn create(&self, answers: &OnboardingAnswers) -> Result<(), FitnessServiceError> {
        let model = onboarding_answers::ActiveModel {
            id: Set(answers.id.to_string()),
            user_id: Set(answers.user_id.to_string()),
            answers: Set(Value::Object(answers.answers.clone())),
            created_at: Set(answers.created_at),
        };
        onboarding_answers::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::ForeignKey) => FitnessServiceError::UserNotFound,
                _ => internal(e, "create onboarding answers"),
            })?;
        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<OnboardingAnswers>, FitnessServiceError> {
        let models = onboarding_answers::Entity::find()
            .filter(onboarding_answers::Column::UserId.eq(user_id.as_str()))
            .order_by_asc(onboarding_answers::Column::CreatedAt)
            .order_by_asc(onboarding_answers::Column::Id)
            .all(&self.db)
            .await
            .context("list onboarding answers")?;
        Ok(models
            .into_iter()
            .map(onboarding_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?)
    }
}

fn onboarding_from_model(model: onboarding_answers::Model) -> anyhow::Result<OnboardingAnswers> {
    let Value::Object(answers) = model.answers else {
        anyhow::bail!("stored onboarding answers {} are not an object", model.id);
    };
    Ok(OnboardingAnswers {
        id: model.id.into(),
        user_id: model.user_id.into(),
        answers,
        created_at: model.created_at,
    })
}
