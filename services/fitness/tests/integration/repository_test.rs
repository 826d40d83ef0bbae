use serde_json::{Map, Value, json};
use sea_orm_migration::MigratorTrait;

use ascent_domain::{OnboardingId, Plan, PlanId, SessionId, UserId};
use ascent_fitness::domain::repository::{OnboardingRepository, PlanRepository, UserRepository};
use ascent_fitness::domain::types::OnboardingAnswers;
use ascent_fitness::error::FitnessServiceError;
use ascent_fitness::infra::db::{DbOnboardingRepository, DbPlanRepository, DbUserRepository};
use ascent_fitness_migration::Migrator;
use ascent_testing::fixture::Fixture;
use ascent_testing::plan::{sample_plan, sample_session};

use crate::helpers::{seed_user, test_db};

// ── Schema ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_tolerate_running_migrations_again() {
    let db = test_db().await;
    Migrator::up(&db, None).await.unwrap();
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_second_user_with_same_email() {
    let db = test_db().await;
    let mut duplicate = seed_user(&db, "user-1", "a@example.com").await;
    duplicate.id = UserId::new("user-2");

    let result = DbUserRepository { db }.create(&duplicate).await;
    assert!(
        matches!(result, Err(FitnessServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_find_user_by_email_and_id() {
    let db = test_db().await;
    let user = seed_user(&db, "user-1", "a@example.com").await;
    let repo = DbUserRepository { db };

    let by_email = repo.find_by_email("a@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);
    assert!(repo.find_by_id(&UserId::new("nobody")).await.unwrap().is_none());
}

#[tokio::test]
async fn should_update_email_and_bump_updated_at() {
    let db = test_db().await;
    let user = seed_user(&db, "user-1", "a@example.com").await;
    let repo = DbUserRepository { db };

    let updated = repo
        .update(&user.id, Some("new@example.com"), None)
        .await
        .unwrap();
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.password_hash, user.password_hash);
    assert!(updated.updated_at >= user.updated_at);
}

#[tokio::test]
async fn should_return_user_not_found_when_updating_missing_user() {
    let repo = DbUserRepository { db: test_db().await };
    let result = repo
        .update(&UserId::new("ghost"), Some("x@example.com"), None)
        .await;
    assert!(
        matches!(result, Err(FitnessServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

// ── Plans ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_load_stored_plan_unchanged() {
    let db = test_db().await;
    seed_user(&db, "user-1", "a@example.com").await;
    let repo = DbPlanRepository { db };
    let plan = sample_plan("plan-1", "user-1");

    repo.create(&plan).await.unwrap();
    let loaded = repo.find_by_id(&plan.id).await.unwrap().unwrap();

    assert_eq!(loaded, plan);
}

#[tokio::test]
async fn should_keep_sub_microsecond_start_date_consistent_after_load() {
    let db = test_db().await;
    seed_user(&db, "user-1", "a@example.com").await;
    let repo = DbPlanRepository { db };

    let precise = "2026-10-19T07:25:22.982323109Z";
    let mut wire = Fixture::load("contracts/http/plan/plan.json");
    wire["start_date"] = json!(precise);
    wire["weeks"][0]["start_date"] = json!(precise);
    let plan: Plan = serde_json::from_value(wire).unwrap();
    assert_eq!(plan.start_date.timestamp_subsec_nanos(), 982_323_000);

    repo.create(&plan).await.unwrap();
    let loaded = repo.find_by_id(&plan.id).await.unwrap().unwrap();

    assert_eq!(loaded, plan);
    assert_eq!(loaded.start_date, loaded.weeks[0].start_date);
}

#[tokio::test]
async fn should_reject_plan_for_unknown_user() {
    let repo = DbPlanRepository { db: test_db().await };
    let result = repo.create(&sample_plan("plan-1", "ghost")).await;
    assert!(
        matches!(result, Err(FitnessServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_duplicate_plan_id() {
    let db = test_db().await;
    seed_user(&db, "user-1", "a@example.com").await;
    let repo = DbPlanRepository { db };
    let plan = sample_plan("plan-1", "user-1");

    repo.create(&plan).await.unwrap();
    let result = repo.create(&plan).await;
    assert!(
        matches!(result, Err(FitnessServiceError::PlanAlreadyExists)),
        "expected PlanAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_session_for_unknown_plan() {
    let repo = DbPlanRepository { db: test_db().await };
    let result = repo
        .add_session(&PlanId::new("never-created"), &sample_session("s-1"))
        .await;
    assert!(
        matches!(result, Err(FitnessServiceError::PlanNotFound)),
        "expected PlanNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_append_session_after_existing_ones() {
    let db = test_db().await;
    seed_user(&db, "user-1", "a@example.com").await;
    let repo = DbPlanRepository { db };
    let plan = sample_plan("plan-1", "user-1");
    repo.create(&plan).await.unwrap();

    repo.add_session(&plan.id, &sample_session("lower-b"))
        .await
        .unwrap();

    let loaded = repo.find_by_id(&plan.id).await.unwrap().unwrap();
    let ids: Vec<&SessionId> = loaded.sessions.iter().map(|s| &s.id).collect();
    assert_eq!(ids, [&SessionId::new("upper-a"), &SessionId::new("lower-b")]);
}

#[tokio::test]
async fn should_reject_duplicate_session_id_within_plan() {
    let db = test_db().await;
    seed_user(&db, "user-1", "a@example.com").await;
    let repo = DbPlanRepository { db };
    let plan = sample_plan("plan-1", "user-1");
    repo.create(&plan).await.unwrap();

    let result = repo.add_session(&plan.id, &sample_session("upper-a")).await;
    assert!(
        matches!(result, Err(FitnessServiceError::SessionAlreadyExists)),
        "expected SessionAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_most_recent_plan_for_user() {
    let db = test_db().await;
    seed_user(&db, "user-1", "a@example.com").await;
    let repo = DbPlanRepository { db };

    repo.create(&sample_plan("plan-1", "user-1")).await.unwrap();
    repo.create(&sample_plan("plan-2", "user-1")).await.unwrap();

    let latest = repo
        .find_latest_by_user(&UserId::new("user-1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, PlanId::new("plan-2"));
    assert!(
        repo.find_latest_by_user(&UserId::new("user-9"))
            .await
            .unwrap()
            .is_none()
    );
}

// ── Onboarding ───────────────────────────────────────────────────────────────

fn answers(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[tokio::test]
async fn should_preserve_answer_key_order() {
    let db = test_db().await;
    let user = seed_user(&db, "user-1", "a@example.com").await;
    let repo = DbOnboardingRepository { db };

    let submitted = OnboardingAnswers {
        id: OnboardingId::new("ob-1"),
        user_id: user.id.clone(),
        answers: answers(json!({
            "zeta": "last letter first",
            "alpha": 3,
            "injuries": ["knee"],
        })),
        created_at: chrono::Utc::now(),
    };
    repo.create(&submitted).await.unwrap();

    let stored = repo.list_by_user(&user.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    let keys: Vec<&str> = stored[0].answers.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "injuries"]);
    assert_eq!(stored[0].answers, submitted.answers);
}

#[tokio::test]
async fn should_reject_answers_for_unknown_user() {
    let repo = DbOnboardingRepository { db: test_db().await };
    let result = repo
        .create(&OnboardingAnswers {
            id: OnboardingId::new("ob-1"),
            user_id: UserId::new("ghost"),
            answers: Map::new(),
            created_at: chrono::Utc::now(),
        })
        .await;
    assert!(
        matches!(result, Err(FitnessServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
