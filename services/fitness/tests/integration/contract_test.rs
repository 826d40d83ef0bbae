use axum::http::StatusCode;
use serde_json::Value;

use ascent_domain::{Plan, Session};
use ascent_testing::fixture::Fixture;
use ascent_testing::plan::{sample_plan, sample_session};

use crate::helpers::{seed_user, test_db, test_server};

#[test]
fn should_encode_sample_plan_as_golden_fixture() {
    let encoded = serde_json::to_value(sample_plan("plan-1", "user-1")).unwrap();
    assert_eq!(encoded, Fixture::load("contracts/http/plan/plan.json"));
}

#[test]
fn should_decode_golden_fixture_into_sample_plan() {
    let decoded: Plan =
        serde_json::from_value(Fixture::load("contracts/http/plan/plan.json")).unwrap();
    assert_eq!(decoded, sample_plan("plan-1", "user-1"));
}

#[test]
fn should_match_session_fixture_both_ways() {
    let fixture = Fixture::load("contracts/http/plan/session.json");
    let decoded: Session = serde_json::from_value(fixture.clone()).unwrap();
    assert_eq!(decoded, sample_session("upper-a"));
    assert_eq!(serde_json::to_value(&decoded).unwrap(), fixture);
}

#[tokio::test]
async fn should_match_health_fixture() {
    let server = test_server(test_db().await);
    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        Fixture::load("contracts/http/health.json")
    );
}

#[tokio::test]
async fn should_serve_stored_plan_in_fixture_shape() {
    let db = test_db().await;
    seed_user(&db, "user-1", "a@example.com").await;
    let server = test_server(db);
    let fixture = Fixture::load("contracts/http/plan/plan.json");

    let created = server.post("/api/plan").json(&fixture).await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    assert_eq!(created.json::<Value>(), fixture);

    let fetched = server.get("/api/plans/plan-1").await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<Value>(), fixture);
}
