use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::{Value, json};

use ascent_fitness::infra::token::TokenClaims;
use ascent_testing::fixture::Fixture;

use crate::helpers::{TEST_JWT_SECRET, test_db, test_server, test_server_with_origins};

async fn server() -> TestServer {
    test_server(test_db().await)
}

async fn register(server: &TestServer, email: &str) -> Value {
    let response = server
        .post("/api/user/register")
        .json(&json!({ "email": email, "password": "correct-horse" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()
}

fn assert_error(body: &Value, kind: &str) {
    assert_eq!(body["kind"], kind, "unexpected error body: {body}");
    assert!(body["message"].is_string());
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_live_and_ready() {
    let server = server().await;
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_attach_request_id_header() {
    let server = server().await;
    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

async fn allow_origin_header(server: &TestServer, origin: &'static str) -> Option<HeaderValue> {
    server
        .get("/health")
        .add_header(ORIGIN, HeaderValue::from_static(origin))
        .await
        .headers()
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .cloned()
}

#[tokio::test]
async fn should_echo_configured_origin_and_omit_others() {
    let server = test_server_with_origins(test_db().await, &["https://app.example.com"]);
    assert_eq!(
        allow_origin_header(&server, "https://app.example.com").await,
        Some(HeaderValue::from_static("https://app.example.com"))
    );
    assert_eq!(
        allow_origin_header(&server, "https://evil.example.com").await,
        None
    );
}

#[tokio::test]
async fn should_allow_any_origin_with_wildcard() {
    let server = server().await;
    assert_eq!(
        allow_origin_header(&server, "https://anywhere.example").await,
        Some(HeaderValue::from_static("*"))
    );
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_user_with_normalized_email() {
    let server = server().await;
    let response = server
        .post("/api/user/register")
        .json(&json!({ "email": "  Runner@Example.COM ", "password": "correct-horse" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["email"], "runner@example.com");
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn should_reject_second_registration_with_same_email() {
    let server = server().await;
    register(&server, "a@example.com").await;

    let response = server
        .post("/api/user/register")
        .json(&json!({ "email": "a@example.com", "password": "another-pass" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_error(&response.json::<Value>(), "USER_ALREADY_EXISTS");
}

#[tokio::test]
async fn should_reject_short_password() {
    let server = server().await;
    let response = server
        .post("/api/user/register")
        .json(&json!({ "email": "a@example.com", "password": "short" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json::<Value>(), "WEAK_PASSWORD");
}

#[tokio::test]
async fn should_issue_token_on_login() {
    let server = server().await;
    let user = register(&server, "a@example.com").await;

    let response = server
        .post("/api/user/login")
        .json(&json!({ "email": "a@example.com", "password": "correct-horse" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["user"]["id"], user["id"]);

    let token = body["token"].as_str().unwrap();
    let claims = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap()
    .claims;
    assert_eq!(claims.sub, user["id"].as_str().unwrap());
}

#[tokio::test]
async fn should_not_distinguish_unknown_email_from_wrong_password() {
    let server = server().await;
    register(&server, "a@example.com").await;

    let wrong_password = server
        .post("/api/user/login")
        .json(&json!({ "email": "a@example.com", "password": "not-the-password" }))
        .await;
    let unknown_email = server
        .post("/api/user/login")
        .json(&json!({ "email": "b@example.com", "password": "correct-horse" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        wrong_password.json::<Value>(),
        unknown_email.json::<Value>()
    );
}

#[tokio::test]
async fn should_fetch_and_update_user() {
    let server = server().await;
    let user = register(&server, "a@example.com").await;
    let path = format!("/api/user/{}", user["id"].as_str().unwrap());

    let fetched = server.get(&path).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<Value>(), user);

    let updated = server
        .patch(&path)
        .json(&json!({ "email": "b@example.com" }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    assert_eq!(updated.json::<Value>()["email"], "b@example.com");

    let empty = server.patch(&path).json(&json!({})).await;
    assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&empty.json::<Value>(), "MISSING_DATA");
}

#[tokio::test]
async fn should_return_not_found_for_missing_user() {
    let server = server().await;
    let response = server.get("/api/user/ghost").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_error(&response.json::<Value>(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_malformed_body() {
    let server = server().await;
    let response = server.post("/api/user/register").text("{not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json::<Value>(), "MALFORMED_INPUT");
}

// ── Onboarding ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_and_list_onboarding_answers() {
    let server = server().await;
    let user = register(&server, "a@example.com").await;
    let user_id = user["id"].as_str().unwrap();

    let submitted = server
        .post("/api/onboarding/submit")
        .json(&json!({
            "user_id": user_id,
            "answers": { "goal": "get_stronger", "days_per_week": 3 },
        }))
        .await;
    assert_eq!(submitted.status_code(), StatusCode::CREATED);
    let receipt = submitted.json::<Value>();
    assert_eq!(receipt["status"], "success");
    assert_eq!(receipt["user_id"], user_id);

    let listed = server.get(&format!("/api/onboarding/{user_id}")).await;
    assert_eq!(listed.status_code(), StatusCode::OK);
    let listed = listed.json::<Value>();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["id"], receipt["id"]);
    assert_eq!(listed[0]["answers"]["days_per_week"], 3);
}

#[tokio::test]
async fn should_reject_onboarding_for_unknown_user() {
    let server = server().await;
    let response = server
        .post("/api/onboarding/submit")
        .json(&json!({ "user_id": "ghost", "answers": {} }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_error(&response.json::<Value>(), "USER_NOT_FOUND");
}

// ── Plans ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_generate_plan_and_serve_it_as_latest() {
    let server = server().await;
    let user = register(&server, "a@example.com").await;
    let user_id = user["id"].as_str().unwrap();

    let generated = server
        .post("/api/plan/generate")
        .json(&json!({
            "user_id": user_id,
            "goal": "build_muscle",
            "start_date": "2025-01-06T00:00:00Z",
            "weeks": 2,
        }))
        .await;
    assert_eq!(generated.status_code(), StatusCode::CREATED);
    let plan = generated.json::<Value>();
    assert_eq!(plan["goal"], "build_muscle");
    assert_eq!(plan["weeks"].as_array().map(Vec::len), Some(2));
    assert_eq!(plan["weeks"][1]["start_date"], "2025-01-13T00:00:00Z");

    let latest = server.get(&format!("/api/plan/{user_id}")).await;
    assert_eq!(latest.status_code(), StatusCode::OK);
    assert_eq!(latest.json::<Value>(), plan);
}

fn subsecond_digits(timestamp: &Value) -> usize {
    let text = timestamp.as_str().unwrap();
    text.split_once('.')
        .map_or(0, |(_, fraction)| fraction.trim_end_matches('Z').len())
}

#[tokio::test]
async fn should_serve_default_start_date_unchanged_after_storage() {
    let server = server().await;
    let user = register(&server, "a@example.com").await;
    let user_id = user["id"].as_str().unwrap();

    let generated = server
        .post("/api/plan/generate")
        .json(&json!({ "user_id": user_id, "goal": "lose_fat" }))
        .await;
    assert_eq!(generated.status_code(), StatusCode::CREATED);
    let plan = generated.json::<Value>();
    assert!(subsecond_digits(&plan["start_date"]) <= 6);
    assert_eq!(plan["start_date"], plan["weeks"][0]["start_date"]);

    let latest = server.get(&format!("/api/plan/{user_id}")).await;
    assert_eq!(latest.json::<Value>(), plan);
}

#[tokio::test]
async fn should_reject_out_of_range_week_count() {
    let server = server().await;
    let user = register(&server, "a@example.com").await;

    let response = server
        .post("/api/plan/generate")
        .json(&json!({ "user_id": user["id"], "goal": "endurance", "weeks": 13 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json::<Value>(), "INVALID_VALUE");
}

#[tokio::test]
async fn should_reject_unknown_goal() {
    let server = server().await;
    let user = register(&server, "a@example.com").await;

    let response = server
        .post("/api/plan/generate")
        .json(&json!({ "user_id": user["id"], "goal": "get_weaker" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json::<Value>(), "UNKNOWN_ENUM_VALUE");
}

#[tokio::test]
async fn should_return_not_found_when_user_has_no_plan() {
    let server = server().await;
    let response = server.get("/api/plan/nobody").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_error(&response.json::<Value>(), "PLAN_NOT_FOUND");
}

#[tokio::test]
async fn should_assign_plan_id_when_client_omits_it() {
    let server = server().await;
    let user = register(&server, "a@example.com").await;
    let mut payload = Fixture::load("contracts/http/plan/plan.json");
    payload["user_id"] = user["id"].clone();
    payload.as_object_mut().unwrap().remove("plan_id");

    let response = server.post("/api/plan").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let plan_id = response.json::<Value>()["plan_id"].clone();
    assert!(plan_id.as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn should_reject_step_with_mismatched_payload() {
    let server = server().await;
    let mut payload = Fixture::load("contracts/http/plan/plan.json");
    payload["sessions"][0]["blocks"][1]["items"][0]["exercise_prescription"]["rep_spec"] =
        json!({ "kind": "reps", "time_sec": 30 });

    let response = server.post("/api/plan").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json::<Value>(), "UNION_MISMATCH");
}

#[tokio::test]
async fn should_reject_day_pointing_at_missing_session() {
    let server = server().await;
    let mut payload = Fixture::load("contracts/http/plan/plan.json");
    payload["weeks"][0]["days"][1]["session_id"] = json!("does-not-exist");

    let response = server.post("/api/plan").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json::<Value>(), "UNRESOLVED_SESSION");
}

#[tokio::test]
async fn should_append_session_to_stored_plan() {
    let server = server().await;
    let user = register(&server, "a@example.com").await;
    let mut payload = Fixture::load("contracts/http/plan/plan.json");
    payload["user_id"] = user["id"].clone();
    assert_eq!(
        server.post("/api/plan").json(&payload).await.status_code(),
        StatusCode::CREATED
    );

    let mut session = Fixture::load("contracts/http/plan/session.json");
    session["id"] = json!("lower-b");
    let added = server.post("/api/plans/plan-1/sessions").json(&session).await;
    assert_eq!(added.status_code(), StatusCode::CREATED);
    assert_eq!(added.json::<Value>(), session);

    let plan = server.get("/api/plans/plan-1").await.json::<Value>();
    assert_eq!(plan["sessions"].as_array().map(Vec::len), Some(2));

    let duplicate = server.post("/api/plans/plan-1/sessions").json(&session).await;
    assert_eq!(duplicate.status_code(), StatusCode::CONFLICT);
    assert_error(&duplicate.json::<Value>(), "SESSION_ALREADY_EXISTS");
}

#[tokio::test]
async fn should_reject_session_for_missing_plan() {
    let server = server().await;
    let session = Fixture::load("contracts/http/plan/session.json");

    let response = server
        .post("/api/plans/never-created/sessions")
        .json(&session)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_error(&response.json::<Value>(), "PLAN_NOT_FOUND");
}
