use axum_test::TestServer;
use chrono::Utc;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use ascent_domain::UserId;
use ascent_fitness::domain::repository::UserRepository;
use ascent_fitness::domain::types::User;
use ascent_fitness::infra::db::DbUserRepository;
use ascent_fitness::router::build_router;
use ascent_fitness::state::AppState;
use ascent_fitness_migration::Migrator;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Fresh in-memory SQLite database with every migration applied.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn test_state(db: DatabaseConnection) -> AppState {
    AppState {
        db,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        token_ttl_secs: 3600,
    }
}

pub fn test_server(db: DatabaseConnection) -> TestServer {
    test_server_with_origins(db, &["*"])
}

pub fn test_server_with_origins(db: DatabaseConnection, origins: &[&str]) -> TestServer {
    let origins: Vec<String> = origins.iter().map(|o| (*o).to_owned()).collect();
    TestServer::new(build_router(test_state(db), &origins)).unwrap()
}

/// Insert a user row directly, bypassing registration.
pub async fn seed_user(db: &DatabaseConnection, id: &str, email: &str) -> User {
    let now = Utc::now();
    let user = User {
        id: UserId::new(id),
        email: email.to_owned(),
        password_hash: "not-a-real-hash".to_owned(),
        created_at: now,
        updated_at: now,
    };
    DbUserRepository { db: db.clone() }
        .create(&user)
        .await
        .unwrap();
    user
}
