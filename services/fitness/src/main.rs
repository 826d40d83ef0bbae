use anyhow::Context as _;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use ascent_core::config::Config;
use ascent_core::tracing::init_tracing;
use ascent_fitness::config::FitnessConfig;
use ascent_fitness::router::build_router;
use ascent_fitness::state::AppState;
use ascent_fitness_migration::Migrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FitnessConfig::from_env()?;
    init_tracing(config.log_format);
    info!(?config, "starting fitness-server");

    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("failed to connect to database")?;
    db.ping().await.context("database is not reachable")?;

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
        info!("migrations applied");
    }

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
        token_ttl_secs: config.token_ttl_secs,
    };

    let router = build_router(state, &config.allowed_origins());
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("fitness-server listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
