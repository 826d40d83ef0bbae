use serde::Deserialize;

use ascent_core::config::{Config, split_list};
use ascent_core::tracing::LogFormat;

/// Fitness service configuration loaded from environment variables.
#[derive(Deserialize)]
pub struct FitnessConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// HMAC secret for signing login tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// Login token lifetime in seconds (default one day). Env var: `TOKEN_TTL_SECS`.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
    /// Comma-separated CORS origins, `*` for any. Env var: `ALLOWED_ORIGINS`.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    /// Apply pending migrations at startup (default true). Env var: `RUN_MIGRATIONS`.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
    /// `json` or `pretty`. Env var: `LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config for FitnessConfig {}

impl FitnessConfig {
    pub fn allowed_origins(&self) -> Vec<String> {
        split_list(&self.allowed_origins)
    }
}

impl std::fmt::Debug for FitnessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitnessConfig")
            .field("port", &self.port)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("allowed_origins", &self.allowed_origins)
            .field("run_migrations", &self.run_migrations)
            .field("log_format", &self.log_format)
            .finish_non_exhaustive()
    }
}

fn default_port() -> u16 {
    8080
}

fn default_token_ttl_secs() -> u64 {
    86_400
}

fn default_allowed_origins() -> String {
    "*".to_owned()
}

fn default_run_migrations() -> bool {
    true
}
