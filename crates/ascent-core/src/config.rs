use anyhow::Context as _;

/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field names map to upper-cased
/// env vars (`database_url` reads `DATABASE_URL`). Use `#[serde(default = ..)]`
/// for optional settings.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// Load from the process environment, after merging a `.env` file if one
    /// exists in the working directory or a parent.
    fn from_env() -> anyhow::Result<Self> {
        load_dotenv();
        envy::from_env().context("failed to load config from environment")
    }

    /// Load from an explicit set of key/value pairs. Keys are matched the same
    /// way as env vars.
    fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).context("failed to load config")
    }
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => ::tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => ::tracing::debug!("no .env file, using process environment"),
        Err(e) => ::tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }
}

/// Split a comma-separated env value into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
