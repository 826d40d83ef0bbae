use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use ascent_domain::{OnboardingId, UserId};

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Registered account.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    /// Normalized: trimmed and lower-cased.
    pub email: String,
    /// Argon2id PHC string. Never serialized.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// One onboarding questionnaire submission. `answers` keeps the submitted key order.
#[derive(Debug, Clone)]
pub struct OnboardingAnswers {
    pub id: OnboardingId,
    pub user_id: UserId,
    pub answers: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

/// A signed login token and the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Shape check only: `local@domain.tld`, no whitespace, exactly one `@`.
pub fn validate_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}
