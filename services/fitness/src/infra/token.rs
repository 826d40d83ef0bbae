use chrono::Duration;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use ascent_domain::timestamp;

use crate::domain::repository::TokenIssuer;
use crate::domain::types::{IssuedToken, User};
use crate::error::FitnessServiceError;

/// JWT claims of a login token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs HS256 login tokens with a shared secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    pub secret: String,
    pub ttl_secs: u64,
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<IssuedToken, FitnessServiceError> {
        let issued_at = timestamp::now();
        let ttl = i64::try_from(self.ttl_secs).unwrap_or(i64::MAX);
        let expires_at = Duration::try_seconds(ttl)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| anyhow::anyhow!("token ttl out of range: {}", self.ttl_secs))?;
        let claims = TokenClaims {
            sub: user.id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| FitnessServiceError::Internal(e.into()))?;
        Ok(IssuedToken { token, expires_at })
    }
}
