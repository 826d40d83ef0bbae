use ascent_domain::{UserId, timestamp};

use crate::domain::repository::{CredentialPort, TokenIssuer, UserRepository};
use crate::domain::types::{
    IssuedToken, MIN_PASSWORD_LEN, User, normalize_email, validate_email, validate_password,
};
use crate::error::FitnessServiceError;

fn checked_email(raw: &str) -> Result<String, FitnessServiceError> {
    let email = normalize_email(raw);
    if !validate_email(&email) {
        return Err(FitnessServiceError::InvalidEmail);
    }
    Ok(email)
}

fn checked_password(password: &str) -> Result<(), FitnessServiceError> {
    if !validate_password(password) {
        return Err(FitnessServiceError::WeakPassword {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
}

pub struct RegisterUserUseCase<R: UserRepository, C: CredentialPort> {
    pub repo: R,
    pub credentials: C,
}

impl<R: UserRepository, C: CredentialPort> RegisterUserUseCase<R, C> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, FitnessServiceError> {
        let email = checked_email(&input.email)?;
        checked_password(&input.password)?;
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(FitnessServiceError::UserAlreadyExists);
        }
        let now = timestamp::now();
        let user = User {
            id: UserId::generate(),
            email,
            password_hash: self.credentials.hash(&input.password)?,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub token: IssuedToken,
    pub user: User,
}

pub struct LoginUseCase<R: UserRepository, C: CredentialPort, T: TokenIssuer> {
    pub repo: R,
    pub credentials: C,
    pub tokens: T,
}

impl<R: UserRepository, C: CredentialPort, T: TokenIssuer> LoginUseCase<R, C, T> {
    /// Unknown email and wrong password both yield `InvalidCredential`.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, FitnessServiceError> {
        let email = normalize_email(&input.email);
        let Some(user) = self.repo.find_by_email(&email).await? else {
            self.credentials.verify_decoy(&input.password)?;
            return Err(FitnessServiceError::InvalidCredential);
        };
        if !self.credentials.verify(&input.password, &user.password_hash)? {
            return Err(FitnessServiceError::InvalidCredential);
        }
        let token = self.tokens.issue(&user)?;
        Ok(LoginOutput { token, user })
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: &UserId) -> Result<User, FitnessServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(FitnessServiceError::UserNotFound)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct UpdateUserUseCase<R: UserRepository, C: CredentialPort> {
    pub repo: R,
    pub credentials: C,
}

impl<R: UserRepository, C: CredentialPort> UpdateUserUseCase<R, C> {
    pub async fn execute(
        &self,
        user_id: &UserId,
        input: UpdateUserInput,
    ) -> Result<User, FitnessServiceError> {
        if input.email.is_none() && input.password.is_none() {
            return Err(FitnessServiceError::MissingData);
        }
        let email = input.email.as_deref().map(checked_email).transpose()?;
        let password_hash = match input.password.as_deref() {
            Some(password) => {
                checked_password(password)?;
                Some(self.credentials.hash(password)?)
            }
            None => None,
        };
        if let Some(ref email) = email {
            if let Some(owner) = self.repo.find_by_email(email).await? {
                if owner.id != *user_id {
                    return Err(FitnessServiceError::UserAlreadyExists);
                }
            }
        }
        self.repo
            .update(user_id, email.as_deref(), password_hash.as_deref())
            .await
    }
}
