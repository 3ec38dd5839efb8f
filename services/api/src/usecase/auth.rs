use jsonwebtoken::{EncodingKey, Header, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use ripple_auth_types::token::{ACCESS_TOKEN_EXP, JwtClaims};

use crate::domain::repository::{PasswordHasher, UserRepository};
use crate::domain::types::User;
use crate::error::ApiError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign an access token carrying the user id.
pub fn issue_access_token(user: &User, secret: &str) -> Result<String, ApiError> {
    let claims = JwtClaims {
        sub: user.id.to_string(),
        exp: now_secs() + ACCESS_TOKEN_EXP,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(e.into()))
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct RegisterUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub users: U,
    pub hasher: H,
}

impl<U, H> RegisterUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub async fn execute(&self, input: RegisterInput) -> Result<(), ApiError> {
        // 1. Email must be free → 409 if taken
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::EmailTaken);
        }

        // 2. Password confirmation → 400; nothing has been written yet
        if input.password != input.confirm_password {
            return Err(ApiError::PasswordMismatch);
        }

        // 3. New accounts start unverified
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password_hash: self.hasher.hash(&input.password)?,
            is_verified: false,
        };
        self.users.create(&user).await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub verified: bool,
}

pub struct LoginUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub users: U,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<U, H> LoginUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Login does not require a verified account — the response reports the
    /// current flag so clients can prompt for verification.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        if !self.hasher.verify(&input.password, &user.password_hash) {
            return Err(ApiError::InvalidCredentials);
        }

        let token = issue_access_token(&user, &self.jwt_secret)?;
        Ok(LoginOutput {
            token,
            verified: user.is_verified,
        })
    }
}
