use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Profile;
use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::usecase::verification::{SendCodeUseCase, VerifyCodeUseCase};

/// Public account profile as serialized in responses.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_verified: bool,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.name,
            email: profile.email,
            is_verified: profile.is_verified,
        }
    }
}

// ── POST /register ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
    };
    usecase
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
            confirm_password: body.confirm_password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registration successful")),
    ))
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub verified: bool,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        token: out.token,
        verified: out.verified,
    }))
}

// ── GET /me ──────────────────────────────────────────────────────────────────

pub async fn current_user(
    CurrentUser(user): CurrentUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    Ok(Json(user.profile().into()))
}

// ── POST /verify ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct VerificationResponse {
    pub message: String,
    /// Returned in-band on purpose — no out-of-band channel exists in scope.
    pub code: String,
}

pub async fn send_verification(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<VerificationResponse>, ApiError> {
    if user.is_verified {
        return Err(ApiError::AlreadyVerified);
    }
    let usecase = SendCodeUseCase {
        codes: state.code_cache(),
        delivery: state.code_delivery(),
    };
    let code = usecase.execute(&user).await?;
    Ok(Json(VerificationResponse {
        message: "Verification code sent successfully".to_owned(),
        code,
    }))
}

// ── GET /verify/{code} ───────────────────────────────────────────────────────

pub async fn verify_user(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if user.is_verified {
        return Err(ApiError::AlreadyVerified);
    }
    let usecase = VerifyCodeUseCase {
        users: state.user_repo(),
        codes: state.code_cache(),
    };
    usecase.execute(&user, &code).await?;
    Ok(Json(MessageResponse::new("User verified successfully")))
}
