use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("email already registered")]
    EmailTaken,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("post content cannot be empty")]
    EmptyContent,
    #[error("invalid verification code")]
    InvalidCode,
    #[error("cannot like own post")]
    SelfLike,
    #[error("user not found")]
    UserNotFound,
    #[error("post not found")]
    PostNotFound,
    #[error("verification code expired or not found")]
    CodeExpired,
    #[error("incorrect password")]
    InvalidCredentials,
    #[error("invalid token")]
    InvalidToken,
    #[error("not the post author")]
    NotAuthor,
    #[error("user already verified")]
    AlreadyVerified,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::InvalidCode => "INVALID_CODE",
            Self::SelfLike => "SELF_LIKE",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PostNotFound => "POST_NOT_FOUND",
            Self::CodeExpired => "CODE_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::NotAuthor => "NOT_AUTHOR",
            Self::AlreadyVerified => "ALREADY_VERIFIED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::PasswordMismatch
            | Self::EmptyContent
            | Self::InvalidCode
            | Self::SelfLike
            | Self::AlreadyVerified => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::NotAuthor => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::PostNotFound | Self::CodeExpired => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
