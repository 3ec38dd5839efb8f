//! Request context resolution: bearer token → acting user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};

use ripple_auth_types::token::validate_access_token;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ApiError;
use crate::state::AppState;

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.to_owned())
}

/// Acting user resolved from the `Authorization: Bearer` header.
///
/// Returns 401 when the header is missing or malformed, the token fails
/// validation, or no user exists for the embedded id. Verification status is
/// irrelevant here — unverified users browse and hit `/me` and the
/// verification endpoints through this extractor.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    // axum-core defines this as `fn -> impl Future + Send` (not `async fn`).
    // Header parsing happens synchronously; the returned future only borrows
    // the cloned state for the user lookup.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(&parts.headers);
        let state = state.clone();

        async move {
            let token = token.ok_or(ApiError::InvalidToken)?;
            let info =
                validate_access_token(&token, &state.jwt_secret).map_err(|_| ApiError::InvalidToken)?;
            // A signed token whose subject no longer resolves is still a bad
            // credential, not a 404.
            let user = state
                .user_repo()
                .find_by_id(info.user_id)
                .await?
                .ok_or(ApiError::InvalidToken)?;
            Ok(Self(user))
        }
    }
}

/// Acting user for mutating post endpoints.
///
/// Resolution is identical to [`CurrentUser`]: nothing in scope requires a
/// verified account beyond the verification endpoints themselves, which check
/// the inverse. The separate type marks the write path only.
#[derive(Debug, Clone)]
pub struct StrictUser(pub User);

impl FromRequestParts<AppState> for StrictUser {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let current = CurrentUser::from_request_parts(parts, state);
        async move { current.await.map(|CurrentUser(user)| Self(user)) }
    }
}
