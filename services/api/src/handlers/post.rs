use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{LikeToggle, PostView};
use crate::error::ApiError;
use crate::extract::{CurrentUser, StrictUser};
use crate::handlers::MessageResponse;
use crate::handlers::auth::ProfileResponse;
use crate::state::AppState;
use crate::usecase::post::{
    CreatePostUseCase, DeletePostUseCase, EditPostUseCase, GetPostUseCase, ListPostsUseCase,
    ToggleLikeUseCase,
};

#[derive(Serialize)]
pub struct PostViewResponse {
    pub id: String,
    pub content: String,
    pub author: ProfileResponse,
    pub likes: u64,
    pub liked: bool,
    #[serde(serialize_with = "ripple_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PostView> for PostViewResponse {
    fn from(view: PostView) -> Self {
        Self {
            id: view.id.to_string(),
            content: view.content,
            author: view.author.into(),
            likes: view.likes,
            liked: view.liked,
            created_at: view.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct PostContentRequest {
    pub content: String,
}

// ── GET /posts ───────────────────────────────────────────────────────────────

pub async fn list_posts(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<PostViewResponse>>, ApiError> {
    let usecase = ListPostsUseCase {
        posts: state.post_repo(),
        likes: state.like_repo(),
        users: state.user_repo(),
    };
    let views = usecase.execute(&user).await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

// ── GET /posts/{post_id} ─────────────────────────────────────────────────────

pub async fn get_post(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostViewResponse>, ApiError> {
    let usecase = GetPostUseCase {
        posts: state.post_repo(),
        likes: state.like_repo(),
        users: state.user_repo(),
    };
    let view = usecase.execute(post_id, &user).await?;
    Ok(Json(view.into()))
}

// ── POST /posts ──────────────────────────────────────────────────────────────

pub async fn create_post(
    StrictUser(user): StrictUser,
    State(state): State<AppState>,
    Json(body): Json<PostContentRequest>,
) -> Result<(StatusCode, Json<PostViewResponse>), ApiError> {
    let usecase = CreatePostUseCase {
        posts: state.post_repo(),
    };
    let view = usecase.execute(&user, body.content).await?;
    Ok((StatusCode::CREATED, Json(view.into())))
}

// ── PUT /posts/{post_id} ─────────────────────────────────────────────────────

pub async fn edit_post(
    StrictUser(user): StrictUser,
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Json(body): Json<PostContentRequest>,
) -> Result<Json<PostViewResponse>, ApiError> {
    let usecase = EditPostUseCase {
        posts: state.post_repo(),
        likes: state.like_repo(),
    };
    let view = usecase.execute(post_id, &user, body.content).await?;
    Ok(Json(view.into()))
}

// ── DELETE /posts/{post_id} ──────────────────────────────────────────────────

pub async fn delete_post(
    StrictUser(user): StrictUser,
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = DeletePostUseCase {
        posts: state.post_repo(),
    };
    usecase.execute(post_id, &user).await?;
    Ok(Json(MessageResponse::new("Post deleted")))
}

// ── POST /posts/{post_id}/like ───────────────────────────────────────────────

pub async fn toggle_like(
    StrictUser(user): StrictUser,
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = ToggleLikeUseCase {
        posts: state.post_repo(),
        likes: state.like_repo(),
    };
    let message = match usecase.execute(post_id, &user).await? {
        LikeToggle::Added => "Liked",
        LikeToggle::Removed => "Like removed",
    };
    Ok(Json(MessageResponse::new(message)))
}
