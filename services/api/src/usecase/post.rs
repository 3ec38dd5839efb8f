use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{LikeRepository, PostRepository, UserRepository};
use crate::domain::types::{LikeToggle, Post, PostView, Profile, User};
use crate::error::ApiError;

fn view(post: Post, author: Profile, likes: u64, liked: bool) -> PostView {
    PostView {
        id: post.id,
        content: post.content,
        author,
        likes,
        liked,
        created_at: post.created_at,
    }
}

/// Assemble the reader-facing view of a stored post: author profile plus
/// like aggregates for the acting user.
async fn assemble<L, U>(
    likes: &L,
    users: &U,
    acting: &User,
    post: Post,
) -> Result<PostView, ApiError>
where
    L: LikeRepository,
    U: UserRepository,
{
    let author = users
        .find_by_id(post.author_id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("author missing for post {}", post.id)))?;
    let count = likes.count(post.id).await?;
    let liked = likes.exists(post.id, acting.id).await?;
    Ok(view(post, author.profile(), count, liked))
}

// ── ListPosts ────────────────────────────────────────────────────────────────

pub struct ListPostsUseCase<P, L, U>
where
    P: PostRepository,
    L: LikeRepository,
    U: UserRepository,
{
    pub posts: P,
    pub likes: L,
    pub users: U,
}

impl<P, L, U> ListPostsUseCase<P, L, U>
where
    P: PostRepository,
    L: LikeRepository,
    U: UserRepository,
{
    pub async fn execute(&self, acting: &User) -> Result<Vec<PostView>, ApiError> {
        let posts = self.posts.list_newest_first().await?;
        let mut views = Vec::with_capacity(posts.len());
        for post in posts {
            views.push(assemble(&self.likes, &self.users, acting, post).await?);
        }
        Ok(views)
    }
}

// ── GetPost ──────────────────────────────────────────────────────────────────

pub struct GetPostUseCase<P, L, U>
where
    P: PostRepository,
    L: LikeRepository,
    U: UserRepository,
{
    pub posts: P,
    pub likes: L,
    pub users: U,
}

impl<P, L, U> GetPostUseCase<P, L, U>
where
    P: PostRepository,
    L: LikeRepository,
    U: UserRepository,
{
    pub async fn execute(&self, post_id: Uuid, acting: &User) -> Result<PostView, ApiError> {
        let post = self
            .posts
            .find(post_id)
            .await?
            .ok_or(ApiError::PostNotFound)?;
        assemble(&self.likes, &self.users, acting, post).await
    }
}

// ── CreatePost ───────────────────────────────────────────────────────────────

pub struct CreatePostUseCase<P: PostRepository> {
    pub posts: P,
}

impl<P: PostRepository> CreatePostUseCase<P> {
    pub async fn execute(&self, acting: &User, content: String) -> Result<PostView, ApiError> {
        if content.trim().is_empty() {
            return Err(ApiError::EmptyContent);
        }
        let post = Post {
            id: Uuid::now_v7(),
            author_id: acting.id,
            content,
            created_at: Utc::now(),
        };
        self.posts.create(&post).await?;
        // A brand-new post has no likes and the author is the acting user —
        // no lookups needed.
        Ok(view(post, acting.profile(), 0, false))
    }
}

// ── EditPost ─────────────────────────────────────────────────────────────────

pub struct EditPostUseCase<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    pub posts: P,
    pub likes: L,
}

impl<P, L> EditPostUseCase<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    pub async fn execute(
        &self,
        post_id: Uuid,
        acting: &User,
        content: String,
    ) -> Result<PostView, ApiError> {
        if content.trim().is_empty() {
            return Err(ApiError::EmptyContent);
        }
        let post = self
            .posts
            .find(post_id)
            .await?
            .ok_or(ApiError::PostNotFound)?;
        if post.author_id != acting.id {
            return Err(ApiError::NotAuthor);
        }

        self.posts.update_content(post_id, &content).await?;

        // Aggregates come from current like rows; created_at is untouched.
        let count = self.likes.count(post_id).await?;
        let liked = self.likes.exists(post_id, acting.id).await?;
        Ok(view(
            Post { content, ..post },
            acting.profile(),
            count,
            liked,
        ))
    }
}

// ── DeletePost ───────────────────────────────────────────────────────────────

pub struct DeletePostUseCase<P: PostRepository> {
    pub posts: P,
}

impl<P: PostRepository> DeletePostUseCase<P> {
    pub async fn execute(&self, post_id: Uuid, acting: &User) -> Result<(), ApiError> {
        let post = self
            .posts
            .find(post_id)
            .await?
            .ok_or(ApiError::PostNotFound)?;
        if post.author_id != acting.id {
            return Err(ApiError::NotAuthor);
        }
        self.posts.delete(post_id).await
    }
}

// ── ToggleLike ───────────────────────────────────────────────────────────────

pub struct ToggleLikeUseCase<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    pub posts: P,
    pub likes: L,
}

impl<P, L> ToggleLikeUseCase<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    /// Strict toggle: an existing (post, user) pair is removed, a missing one
    /// is inserted. Authors cannot like their own posts.
    pub async fn execute(&self, post_id: Uuid, acting: &User) -> Result<LikeToggle, ApiError> {
        let post = self
            .posts
            .find(post_id)
            .await?
            .ok_or(ApiError::PostNotFound)?;
        if post.author_id == acting.id {
            return Err(ApiError::SelfLike);
        }

        if self.likes.delete(post_id, acting.id).await? {
            Ok(LikeToggle::Removed)
        } else {
            self.likes.insert(post_id, acting.id).await?;
            Ok(LikeToggle::Added)
        }
    }
}
