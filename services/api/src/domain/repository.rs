#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Post, User};
use crate::error::ApiError;

/// Repository for account records.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn create(&self, user: &User) -> Result<(), ApiError>;

    /// Flip `is_verified` to true. The only mutation users ever receive.
    async fn mark_verified(&self, id: Uuid) -> Result<(), ApiError>;
}

/// Repository for posts.
pub trait PostRepository: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Post>, ApiError>;

    /// All posts, newest first by creation time. Fresh snapshot per call.
    async fn list_newest_first(&self) -> Result<Vec<Post>, ApiError>;

    async fn create(&self, post: &Post) -> Result<(), ApiError>;

    /// Update content only; `created_at` is immutable.
    async fn update_content(&self, id: Uuid, content: &str) -> Result<(), ApiError>;

    /// Delete a post. Like rows go with it (store-level cascade).
    async fn delete(&self, id: Uuid) -> Result<(), ApiError>;
}

/// Repository for like pairs.
pub trait LikeRepository: Send + Sync {
    async fn count(&self, post_id: Uuid) -> Result<u64, ApiError>;
    async fn exists(&self, post_id: Uuid, user_id: Uuid) -> Result<bool, ApiError>;
    async fn insert(&self, post_id: Uuid, user_id: Uuid) -> Result<(), ApiError>;

    /// Delete a like pair. Returns `true` if a row was deleted.
    async fn delete(&self, post_id: Uuid, user_id: Uuid) -> Result<bool, ApiError>;
}

/// Cache for pending verification codes (Redis, 600s TTL).
///
/// One active code per user: `put` overwrites any prior entry. Entry absence
/// means no verification attempt is pending (consumed or expired).
pub trait VerificationCodeCache: Send + Sync {
    async fn put(&self, user_id: Uuid, code: &str) -> Result<(), ApiError>;
    async fn get(&self, user_id: Uuid) -> Result<Option<String>, ApiError>;
    async fn remove(&self, user_id: Uuid) -> Result<(), ApiError>;
}

/// Password hashing collaborator.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, ApiError>;
    fn verify(&self, plain: &str, hash: &str) -> bool;
}

/// Delivery channel for verification codes.
///
/// The only implementation in scope logs the code instead of dispatching it;
/// swapping in real email/SMS dispatch is a single-point change here.
pub trait CodeDelivery: Send + Sync {
    fn deliver(&self, email: &str, code: &str);
}
