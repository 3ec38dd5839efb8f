use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Full account record. `password_hash` never leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_verified: bool,
}

impl User {
    /// Public view of the account — what other users (and the account
    /// itself) see in responses.
    pub fn profile(&self) -> Profile {
        Profile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            is_verified: self.is_verified,
        }
    }
}

/// Public account profile embedded in post views and `/me`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_verified: bool,
}

/// Short text post.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A post assembled for the reader: author profile, like count, and whether
/// the acting user has liked it.
#[derive(Debug, Clone)]
pub struct PostView {
    pub id: Uuid,
    pub content: String,
    pub author: Profile,
    pub likes: u64,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    Added,
    Removed,
}

/// Verification code length in digits.
pub const VERIFICATION_CODE_LEN: usize = 6;

/// Verification code time-to-live in seconds (10 minutes).
pub const VERIFICATION_CODE_TTL_SECS: u64 = 600;
