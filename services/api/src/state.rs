use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use crate::infra::cache::RedisVerificationCodeCache;
use crate::infra::crypto::Argon2PasswordHasher;
use crate::infra::db::{DbLikeRepository, DbPostRepository, DbUserRepository};
use crate::infra::delivery::InsecureCodeDelivery;

/// Shared application state passed to every handler via axum `State`.
///
/// Collaborators are constructed here per request from pooled handles —
/// the services themselves hold no cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    pub jwt_secret: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn post_repo(&self) -> DbPostRepository {
        DbPostRepository {
            db: self.db.clone(),
        }
    }

    pub fn like_repo(&self) -> DbLikeRepository {
        DbLikeRepository {
            db: self.db.clone(),
        }
    }

    pub fn code_cache(&self) -> RedisVerificationCodeCache {
        RedisVerificationCodeCache {
            pool: self.redis.clone(),
        }
    }

    pub fn password_hasher(&self) -> Argon2PasswordHasher {
        Argon2PasswordHasher
    }

    pub fn code_delivery(&self) -> InsecureCodeDelivery {
        InsecureCodeDelivery
    }
}
