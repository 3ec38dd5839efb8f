use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;
use uuid::Uuid;

use crate::domain::repository::VerificationCodeCache;
use crate::domain::types::VERIFICATION_CODE_TTL_SECS;
use crate::error::ApiError;

#[derive(Clone)]
pub struct RedisVerificationCodeCache {
    pub pool: Pool,
}

fn verify_key(user_id: Uuid) -> String {
    format!("verify:{}", user_id)
}

impl VerificationCodeCache for RedisVerificationCodeCache {
    async fn put(&self, user_id: Uuid, code: &str) -> Result<(), ApiError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;
        let key = verify_key(user_id);
        // SET with EX both overwrites a pending code and restarts its TTL.
        let (): () = conn
            .set_ex(&key, code, VERIFICATION_CODE_TTL_SECS)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| ApiError::Internal(e.into()))?;
        Ok(())
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<String>, ApiError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;
        let key = verify_key(user_id);
        let value: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| ApiError::Internal(e.into()))?;
        Ok(value)
    }

    async fn remove(&self, user_id: Uuid) -> Result<(), ApiError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;
        let key = verify_key(user_id);
        let (): () = conn
            .del(&key)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| ApiError::Internal(e.into()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefix_cache_keys_with_verify() {
        let user_id = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        assert_eq!(
            verify_key(user_id),
            "verify:00000000-0000-0000-0000-000000000001"
        );
    }
}
