use rand::RngExt;

use crate::domain::repository::{CodeDelivery, UserRepository, VerificationCodeCache};
use crate::domain::types::{User, VERIFICATION_CODE_LEN};
use crate::error::ApiError;

/// Charset for verification codes (decimal digits, each drawn uniformly).
/// Codes are not unique across users or time; leading zeros are preserved.
const CHARSET: &[u8] = b"0123456789";

fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..VERIFICATION_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

// ── SendCode ─────────────────────────────────────────────────────────────────

pub struct SendCodeUseCase<C, D>
where
    C: VerificationCodeCache,
    D: CodeDelivery,
{
    pub codes: C,
    pub delivery: D,
}

impl<C, D> SendCodeUseCase<C, D>
where
    C: VerificationCodeCache,
    D: CodeDelivery,
{
    /// Issue a fresh code for an unverified user (caller checks the flag).
    /// Overwrites any pending code; the TTL restarts.
    pub async fn execute(&self, user: &User) -> Result<String, ApiError> {
        let code = generate_code();
        self.codes.put(user.id, &code).await?;
        self.delivery.deliver(&user.email, &code);
        Ok(code)
    }
}

// ── VerifyCode ───────────────────────────────────────────────────────────────

pub struct VerifyCodeUseCase<U, C>
where
    U: UserRepository,
    C: VerificationCodeCache,
{
    pub users: U,
    pub codes: C,
}

impl<U, C> VerifyCodeUseCase<U, C>
where
    U: UserRepository,
    C: VerificationCodeCache,
{
    pub async fn execute(&self, user: &User, submitted: &str) -> Result<(), ApiError> {
        // 1. A pending code must exist → 404 once consumed or expired
        let stored = self
            .codes
            .get(user.id)
            .await?
            .ok_or(ApiError::CodeExpired)?;

        // 2. Exact string match. A miss keeps the pending code so the user
        //    may retry until the TTL runs out.
        if stored != submitted {
            return Err(ApiError::InvalidCode);
        }

        // 3. Flip the flag, then consume the code (one-time use)
        self.users.mark_verified(user.id).await?;
        self.codes.remove(user.id).await?;
        Ok(())
    }
}
