use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use ripple_api::domain::repository::{
    CodeDelivery, PasswordHasher, UserRepository, VerificationCodeCache,
};
use ripple_api::domain::types::User;
use ripple_api::error::ApiError;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            u.is_verified = true;
        }
        Ok(())
    }
}

// ── MockCodeCache ────────────────────────────────────────────────────────────

pub struct MockCodeCache {
    pub entries: Arc<Mutex<HashMap<Uuid, String>>>,
}

impl MockCodeCache {
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn entries_handle(&self) -> Arc<Mutex<HashMap<Uuid, String>>> {
        Arc::clone(&self.entries)
    }
}

impl VerificationCodeCache for MockCodeCache {
    async fn put(&self, user_id: Uuid, code: &str) -> Result<(), ApiError> {
        self.entries.lock().unwrap().insert(user_id, code.to_owned());
        Ok(())
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<String>, ApiError> {
        Ok(self.entries.lock().unwrap().get(&user_id).cloned())
    }

    async fn remove(&self, user_id: Uuid) -> Result<(), ApiError> {
        self.entries.lock().unwrap().remove(&user_id);
        Ok(())
    }
}

// ── PlainTextHasher ──────────────────────────────────────────────────────────

/// Deterministic stand-in for the argon2 hasher — tests assert on the marker
/// prefix instead of paying for a real key derivation.
pub struct PlainTextHasher;

impl PasswordHasher for PlainTextHasher {
    fn hash(&self, plain: &str) -> Result<String, ApiError> {
        Ok(format!("hashed:{plain}"))
    }

    fn verify(&self, plain: &str, hash: &str) -> bool {
        hash == format!("hashed:{plain}")
    }
}

// ── RecordingDelivery ────────────────────────────────────────────────────────

pub struct RecordingDelivery {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingDelivery {
    pub fn empty() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.sent)
    }
}

impl CodeDelivery for RecordingDelivery {
    fn deliver(&self, email: &str, code: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((email.to_owned(), code.to_owned()));
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn unverified_user() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        name: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password_hash: "hashed:correct horse".to_owned(),
        is_verified: false,
    }
}

pub fn verified_user() -> User {
    User {
        is_verified: true,
        ..unverified_user()
    }
}

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";
