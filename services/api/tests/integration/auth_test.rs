use ripple_api::error::ApiError;
use ripple_api::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use ripple_auth_types::token::validate_access_token;

use crate::helpers::{
    MockUserRepo, PlainTextHasher, TEST_JWT_SECRET, unverified_user, verified_user,
};

fn register_input(email: &str, password: &str, confirm: &str) -> RegisterInput {
    RegisterInput {
        name: "bob".to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[tokio::test]
async fn should_register_unverified_user_with_hashed_password() {
    let repo = MockUserRepo::empty();
    let users_handle = repo.users_handle();

    let uc = RegisterUseCase {
        users: repo,
        hasher: PlainTextHasher,
    };

    uc.execute(register_input("bob@example.com", "s3cret", "s3cret"))
        .await
        .unwrap();

    let users = users_handle.lock().unwrap();
    assert_eq!(users.len(), 1, "expected exactly one user to be created");

    let created = &users[0];
    assert_eq!(created.email, "bob@example.com");
    assert_eq!(created.password_hash, "hashed:s3cret");
    assert!(!created.is_verified, "new accounts must start unverified");
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let uc = RegisterUseCase {
        users: MockUserRepo::new(vec![unverified_user()]),
        hasher: PlainTextHasher,
    };

    let result = uc
        .execute(register_input("alice@example.com", "s3cret", "s3cret"))
        .await;

    assert!(
        matches!(result, Err(ApiError::EmailTaken)),
        "expected EmailTaken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_password_mismatch_before_any_write() {
    let repo = MockUserRepo::empty();
    let users_handle = repo.users_handle();

    let uc = RegisterUseCase {
        users: repo,
        hasher: PlainTextHasher,
    };

    let result = uc
        .execute(register_input("bob@example.com", "s3cret", "different"))
        .await;

    assert!(
        matches!(result, Err(ApiError::PasswordMismatch)),
        "expected PasswordMismatch, got {result:?}"
    );
    assert!(
        users_handle.lock().unwrap().is_empty(),
        "no row may be written on mismatch"
    );
}

#[tokio::test]
async fn should_login_unverified_user_and_report_flag() {
    let user = unverified_user();

    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        hasher: PlainTextHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = uc
        .execute(LoginInput {
            email: user.email.clone(),
            password: "correct horse".to_owned(),
        })
        .await
        .unwrap();

    assert!(!out.verified, "login must succeed but report verified=false");

    let info = validate_access_token(&out.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id, "token must embed the user id");
}

#[tokio::test]
async fn should_report_verified_flag_on_login() {
    let user = verified_user();

    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        hasher: PlainTextHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = uc
        .execute(LoginInput {
            email: user.email.clone(),
            password: "correct horse".to_owned(),
        })
        .await
        .unwrap();

    assert!(out.verified);
}

#[tokio::test]
async fn should_reject_login_for_unknown_email() {
    let uc = LoginUseCase {
        users: MockUserRepo::empty(),
        hasher: PlainTextHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            email: "nobody@example.com".to_owned(),
            password: "whatever".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_login_with_wrong_password() {
    let user = unverified_user();

    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        hasher: PlainTextHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            email: user.email.clone(),
            password: "wrong horse".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}
