use ripple_api::domain::repository::VerificationCodeCache;
use ripple_api::error::ApiError;
use ripple_api::usecase::verification::{SendCodeUseCase, VerifyCodeUseCase};

use crate::helpers::{MockCodeCache, MockUserRepo, RecordingDelivery, unverified_user};

#[tokio::test]
async fn should_issue_six_digit_code_and_cache_it() {
    let user = unverified_user();
    let cache = MockCodeCache::empty();
    let entries = cache.entries_handle();
    let delivery = RecordingDelivery::empty();
    let sent = delivery.sent_handle();

    let uc = SendCodeUseCase {
        codes: cache,
        delivery,
    };

    let code = uc.execute(&user).await.unwrap();

    assert_eq!(code.len(), 6, "verification code must be 6 digits");
    assert!(code.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(
        entries.lock().unwrap().get(&user.id),
        Some(&code),
        "code must be cached under the user id"
    );
    assert_eq!(
        sent.lock().unwrap().as_slice(),
        &[(user.email.clone(), code.clone())],
        "code must go through the delivery channel"
    );
}

#[tokio::test]
async fn should_overwrite_previous_pending_code() {
    let user = unverified_user();
    let cache = MockCodeCache::empty();
    let entries = cache.entries_handle();

    let uc = SendCodeUseCase {
        codes: cache,
        delivery: RecordingDelivery::empty(),
    };

    uc.execute(&user).await.unwrap();
    let second = uc.execute(&user).await.unwrap();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1, "one active code per user");
    assert_eq!(entries.get(&user.id), Some(&second));
}

#[tokio::test]
async fn should_verify_matching_code_exactly_once() {
    let user = unverified_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let users_handle = users.users_handle();
    let cache = MockCodeCache::empty();
    cache.put(user.id, "042617").await.unwrap();
    let entries = cache.entries_handle();

    let uc = VerifyCodeUseCase {
        users,
        codes: cache,
    };

    uc.execute(&user, "042617").await.unwrap();

    assert!(
        users_handle.lock().unwrap()[0].is_verified,
        "user must be verified after a matching code"
    );
    assert!(
        entries.lock().unwrap().is_empty(),
        "code must be consumed on success"
    );

    // The code is gone — a second attempt with the same value fails.
    let result = uc.execute(&user, "042617").await;
    assert!(
        matches!(result, Err(ApiError::CodeExpired)),
        "expected CodeExpired, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_code_and_keep_pending() {
    let user = unverified_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let users_handle = users.users_handle();
    let cache = MockCodeCache::empty();
    cache.put(user.id, "042617").await.unwrap();
    let entries = cache.entries_handle();

    let uc = VerifyCodeUseCase {
        users,
        codes: cache,
    };

    let result = uc.execute(&user, "999999").await;

    assert!(
        matches!(result, Err(ApiError::InvalidCode)),
        "expected InvalidCode, got {result:?}"
    );
    assert!(
        !users_handle.lock().unwrap()[0].is_verified,
        "a wrong code must not verify the user"
    );
    assert_eq!(
        entries.lock().unwrap().get(&user.id).map(String::as_str),
        Some("042617"),
        "a wrong code must not consume the pending one"
    );
}

#[tokio::test]
async fn should_compare_codes_with_leading_zeros_intact() {
    let user = unverified_user();
    let cache = MockCodeCache::empty();
    cache.put(user.id, "007123").await.unwrap();

    let uc = VerifyCodeUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        codes: cache,
    };

    // "7123" is the same number but not the same string.
    let result = uc.execute(&user, "7123").await;
    assert!(matches!(result, Err(ApiError::InvalidCode)));

    uc.execute(&user, "007123").await.unwrap();
}
