//! End-to-end tests against the real Argon2id hasher

mod common;

use std::pin::pin;
use std::task::{Context, Poll, Waker};

use common::*;
use latch_credential::prelude::*;

/// Drives `future` to completion on this thread without any async runtime
fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}

#[tokio::test]
async fn test_create_and_verify_with_defaults() {
    let service = argon2_service();

    let credential = service.create(PW, CreateOptions::default()).await.unwrap();

    assert!(credential.stringify().starts_with("$argon2id$"));
    assert!(credential.stringify().contains("t=10"));
    assert!(service.verify(&credential, PW).await.unwrap());
    assert!(!service.verify(&credential, PW_MIN).await.unwrap());
}

#[tokio::test]
async fn test_expired_credential_is_rejected() {
    let service = argon2_service();

    let credential = service
        .create("validSecret", CreateOptions::new().with_expiry(0))
        .await
        .unwrap();

    assert!(!service.verify(&credential, "validSecret").await.unwrap());
}

#[tokio::test]
async fn test_short_plaintext_with_custom_minimum() {
    let service = argon2_service();

    let err = service
        .create(PW_MIN, CreateOptions::new().with_min_length(8))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidPlain);
}

#[tokio::test]
async fn test_restored_credential_verifies() {
    let service = argon2_service();
    let credential = service
        .create(PW, CreateOptions::new().with_cost(1))
        .await
        .unwrap();

    let json = serde_json::to_string(&credential).unwrap();
    let restored: Credential = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.stringify(), credential.stringify());
    assert!(service.verify(&restored, PW).await.unwrap());
}

#[tokio::test]
async fn test_foreign_digest_is_hashing_failure() {
    let service = argon2_service();
    let credential = service
        .restore(CredentialRecord::new("$2b$10$notanargon2digest", 0, None))
        .unwrap();

    let err = service.verify(&credential, PW).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HashingFailure);
}

#[tokio::test]
async fn test_rejected_parameters_are_hashing_failure() {
    init_logging();
    let service = CredentialService::builder()
        .hasher(std::sync::Arc::new(Argon2Hasher::new(
            latch_credential::Argon2Config {
                memory_kib: 4,
                parallelism: 1,
            },
        )))
        .build();

    let err = service.create(PW, CreateOptions::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HashingFailure);
}

#[tokio::test]
async fn test_credential_convenience_api() {
    init_logging();

    let credential = Credential::create(PW, CreateOptions::default()).await.unwrap();
    assert!(credential.verify(PW).await.unwrap());
    assert_eq!(credential.to_string(), credential.stringify());

    let expired = Credential::create("validSecret", CreateOptions::new().with_expiry(0).with_cost(1))
        .await
        .unwrap();
    assert!(!expired.verify("validSecret").await.unwrap());
}

#[test]
fn test_convenience_api_outside_tokio() {
    let credential = block_on(Credential::create(PW, CreateOptions::new().with_cost(1))).unwrap();

    assert!(credential.stringify().starts_with("$argon2id$"));
    assert!(block_on(credential.verify(PW)).unwrap());
    assert!(!block_on(credential.verify(PW_MIN)).unwrap());

    let err = block_on(Credential::create(PW_MIN, CreateOptions::new().with_min_length(8)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPlain);
}
