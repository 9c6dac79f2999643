// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session store behavior: atomic snapshots, logout signaling, and the
//! structural check_auth contract.

mod common;

use gymtrack_client::models::UserRecord;
use gymtrack_client::session::SessionStore;
use serde_json::json;

fn user(email: &str) -> UserRecord {
    UserRecord {
        email: email.to_string(),
        name: String::new(),
        username: String::new(),
        phone: String::new(),
        address: String::new(),
        birth_date: None,
        gender: None,
        is_verified: true,
        role: "user".to_string(),
    }
}

#[test]
fn test_snapshot_observes_both_fields_or_neither() {
    let store = SessionStore::new();
    assert!(store.snapshot().is_none());

    let token = common::token_with_claims(&json!({"sub": "ana@example.com"}));
    store.login(token.clone(), user("ana@example.com"));

    let snapshot = store.snapshot().expect("session should exist");
    assert_eq!(snapshot.token, token);
    assert_eq!(snapshot.user.email, "ana@example.com");
}

#[test]
fn test_logout_clears_the_session() {
    let store = SessionStore::new();
    let token = common::token_with_claims(&json!({"sub": "ana@example.com"}));
    store.login(token, user("ana@example.com"));

    store.logout();

    assert!(store.snapshot().is_none());
    assert!(!store.check_auth());

    // Logging out twice is harmless.
    store.logout();
    assert!(store.snapshot().is_none());
}

#[test]
fn test_second_login_replaces_the_first() {
    let store = SessionStore::new();
    let first = common::token_with_claims(&json!({"sub": "first@example.com"}));
    let second = common::token_with_claims(&json!({"sub": "second@example.com"}));

    store.login(first, user("first@example.com"));
    store.login(second, user("second@example.com"));

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.user.email, "second@example.com");
}

#[test]
fn test_check_auth_is_structural_only() {
    let store = SessionStore::new();

    // Well-formed token passes without any server contact.
    let token = common::token_with_claims(&json!({"sub": "ana@example.com"}));
    store.login(token, user("ana@example.com"));
    assert!(store.check_auth());

    // A token that no longer splits into three decodable segments fails.
    store.login("not.a-real-token".to_string(), user("ana@example.com"));
    assert!(!store.check_auth());

    store.login(String::new(), user("ana@example.com"));
    assert!(!store.check_auth());
}

#[tokio::test]
async fn test_subscribers_observe_login_and_logout() {
    let store = SessionStore::new();
    let mut rx = store.subscribe();

    let token = common::token_with_claims(&json!({"sub": "ana@example.com"}));
    store.login(token, user("ana@example.com"));

    rx.changed().await.expect("sender alive");
    assert!(rx.borrow().is_some());

    store.logout();

    rx.changed().await.expect("sender alive");
    assert!(rx.borrow().is_none());
}

#[test]
fn test_clones_share_the_same_slot() {
    let store = SessionStore::new();
    let handle = store.clone();

    let token = common::token_with_claims(&json!({"sub": "ana@example.com"}));
    handle.login(token, user("ana@example.com"));

    assert!(store.snapshot().is_some());
    store.logout();
    assert!(handle.snapshot().is_none());
}
