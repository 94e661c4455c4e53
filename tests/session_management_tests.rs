use attendance_form_bot::error::SessionError;
use attendance_form_bot::services::session_store::SessionStore;
use attendance_form_bot::services::timezone::{singapore_offset, Clock, ManualClock};
use attendance_form_bot::services::users::UserKey;
use chrono::{Duration, TimeZone};
use std::sync::Arc;

/// Helper function to create an isolated store with a scripted clock
fn create_test_store() -> (SessionStore, Arc<ManualClock>) {
    let start = singapore_offset()
        .with_ymd_and_hms(2024, 1, 5, 9, 30, 0)
        .unwrap();
    let clock = Arc::new(ManualClock::new(start));
    (SessionStore::new(clock.clone()), clock)
}

fn users() -> Vec<UserKey> {
    vec![
        UserKey::Username("alice".to_string()),
        UserKey::Username("bob_the_builder".to_string()),
        UserKey::Id(42),
        UserKey::Id(u64::MAX),
    ]
}

#[test]
fn test_second_begin_is_rejected_and_keeps_start() {
    for user in users() {
        let (store, clock) = create_test_store();
        let first = store.begin(user.clone()).unwrap();

        clock.advance(Duration::minutes(5));
        let second = store.begin(user.clone());

        assert_eq!(second, Err(SessionError::AlreadyActive));
        assert_eq!(store.started_at(&user), Some(first.started_at));
        assert_eq!(store.active_count(), 1);
    }
}

#[test]
fn test_end_without_session_does_not_mutate() {
    for user in users() {
        let (store, _clock) = create_test_store();
        let other = UserKey::Username("someone_else".to_string());
        store.begin(other.clone()).unwrap();

        assert_eq!(store.end(&user), Err(SessionError::NoActiveSession));
        assert_eq!(store.active_count(), 1);
        assert!(store.is_active(&other));
    }
}

#[test]
fn test_abort_without_session_does_not_mutate() {
    for user in users() {
        let (store, _clock) = create_test_store();

        assert_eq!(store.abort(&user), Err(SessionError::NoActiveSession));
        assert_eq!(store.active_count(), 0);
    }
}

#[test]
fn test_begin_end_cycle_removes_user() {
    for user in users() {
        let (store, clock) = create_test_store();
        store.begin(user.clone()).unwrap();
        clock.advance(Duration::minutes(10));

        let span = store.end(&user).unwrap();

        assert_eq!(span.duration(), Duration::minutes(10));
        assert!(!store.is_active(&user));
        assert_eq!(store.end(&user), Err(SessionError::NoActiveSession));
    }
}

#[test]
fn test_session_can_restart_after_abort() {
    let (store, clock) = create_test_store();
    let user = UserKey::Id(7);

    store.begin(user.clone()).unwrap();
    store.abort(&user).unwrap();
    clock.advance(Duration::hours(1));
    let restarted = store.begin(user.clone()).unwrap();

    assert_eq!(restarted.started_at, clock.now());
}

#[test]
fn test_username_and_id_keys_do_not_collide() {
    let (store, _clock) = create_test_store();

    store.begin(UserKey::Username("42".to_string())).unwrap();

    assert!(store.begin(UserKey::Id(42)).is_ok());
    assert_eq!(store.active_count(), 2);
}

#[test]
fn test_clones_share_state() {
    let (store, _clock) = create_test_store();
    let handle = store.clone();
    let user = UserKey::Id(1);

    store.begin(user.clone()).unwrap();

    assert!(handle.is_active(&user));
    handle.end(&user).unwrap();
    assert!(!store.is_active(&user));
}

#[tokio::test]
async fn test_concurrent_begins_for_same_user_admit_one() {
    let (store, _clock) = create_test_store();
    let user = UserKey::Id(99);

    let mut tasks = Vec::new();
    for _ in 0..32 {
        let store = store.clone();
        let user = user.clone();
        tasks.push(tokio::spawn(async move { store.begin(user).is_ok() }));
    }

    let mut successes = 0;
    for task in tasks {
        if task.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(store.active_count(), 1);
}

#[tokio::test]
async fn test_concurrent_ends_for_same_user_consume_once() {
    let (store, _clock) = create_test_store();
    let user = UserKey::Id(99);
    store.begin(user.clone()).unwrap();

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let store = store.clone();
        let user = user.clone();
        tasks.push(tokio::spawn(async move { store.end(&user).is_ok() }));
    }

    let mut successes = 0;
    for task in tasks {
        if task.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(store.active_count(), 0);
}
