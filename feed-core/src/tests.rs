use crate::app::AppState;
use crate::auth::AuthStore;
use crate::posts::PostStore;
use crate::user::{email_local_part, initials};
use chrono::{DateTime, TimeZone, Utc};
use fs_storage::base_storage::BaseStorage;
use fs_storage::file_storage::FileStorage;
use fs_storage::{POSTS_KEY, STORAGE_FILE, USER_KEY};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use serde_json::Value;
use tempdir::TempDir;

fn at(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

fn open_file_state(dir: &TempDir) -> AppState<FileStorage<String, Value>> {
    let storage =
        FileStorage::new("feed".to_owned(), &dir.path().join(STORAGE_FILE))
            .expect("Could not open storage");
    AppState::open(storage).expect("Could not open state")
}

// properties

#[quickcheck]
fn login_initials_are_derived_from_synthesized_name(
    email: String,
    password: String,
) -> TestResult {
    if email.is_empty() || password.is_empty() {
        return TestResult::discard();
    }

    let mut first = AuthStore::new();
    let mut second = AuthStore::new();
    let a = first.login(&email, &password, at(1)).unwrap().clone();
    let b = second.login(&email, &password, at(2)).unwrap().clone();

    TestResult::from_bool(
        a.name == email_local_part(&email)
            && a.initials == initials(&a.name)
            && a.initials == b.initials,
    )
}

#[quickcheck]
fn liking_twice_restores_post(index: usize, email: String) -> TestResult {
    if email.is_empty() {
        return TestResult::discard();
    }

    let mut auth = AuthStore::new();
    let user = auth.login(&email, "pw", at(1)).unwrap().clone();
    let mut store = PostStore::seeded();
    let id = store.posts()[index % store.posts().len()].id.clone();
    let before = store.clone();

    let first = store.like_post(Some(&user), &id);
    let second = store.like_post(Some(&user), &id);

    TestResult::from_bool(
        first == Some(true) && second == Some(false) && store == before,
    )
}

#[quickcheck]
fn add_then_delete_restores_feed(content: String, image: Option<String>) -> bool {
    let mut auth = AuthStore::new();
    let user = auth.login("a@b.c", "pw", at(7)).unwrap().clone();
    let mut store = PostStore::seeded();
    let before = store.clone();

    let id = store
        .add_post(Some(&user), &content, image.as_deref(), at(9))
        .map(|post| post.id.clone())
        .unwrap();

    store.delete_post(&id) && store == before
}

#[quickcheck]
fn anonymous_add_and_like_leave_feed_unchanged(
    content: String,
    index: usize,
) -> bool {
    let mut store = PostStore::seeded();
    let id = store.posts()[index % store.posts().len()].id.clone();

    store.add_post(None, &content, None, at(1));
    store.like_post(None, &id);

    store == PostStore::seeded()
}

// persistence across reloads

#[test_log::test]
fn logout_survives_reload() {
    let dir = TempDir::new("feed-core").unwrap();

    let mut state = open_file_state(&dir);
    state.login("jane@example.com", "pw").unwrap();
    drop(state);

    let mut state = open_file_state(&dir);
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("jane"));
    state.logout().unwrap();
    drop(state);

    let state = open_file_state(&dir);
    assert!(!state.is_authenticated());
    assert!(!state.storage().as_ref().contains_key(USER_KEY));
}

#[test]
fn feed_changes_survive_reload() {
    let dir = TempDir::new("feed-core").unwrap();

    let mut state = open_file_state(&dir);
    state
        .signup("Jane Smith", "jane@example.com", "pw", "PM")
        .unwrap();
    let post = state
        .add_post("Shipping today", Some("https://img/1.png"))
        .unwrap()
        .unwrap();
    state.like_post("2").unwrap();
    state.delete_post("3").unwrap();
    drop(state);

    let state = open_file_state(&dir);
    let ids: Vec<&str> = state.posts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![post.id.as_str(), "1", "2"]);
    assert!(state.posts()[2].is_liked_by(state.user()));
    assert!(state.posts()[0].is_authored_by(state.user()));
}

#[test]
fn reload_reads_what_was_written() {
    let dir = TempDir::new("feed-core").unwrap();
    let path = dir.path().join(STORAGE_FILE);

    let state = open_file_state(&dir);
    let written = state.posts().to_vec();
    drop(state);

    let mut storage: FileStorage<String, Value> =
        FileStorage::new("raw".to_owned(), &path).unwrap();
    let entries = storage.read_fs().unwrap();
    let stored: Vec<crate::Post> =
        serde_json::from_value(entries[POSTS_KEY].clone()).unwrap();
    assert_eq!(stored, written);
}
