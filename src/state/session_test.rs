use super::*;
use crate::util::storage::MemoryStorage;

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::default())
}

fn student(username: &str) -> User {
    User {
        id: derive_user_id(username),
        name: username.to_owned(),
        username: username.to_owned(),
        email: format!("{}@college.edu", derive_user_id(username)),
        role: Role::Student,
    }
}

// =============================================================
// derive_user_id
// =============================================================

#[test]
fn derive_id_lowercases_and_joins_with_underscores() {
    assert_eq!(derive_user_id("Sparsh Rathore"), "sparsh_rathore");
}

#[test]
fn derive_id_ignores_case_differences() {
    assert_eq!(derive_user_id("SPARSH rathore"), derive_user_id("sparsh RATHORE"));
}

#[test]
fn derive_id_collapses_whitespace_runs() {
    assert_eq!(derive_user_id("a  \t b"), "a_b");
    assert_eq!(derive_user_id("a b"), derive_user_id("a \n  b"));
}

#[test]
fn derive_id_keeps_leading_and_trailing_separators() {
    // Matches the legacy behavior: runs are replaced, not trimmed, so ids
    // persisted by earlier versions stay reachable.
    assert_eq!(derive_user_id(" edge "), "_edge_");
}

#[test]
fn derive_id_passes_through_simple_names() {
    assert_eq!(derive_user_id("neo"), "neo");
}

// =============================================================
// Session basics
// =============================================================

#[test]
fn default_session_is_unauthenticated() {
    let session = Session::default();
    assert!(session.user.is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn authenticated_iff_user_present() {
    let mut store = store();
    assert!(!store.session().is_authenticated());
    store.login(student("neo"));
    assert!(store.session().is_authenticated());
    assert!(store.session().user.is_some());
    store.logout();
    assert!(!store.session().is_authenticated());
    assert!(store.session().user.is_none());
}

// =============================================================
// login persistence
// =============================================================

#[test]
fn login_persists_record_synchronously() {
    let mut store = store();
    let user = student("Sparsh Rathore");
    store.login(user.clone());

    let raw = store.storage.read(SESSION_KEY).expect("record written");
    let record: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(record["isAuthenticated"], serde_json::json!(true));
    assert_eq!(record["user"]["id"], serde_json::json!("sparsh_rathore"));
    assert_eq!(record["user"]["role"], serde_json::json!("student"));
    assert_eq!(record["user"]["username"], serde_json::json!(user.username));
}

#[test]
fn persisted_record_round_trips_to_equivalent_session() {
    let mut store = store();
    store.login(student("Trinity"));
    let before = store.session().clone();

    // A fresh store over the same backend must rehydrate the same session.
    let mut reloaded = SessionStore::new(store.storage.clone());
    reloaded.load();
    assert_eq!(reloaded.session(), &before);
}

#[test]
fn second_login_overwrites_persisted_record() {
    let mut store = store();
    store.login(student("first"));
    store.login(student("second"));

    let mut reloaded = SessionStore::new(store.storage.clone());
    reloaded.load();
    let user = reloaded.session().user.as_ref().unwrap();
    assert_eq!(user.id, "second");
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_removes_persisted_record() {
    let mut store = store();
    store.login(student("neo"));
    store.logout();
    assert!(store.storage.read(SESSION_KEY).is_none());
    assert!(!store.session().is_authenticated());
}

#[test]
fn logout_without_login_is_harmless() {
    let mut store = store();
    store.logout();
    assert!(!store.session().is_authenticated());
}

// =============================================================
// rehydration
// =============================================================

#[test]
fn load_with_empty_storage_starts_unauthenticated() {
    let mut store = store();
    store.load();
    assert!(!store.session().is_authenticated());
}

#[test]
fn load_is_idempotent() {
    let mut store = store();
    store.login(student("morpheus"));
    store.load();
    let first = store.session().clone();
    store.load();
    assert_eq!(store.session(), &first);
    assert!(first.is_authenticated());
}

#[test]
fn load_discards_truncated_json() {
    let mut store = store();
    store.storage.write(SESSION_KEY, "{\"user\": {\"id\": \"x\"");
    store.load();
    assert!(!store.session().is_authenticated());
}

#[test]
fn load_discards_wrong_types() {
    let mut store = store();
    store.storage.write(SESSION_KEY, "{\"user\": 42, \"isAuthenticated\": \"yes\"}");
    store.load();
    assert!(!store.session().is_authenticated());
}

#[test]
fn load_discards_flag_user_mismatch() {
    let mut store = store();
    store
        .storage
        .write(SESSION_KEY, "{\"user\": null, \"isAuthenticated\": true}");
    store.load();
    assert!(!store.session().is_authenticated());

    let user_json = serde_json::to_string(&student("neo")).unwrap();
    store.storage.write(
        SESSION_KEY,
        &format!("{{\"user\": {user_json}, \"isAuthenticated\": false}}"),
    );
    store.load();
    assert!(!store.session().is_authenticated());
}

#[test]
fn load_after_corruption_recovers_on_next_login() {
    let mut store = store();
    store.storage.write(SESSION_KEY, "not json at all");
    store.load();
    assert!(!store.session().is_authenticated());

    store.login(student("neo"));
    let mut reloaded = SessionStore::new(store.storage.clone());
    reloaded.load();
    assert!(reloaded.session().is_authenticated());
}

// =============================================================
// roles
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_default_is_student() {
    assert_eq!(Role::default(), Role::Student);
}
