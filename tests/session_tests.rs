use predicates::str::contains;
use std::collections::HashMap;

use workhours::core::session::{LoginOutcome, REMEMBERED_USER_KEY, Session};
use workhours::errors::AppResult;
use workhours::store::KeyValueStore;

mod common;
use common::{init_db_with_login, setup_test_db, wh};

/// Minimal in-memory key-value store for driving the session state machine
/// without a database.
#[derive(Default)]
struct MemStore(HashMap<String, String>);

impl KeyValueStore for MemStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.0.remove(key);
        Ok(())
    }
}

#[test]
fn test_login_persists_remembered_identity() {
    let mut store = MemStore::default();
    let mut session = Session::default();

    let outcome = session.login(&mut store, "  ann  ").unwrap();
    assert_eq!(outcome, LoginOutcome::Accepted);
    assert_eq!(session.username(), Some("ann"));
    assert_eq!(
        store.get_item(REMEMBERED_USER_KEY).unwrap().as_deref(),
        Some("ann")
    );
}

#[test]
fn test_blank_login_is_a_noop() {
    let mut store = MemStore::default();
    let mut session = Session::default();

    let outcome = session.login(&mut store, "   ").unwrap();
    assert_eq!(outcome, LoginOutcome::RejectedBlank);
    assert!(!session.is_logged_in());
    assert!(store.get_item(REMEMBERED_USER_KEY).unwrap().is_none());
}

#[test]
fn test_restore_picks_up_remembered_identity() {
    let mut store = MemStore::default();
    store.set_item(REMEMBERED_USER_KEY, "bob").unwrap();

    let session = Session::restore(&store).unwrap();
    assert!(session.is_logged_in());
    assert_eq!(session.username(), Some("bob"));
}

#[test]
fn test_logout_forgets_identity() {
    let mut store = MemStore::default();
    let mut session = Session::default();

    session.login(&mut store, "ann").unwrap();
    session.logout(&mut store).unwrap();

    assert!(!session.is_logged_in());
    assert!(store.get_item(REMEMBERED_USER_KEY).unwrap().is_none());
    assert!(Session::restore(&store).unwrap().username().is_none());
}

#[test]
fn test_cli_login_is_remembered_across_invocations() {
    let db_path = setup_test_db("cli_login_remembered");

    init_db_with_login(&db_path, "ann");

    // a separate invocation restores the session automatically
    wh().args(["--db", &db_path, "cal"])
        .assert()
        .success()
        .stdout(contains("ann"));
}

#[test]
fn test_cli_blank_login_rejected() {
    let db_path = setup_test_db("cli_blank_login");

    wh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wh().args(["--db", &db_path, "login", "   "])
        .assert()
        .success()
        .stdout(contains("Username cannot be empty."));

    wh().args(["--db", &db_path, "cal"])
        .assert()
        .success()
        .stdout(contains("No user logged in"));
}

#[test]
fn test_cli_logout() {
    let db_path = setup_test_db("cli_logout");

    init_db_with_login(&db_path, "ann");

    wh().args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out."));

    wh().args(["--db", &db_path, "cal"])
        .assert()
        .success()
        .stdout(contains("No user logged in"));
}

#[test]
fn test_cli_logout_when_not_logged_in() {
    let db_path = setup_test_db("cli_logout_noop");

    wh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wh().args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("No user logged in."));
}
