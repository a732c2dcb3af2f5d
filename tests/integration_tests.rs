use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_entries, setup_test_db, wh};

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("add_and_list");

    wh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wh().args(["--db", &db_path, "add", "Ann", "2024-05-01", "8", "QA"])
        .assert()
        .success()
        .stdout(contains("Entry added successfully."));

    wh().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ann"))
        .stdout(contains("2024-05-01"))
        .stdout(contains("QA"));
}

#[test]
fn test_add_rejects_empty_field() {
    let db_path = setup_test_db("add_empty_field");

    wh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // empty task → warning, nothing stored
    wh().args(["--db", &db_path, "add", "Ann", "2024-05-01", "8", ""])
        .assert()
        .success()
        .stdout(contains("All fields are required."));

    wh().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn test_add_allows_duplicates() {
    let db_path = setup_test_db("add_duplicates");

    wh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for _ in 0..2 {
        wh().args(["--db", &db_path, "add", "Ann", "2024-05-01", "8", "QA"])
            .assert()
            .success();
    }

    // a second identical row exists, so deleting position 2 works
    wh().args(["--db", &db_path, "del", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Entry #2 deleted."));
}

#[test]
fn test_del_removes_correct_entry() {
    let db_path = setup_test_db("del_correct");

    init_db_with_entries(&db_path);

    wh().args(["--db", &db_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Entry #1 deleted."));

    wh().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Ann").not());
}

#[test]
fn test_del_out_of_range_fails() {
    let db_path = setup_test_db("del_out_of_range");

    init_db_with_entries(&db_path);

    wh().args(["--db", &db_path, "del", "5"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("Invalid entry index"));
}

#[test]
fn test_del_cancelled_keeps_list() {
    let db_path = setup_test_db("del_cancelled");

    init_db_with_entries(&db_path);

    wh().args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    wh().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ann"));
}

#[test]
fn test_clear_empties_list() {
    let db_path = setup_test_db("clear_all");

    init_db_with_entries(&db_path);

    wh().args(["--db", &db_path, "clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("All entries cleared."));

    wh().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate");

    wh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wh().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed."));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_info");

    init_db_with_entries(&db_path);

    wh().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));

    wh().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total entries:"))
        .stdout(contains("Schema version:"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");

    init_db_with_entries(&db_path);

    wh().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Entry added for 2024-05-01"));
}
