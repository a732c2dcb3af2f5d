#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wh() -> Command {
    cargo_bin_cmd!("workhours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small entry dataset useful for many tests
pub fn init_db_with_entries(db_path: &str) {
    wh().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wh().args(["--db", db_path, "add", "Ann", "2024-05-01", "8", "QA"])
        .assert()
        .success();

    wh().args(["--db", db_path, "add", "Bob", "2024-05-02", "6", "Docs"])
        .assert()
        .success();
}

/// Initialize DB and log in as the given user
pub fn init_db_with_login(db_path: &str, username: &str) {
    wh().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wh().args(["--db", db_path, "login", username])
        .assert()
        .success();
}
