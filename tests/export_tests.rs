use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_entries, setup_test_db, temp_out, wh};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");

    init_db_with_entries(&db_path);

    wh().args(["--db", &db_path, "export", "--format", "csv", "--out", &out])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read csv output");
    assert!(content.starts_with("employee_name,date,hours,task"));
    assert!(content.contains("Ann,2024-05-01,8,QA"));
    assert!(content.contains("Bob,2024-05-02,6,Docs"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");

    init_db_with_entries(&db_path);

    wh().args(["--db", &db_path, "export", "--format", "json", "--out", &out])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("read json output");
    assert!(content.contains("\"employee_name\": \"Ann\""));
    assert!(content.contains("\"task\": \"Docs\""));
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_no_overwrite");
    let out = temp_out("export_no_overwrite", "csv");

    init_db_with_entries(&db_path);
    fs::write(&out, "existing").expect("create existing file");

    wh().args(["--db", &db_path, "export", "--format", "csv", "--out", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    wh().args([
        "--db", &db_path, "export", "--format", "csv", "--out", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv output");
    assert!(content.contains("Ann"));
}

#[test]
fn test_export_with_no_entries_warns() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");

    wh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wh().args(["--db", &db_path, "export", "--format", "csv", "--out", &out])
        .assert()
        .success()
        .stdout(contains("nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}
