use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_roster, rr, setup_test_db, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_roster(&db_path);

    rr().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.starts_with("id,name,away,dismissed_at,created_at"));
    assert!(content.contains("Ana"));
    assert!(content.contains("Bea"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_roster(&db_path);

    rr().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("json written");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let records = parsed.as_array().expect("array of collaborators");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "Ana");
    assert_eq!(records[0]["away"], false);
    assert!(records[0]["dismissed_at"].is_null());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_roster(&db_path);

    fs::write(&out, "stale content").expect("seed file");

    rr().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.contains("Ana"));
    assert!(!content.contains("stale content"));
}

#[test]
fn test_export_csv_carries_dismissal_dates() {
    let db_path = setup_test_db("export_dismissed");
    let out = temp_out("export_dismissed", "csv");
    init_db_with_roster(&db_path);

    rr().args(["--db", &db_path, "dismiss", "1", "--date", "2024-01-15"])
        .assert()
        .success();

    rr().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.contains("2024-01-15 00:00:00"));
}

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("backup_copy");
    let out = temp_out("backup_copy", "sqlite");
    init_db_with_roster(&db_path);

    rr().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let src_len = fs::metadata(&db_path).expect("source db").len();
    let dst_len = fs::metadata(&out).expect("backup file").len();
    assert_eq!(src_len, dst_len);
}
