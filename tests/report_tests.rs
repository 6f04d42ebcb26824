use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_roster, rr, setup_test_db, temp_out};

#[test]
fn test_report_exact_chat_format() {
    let db_path = setup_test_db("report_format");
    init_db_with_roster(&db_path);

    rr().args(["--db", &db_path, "report", "--date", "2024-05-10"])
        .assert()
        .success()
        .stdout(contains(
            "*DISPENSA ATUALIZADA* 10/05/2024\n\n*1* - _Ana_\n*2* - _Bea_\n",
        ));
}

#[test]
fn test_report_excludes_away_collaborators() {
    let db_path = setup_test_db("report_away");
    init_db_with_roster(&db_path);

    // Bea (id 2) goes away → report renumbers around her
    rr().args(["--db", &db_path, "away", "2"]).assert().success();

    rr().args(["--db", &db_path, "report", "--date", "2024-05-10"])
        .assert()
        .success()
        .stdout(contains("*1* - _Ana_"))
        .stdout(contains("Bea").not());
}

#[test]
fn test_report_lists_dismissed_after_undismissed() {
    let db_path = setup_test_db("report_order");
    init_db_with_roster(&db_path);

    // Ana gets a dismissal date but stays active → still listed, after Bea
    rr().args(["--db", &db_path, "dismiss", "1", "--date", "2024-01-01"])
        .assert()
        .success();

    rr().args(["--db", &db_path, "report", "--date", "2024-05-10"])
        .assert()
        .success()
        .stdout(contains("*1* - _Bea_\n*2* - _Ana_\n"));
}

#[test]
fn test_report_written_to_file() {
    let db_path = setup_test_db("report_file");
    let out = temp_out("report_file", "txt");
    init_db_with_roster(&db_path);

    rr().args([
        "--db",
        &db_path,
        "report",
        "--date",
        "2024-05-10",
        "--file",
        &out,
    ])
    .assert()
    .success();

    let text = fs::read_to_string(&out).expect("report file written");
    assert_eq!(
        text,
        "*DISPENSA ATUALIZADA* 10/05/2024\n\n*1* - _Ana_\n*2* - _Bea_\n"
    );
}

#[test]
fn test_report_empty_roster_is_header_only() {
    let db_path = setup_test_db("report_empty");

    rr().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rr().args(["--db", &db_path, "report", "--date", "2024-05-10"])
        .assert()
        .success()
        .stdout(contains("*DISPENSA ATUALIZADA* 10/05/2024"));
}

#[test]
fn test_report_invalid_date_fails() {
    let db_path = setup_test_db("report_bad_date");
    init_db_with_roster(&db_path);

    rr().args(["--db", &db_path, "report", "--date", "10/05/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}
