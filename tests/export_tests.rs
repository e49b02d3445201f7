use predicates::str::contains;
use std::fs;

mod common;
use common::{eld, sample_trip_json, temp_out, write_log_file};

#[test]
fn export_csv_writes_one_row_per_day() {
    let file = write_log_file("export_csv", sample_trip_json());
    let out = temp_out("export_csv", "csv");

    eld()
        .args([
            "--test", "export", &file, "--format", "csv", "--out", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("date,off_duty,sleeper_berth,driving,on_duty,total"));
    assert!(content.contains("2025-05-01,15:30:00,00:00:00,08:00:00,00:30:00,24:00:00"));
    // day 2: the open on_duty entry contributes nothing
    assert!(content.contains("2025-05-02,00:00:00,00:00:00,04:00:00,00:00:00,04:00:00"));
}

#[test]
fn export_json_round_trips_summaries() {
    let file = write_log_file("export_json", sample_trip_json());
    let out = temp_out("export_json", "json");

    eld()
        .args([
            "--test", "export", &file, "--format", "json", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
    assert_eq!(parsed[0]["driving"], "08:00:00");
    assert_eq!(parsed[0]["total"], "24:00:00");
}

#[test]
fn export_xlsx_creates_workbook() {
    let file = write_log_file("export_xlsx", sample_trip_json());
    let out = temp_out("export_xlsx", "xlsx");

    eld()
        .args([
            "--test", "export", &file, "--format", "xlsx", "--out", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn export_requires_absolute_output_path() {
    let file = write_log_file("export_relative", sample_trip_json());

    eld()
        .args([
            "--test",
            "export",
            &file,
            "--format",
            "csv",
            "--out",
            "relative.csv",
            "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_single_day_filter() {
    let file = write_log_file("export_one_day", sample_trip_json());
    let out = temp_out("export_one_day", "csv");

    eld()
        .args([
            "--test",
            "export",
            &file,
            "--format",
            "csv",
            "--out",
            &out,
            "--date",
            "2025-05-01",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("2025-05-01"));
    assert!(!content.contains("2025-05-02"));
}
