use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::{eld, sample_trip_json, temp_out, write_log_file};

#[test]
fn render_single_day_to_explicit_file() {
    let file = write_log_file("render_one", sample_trip_json());
    let out = temp_out("render_one", "pdf");

    eld()
        .args([
            "--test",
            "render",
            &file,
            "--date",
            "2025-05-01",
            "--out",
            &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Log sheet for 2025-05-01"));

    let bytes = fs::read(&out).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn render_all_days_into_directory() {
    let file = write_log_file("render_dir", sample_trip_json());

    let dir = env::temp_dir().join("eldlogger_render_dir");
    fs::create_dir_all(&dir).unwrap();
    let dir_arg = dir.to_string_lossy().to_string();

    eld()
        .args(["--test", "render", &file, "--out", &dir_arg, "--force"])
        .assert()
        .success()
        .stdout(contains("daily-log-2025-05-01.pdf"))
        .stdout(contains("daily-log-2025-05-02.pdf"));

    for name in ["daily-log-2025-05-01.pdf", "daily-log-2025-05-02.pdf"] {
        let bytes = fs::read(dir.join(name)).expect("pdf written");
        assert!(bytes.starts_with(b"%PDF"));
    }
}

#[test]
fn render_refuses_one_file_for_many_days() {
    let file = write_log_file("render_conflict", sample_trip_json());
    let out = temp_out("render_conflict", "pdf");

    eld()
        .args(["--test", "render", &file, "--out", &out, "--force"])
        .assert()
        .failure()
        .stderr(contains("single file"));
}
