#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eld() -> Command {
    cargo_bin_cmd!("eldlogger")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldlogger_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a log fixture file into tempdir and return its path
pub fn write_log_file(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldlogger_logs.json", name));
    fs::write(&path, json).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Two-day trip fixture: a full regular day plus a day with an open entry.
pub fn sample_trip_json() -> &'static str {
    r#"[
      {
        "id": 1,
        "trip": 7,
        "date": "2025-05-01",
        "entries": [
          { "id": 11, "status": "off_duty", "start_time": "2025-05-01T00:00:00Z", "end_time": "2025-05-01T06:00:00Z" },
          { "id": 12, "status": "driving",  "start_time": "2025-05-01T06:00:00Z", "end_time": "2025-05-01T14:00:00Z" },
          { "id": 13, "status": "on_duty",  "start_time": "2025-05-01T14:00:00Z", "end_time": "2025-05-01T14:30:00Z" },
          { "id": 14, "status": "off_duty", "start_time": "2025-05-01T14:30:00Z", "end_time": "2025-05-02T00:00:00Z" }
        ]
      },
      {
        "id": 2,
        "trip": 7,
        "date": "2025-05-02",
        "entries": [
          { "id": 21, "status": "driving",  "start_time": "2025-05-02T08:00:00Z", "end_time": "2025-05-02T12:00:00Z" },
          { "id": 22, "status": "on_duty",  "start_time": "2025-05-02T12:00:00Z" }
        ]
      }
    ]"#
}
