//! Library-level tests for the timeline engine: normalization and
//! duration aggregation.

use eldlogger::core::engine::{aggregate, normalize};
use eldlogger::models::{DutyEntry, DutyStatus};

fn entry(status: DutyStatus, start: &str, end: Option<&str>) -> DutyEntry {
    DutyEntry::new(status, start, end)
}

fn regular_day() -> Vec<DutyEntry> {
    vec![
        entry(
            DutyStatus::OffDuty,
            "2025-05-01T00:00:00Z",
            Some("2025-05-01T06:00:00Z"),
        ),
        entry(
            DutyStatus::Driving,
            "2025-05-01T06:00:00Z",
            Some("2025-05-01T14:00:00Z"),
        ),
        entry(
            DutyStatus::OnDutyNotDriving,
            "2025-05-01T14:00:00Z",
            Some("2025-05-01T14:30:00Z"),
        ),
        entry(
            DutyStatus::OffDuty,
            "2025-05-01T14:30:00Z",
            Some("2025-05-02T00:00:00Z"),
        ),
    ]
}

#[test]
fn normalize_sorts_by_start_minute() {
    let mut entries = regular_day();
    entries.reverse();

    let segments = normalize(&entries).unwrap();

    let starts: Vec<u32> = segments.iter().map(|s| s.start_minute).collect();
    assert_eq!(starts, vec![0, 360, 840, 870]);
}

#[test]
fn normalize_is_order_independent() {
    let entries = regular_day();
    let baseline = normalize(&entries).unwrap();

    // rotate through a few permutations
    let mut rotated = entries.clone();
    for _ in 0..entries.len() {
        rotated.rotate_left(1);
        assert_eq!(normalize(&rotated).unwrap(), baseline);
    }
}

#[test]
fn normalize_is_pure() {
    let entries = regular_day();
    assert_eq!(normalize(&entries).unwrap(), normalize(&entries).unwrap());
}

#[test]
fn midnight_crossing_is_clipped_not_wrapped() {
    let entries = vec![entry(
        DutyStatus::SleeperBerth,
        "2025-05-01T23:00:00Z",
        Some("2025-05-02T01:00:00Z"),
    )];

    let segments = normalize(&entries).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start_minute, 1380);
    assert_eq!(segments[0].end_minute, 1440);
}

#[test]
fn open_entries_are_dropped() {
    let entries = vec![
        entry(
            DutyStatus::Driving,
            "2025-05-01T08:00:00Z",
            Some("2025-05-01T12:00:00Z"),
        ),
        entry(DutyStatus::OnDutyNotDriving, "2025-05-01T12:00:00Z", None),
    ];

    let segments = normalize(&entries).unwrap();
    let durations = aggregate(&segments);

    assert_eq!(segments.len(), 1);
    assert_eq!(
        durations.seconds_for(DutyStatus::OnDutyNotDriving),
        0,
        "open entry must contribute zero duration"
    );
}

#[test]
fn malformed_timestamp_aborts_normalization() {
    let entries = vec![
        entry(
            DutyStatus::Driving,
            "2025-05-01T08:00:00Z",
            Some("2025-05-01T12:00:00Z"),
        ),
        entry(
            DutyStatus::OffDuty,
            "not a timestamp",
            Some("2025-05-01T13:00:00Z"),
        ),
    ];

    assert!(normalize(&entries).is_err());
}

#[test]
fn aggregate_matches_regular_day() {
    let segments = normalize(&regular_day()).unwrap();
    let durations = aggregate(&segments);

    assert_eq!(
        durations.seconds_for(DutyStatus::OffDuty),
        (6 * 60 + 9 * 60 + 30) * 60
    );
    assert_eq!(durations.seconds_for(DutyStatus::Driving), 8 * 3600);
    assert_eq!(
        durations.seconds_for(DutyStatus::OnDutyNotDriving),
        30 * 60
    );
    assert_eq!(durations.seconds_for(DutyStatus::SleeperBerth), 0);
    assert_eq!(durations.total_seconds(), 24 * 3600);

    assert_eq!(durations.label_for(DutyStatus::OffDuty), "15:30:00");
    assert_eq!(durations.label_for(DutyStatus::Driving), "08:00:00");
    assert_eq!(durations.total_label(), "24:00:00");
}

#[test]
fn category_sum_equals_total() {
    let segments = normalize(&regular_day()).unwrap();
    let durations = aggregate(&segments);

    let sum: i64 = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ]
    .iter()
    .map(|s| durations.seconds_for(*s))
    .sum();

    assert_eq!(sum, durations.total_seconds());
    assert!(durations.total_seconds() <= 24 * 3600);
}

#[test]
fn overlapping_entries_double_count() {
    // Two overlapping driving entries: totals reflect the sum, not the union
    let entries = vec![
        entry(
            DutyStatus::Driving,
            "2025-05-01T08:00:00Z",
            Some("2025-05-01T12:00:00Z"),
        ),
        entry(
            DutyStatus::Driving,
            "2025-05-01T10:00:00Z",
            Some("2025-05-01T14:00:00Z"),
        ),
    ];

    let durations = aggregate(&normalize(&entries).unwrap());
    assert_eq!(durations.seconds_for(DutyStatus::Driving), 8 * 3600);
}

#[test]
fn unknown_status_falls_back_to_off_duty() {
    assert_eq!(DutyStatus::from_wire("warp_drive"), DutyStatus::OffDuty);
    assert_eq!(DutyStatus::from_wire("sleeper"), DutyStatus::SleeperBerth);
    assert_eq!(DutyStatus::from_wire("driving").row(), 2);
}
