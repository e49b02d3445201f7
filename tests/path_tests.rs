//! Tests for the grid path builder: subpaths, risers, gaps and
//! zero-width segments.

use eldlogger::core::engine::normalizer::NormalizedSegment;
use eldlogger::core::engine::{PathInstruction, build_path};
use eldlogger::models::DutyStatus;

fn seg(status: DutyStatus, start: u32, end: u32) -> NormalizedSegment {
    NormalizedSegment {
        status,
        start_minute: start,
        end_minute: end,
    }
}

fn fraction(minute: u32) -> f64 {
    f64::from(minute) / 1440.0
}

fn has_line_to(path: &[PathInstruction], minute: u32, row: usize) -> bool {
    path.iter().any(|i| match i {
        PathInstruction::LineTo(p) => (p.time - fraction(minute)).abs() < 1e-9 && p.row == row,
        PathInstruction::MoveTo(_) => false,
    })
}

fn move_to_count(path: &[PathInstruction]) -> usize {
    path.iter()
        .filter(|i| matches!(i, PathInstruction::MoveTo(_)))
        .count()
}

#[test]
fn adjoining_segments_get_a_riser_on_both_rows() {
    let segments = vec![
        seg(DutyStatus::Driving, 480, 540),
        seg(DutyStatus::OnDutyNotDriving, 540, 600),
    ];

    let path = build_path(&segments);

    // the transition at 09:00 must touch both rows at the same fraction
    assert!(has_line_to(&path, 540, 2));
    assert!(has_line_to(&path, 540, 3));
}

#[test]
fn full_day_has_four_subpaths_and_three_connectors() {
    let segments = vec![
        seg(DutyStatus::OffDuty, 0, 360),
        seg(DutyStatus::Driving, 360, 840),
        seg(DutyStatus::OnDutyNotDriving, 840, 870),
        seg(DutyStatus::OffDuty, 870, 1440),
    ];

    let path = build_path(&segments);

    assert_eq!(move_to_count(&path), 4);

    // risers at each transition minute, landing on the next status row
    assert!(has_line_to(&path, 360, 2));
    assert!(has_line_to(&path, 840, 3));
    assert!(has_line_to(&path, 870, 0));

    // the day closes at the right edge of the off-duty row
    assert!(has_line_to(&path, 1440, 0));
}

#[test]
fn gap_between_segments_gets_no_connector() {
    let segments = vec![
        seg(DutyStatus::Driving, 300, 400),
        seg(DutyStatus::OffDuty, 500, 600),
    ];

    let path = build_path(&segments);

    assert_eq!(move_to_count(&path), 2);

    // nothing may bridge the 400..500 gap: no instruction on the off-duty
    // row at minute 400, none on the driving row at minute 500
    assert!(!has_line_to(&path, 400, 0));
    assert!(!has_line_to(&path, 500, 2));
}

#[test]
fn zero_width_segment_draws_no_run() {
    let segments = vec![seg(DutyStatus::OnDutyNotDriving, 600, 600)];

    let path = build_path(&segments);

    // a single MoveTo, no degenerate stroke
    assert_eq!(move_to_count(&path), 1);
    assert!(!has_line_to(&path, 600, 3));
}

#[test]
fn zero_width_segment_still_connects_neighbors() {
    let segments = vec![
        seg(DutyStatus::Driving, 500, 600),
        seg(DutyStatus::OnDutyNotDriving, 600, 600),
        seg(DutyStatus::Driving, 600, 700),
    ];

    let path = build_path(&segments);

    // run up to the transition, riser touching the zero-width row, and a
    // second riser back down to the resuming run
    assert!(has_line_to(&path, 600, 2));
    assert!(has_line_to(&path, 600, 3));
    assert!(has_line_to(&path, 700, 2));
}

#[test]
fn empty_input_builds_empty_path() {
    assert!(build_path(&[]).is_empty());
}

#[test]
fn instructions_start_with_move_to() {
    let segments = vec![seg(DutyStatus::SleeperBerth, 0, 120)];
    let path = build_path(&segments);

    assert!(matches!(path.first(), Some(PathInstruction::MoveTo(_))));
    assert!(has_line_to(&path, 120, 1));
}
