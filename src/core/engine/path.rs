//! Builds the continuous duty-status stroke for the 24-hour grid.
//!
//! The output is a list of drawing instructions in grid-normalized
//! coordinates: time as a fraction of the day on the horizontal axis and
//! the status row index on the vertical axis. A renderer scales those to
//! whatever surface it draws on; nothing here knows about pixels.

use super::normalizer::NormalizedSegment;
use crate::utils::time::day_fraction;

/// A point on the abstract grid: `time` in [0, 1], `row` in 0..=3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub time: f64,
    pub row: usize,
}

/// One drawing instruction. Drawn in order with a single stroke, the
/// sequence renders as the conventional step chart: horizontal runs at
/// each status row, vertical risers exactly at transition minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathInstruction {
    MoveTo(GridPoint),
    LineTo(GridPoint),
}

impl PathInstruction {
    pub fn point(&self) -> GridPoint {
        match self {
            PathInstruction::MoveTo(p) | PathInstruction::LineTo(p) => *p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointKind {
    Start,
    End,
}

/// Start or end marker of a segment, the unit the sweep walks over.
#[derive(Debug, Clone, Copy)]
struct TimelinePoint {
    minute: u32,
    row: usize,
    kind: PointKind,
}

impl TimelinePoint {
    fn grid_point(&self) -> GridPoint {
        GridPoint {
            time: day_fraction(self.minute),
            row: self.row,
        }
    }
}

/// Sweep state: the previous point seen and, per row, the minute at which
/// the currently open subpath began (if any).
#[derive(Debug, Clone, Copy, Default)]
struct SweepState {
    prev: Option<TimelinePoint>,
    open_at: [Option<u32>; 4],
}

/// Build the drawable path for one day of normalized segments.
///
/// Each segment contributes a start and an end point; the points are
/// stable-sorted by minute and walked once. A start opens a new subpath
/// (`MoveTo`); an end closes the run (`LineTo`). Where an end and the next
/// start share the same minute, riser `LineTo`s are emitted so adjoining
/// segments read as one unbroken step. Segments separated by a gap get no
/// connector: the pen lifts and a fresh subpath begins.
///
/// Zero-width segments contribute no run of their own, only their
/// connector behavior, so they never break stroke continuity.
pub fn build_path(segments: &[NormalizedSegment]) -> Vec<PathInstruction> {
    let mut points = Vec::with_capacity(segments.len() * 2);
    for seg in segments {
        points.push(TimelinePoint {
            minute: seg.start_minute,
            row: seg.status.row(),
            kind: PointKind::Start,
        });
        points.push(TimelinePoint {
            minute: seg.end_minute,
            row: seg.status.row(),
            kind: PointKind::End,
        });
    }
    points.sort_by_key(|p| p.minute);

    let mut path = Vec::with_capacity(points.len() * 2);
    let mut state = SweepState::default();

    for (i, point) in points.iter().enumerate() {
        match point.kind {
            PointKind::Start => {
                path.push(PathInstruction::MoveTo(point.grid_point()));

                // Step down/up from a status that just ended at this minute.
                if let Some(prev) = state.prev
                    && prev.kind == PointKind::End
                    && prev.minute == point.minute
                    && prev.row != point.row
                {
                    path.push(PathInstruction::LineTo(point.grid_point()));
                }

                state.open_at[point.row] = Some(point.minute);
            }
            PointKind::End => {
                // A zero-width segment has no horizontal run to draw.
                let zero_width = state.open_at[point.row] == Some(point.minute);
                if !zero_width {
                    path.push(PathInstruction::LineTo(point.grid_point()));
                }

                // Riser to the segment starting at this exact minute.
                if let Some(next) = points.get(i + 1)
                    && next.kind == PointKind::Start
                    && next.minute == point.minute
                {
                    path.push(PathInstruction::LineTo(next.grid_point()));
                }

                state.open_at[point.row] = None;
            }
        }
        state.prev = Some(*point);
    }

    path
}
