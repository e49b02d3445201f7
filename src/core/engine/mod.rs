//! The daily log timeline engine: a pure, synchronous pipeline from raw
//! duty entries to sorted segments, per-status totals and a drawable path.

pub mod durations;
pub mod normalizer;
pub mod path;

pub use durations::{StatusDurations, aggregate};
pub use normalizer::{NormalizedSegment, normalize};
pub use path::{GridPoint, PathInstruction, build_path};
