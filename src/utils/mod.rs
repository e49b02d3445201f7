pub mod formatting;
pub mod time;

pub use formatting::strip_ansi;
pub use time::format_hms;
