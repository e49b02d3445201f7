pub mod engine;
pub mod list;
pub mod logsheet;
pub mod render;

pub use logsheet::LogSheet;
