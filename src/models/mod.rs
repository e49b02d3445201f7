pub mod daily_log;
pub mod duty_entry;
pub mod duty_status;

pub use daily_log::DailyLog;
pub use duty_entry::DutyEntry;
pub use duty_status::{ALL_STATUSES, DutyStatus};
