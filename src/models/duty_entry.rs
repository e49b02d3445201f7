use super::duty_status::DutyStatus;
use serde::{Deserialize, Serialize};

/// One continuous interval during which the driver held a duty status.
///
/// Timestamps arrive from the backend as RFC 3339 strings already resolved
/// to the viewer's wall clock; they are kept raw here and parsed by the
/// timeline engine, which is where a malformed value must surface as an
/// error. `end_time` is absent while a status is still open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyEntry {
    #[serde(default)]
    pub id: i64,
    pub status: DutyStatus,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl DutyEntry {
    /// Convenience constructor used by tests and fixtures.
    pub fn new(status: DutyStatus, start_time: &str, end_time: Option<&str>) -> Self {
        Self {
            id: 0,
            status,
            start_time: start_time.to_string(),
            end_time: end_time.map(|s| s.to_string()),
            location: None,
            remarks: None,
        }
    }

    /// True when the entry has a recorded end and can appear on the sheet.
    pub fn is_closed(&self) -> bool {
        self.end_time.is_some()
    }
}
