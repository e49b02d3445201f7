use super::duty_entry::DutyEntry;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One calendar day of duty entries, as delivered by the trip-results API.
/// Entries may arrive in any order; ordering is the engine's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub trip: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub entries: Vec<DutyEntry>,
}

/// The backend returns either a single log object or the full array of
/// logs for a trip; accept both shapes transparently.
#[derive(Deserialize)]
#[serde(untagged)]
enum LogFile {
    One(DailyLog),
    Many(Vec<DailyLog>),
}

impl DailyLog {
    /// Load all daily logs contained in a JSON file.
    pub fn load_all(path: &Path) -> AppResult<Vec<DailyLog>> {
        let content = fs::read_to_string(path)?;
        let parsed: LogFile = serde_json::from_str(&content)?;

        let mut logs = match parsed {
            LogFile::One(log) => vec![log],
            LogFile::Many(logs) => logs,
        };

        // Stable order by calendar day regardless of API ordering
        logs.sort_by_key(|l| l.date);
        Ok(logs)
    }

    /// Load logs and keep only the requested day, if any filter is given.
    pub fn load_filtered(path: &Path, date: Option<NaiveDate>) -> AppResult<Vec<DailyLog>> {
        let logs = Self::load_all(path)?;

        match date {
            None => Ok(logs),
            Some(d) => {
                let selected: Vec<DailyLog> =
                    logs.into_iter().filter(|l| l.date == d).collect();
                if selected.is_empty() {
                    return Err(AppError::NoLogForDate(d.format("%Y-%m-%d").to_string()));
                }
                Ok(selected)
            }
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
