use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The four duty categories a driver's day is split into.
/// Row order matches the printed log sheet (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

/// All statuses in grid-row order. Useful for iterating the sheet rows.
pub const ALL_STATUSES: [DutyStatus; 4] = [
    DutyStatus::OffDuty,
    DutyStatus::SleeperBerth,
    DutyStatus::Driving,
    DutyStatus::OnDutyNotDriving,
];

impl DutyStatus {
    /// Parse the wire string used by the routing backend.
    /// Unknown values fall back to `OffDuty` (row 0), same as the legacy
    /// viewer did; the backend only ever emits the four known codes.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "off_duty" => DutyStatus::OffDuty,
            "sleeper" => DutyStatus::SleeperBerth,
            "driving" => DutyStatus::Driving,
            "on_duty" => DutyStatus::OnDutyNotDriving,
            _ => DutyStatus::OffDuty,
        }
    }

    /// Wire string (stable, used for JSON export as well).
    pub fn as_wire(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::SleeperBerth => "sleeper",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDutyNotDriving => "on_duty",
        }
    }

    /// Grid row index on the 4-row log sheet (0 = top).
    pub fn row(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDutyNotDriving => 3,
        }
    }

    /// Human-readable label for tables and sheet margins.
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (Not Driving)",
        }
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, DutyStatus::Driving)
    }
}

impl Serialize for DutyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for DutyStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(DutyStatus::from_wire(&s))
    }
}
