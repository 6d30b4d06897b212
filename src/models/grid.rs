use serde::{Deserialize, Serialize};

/// Weekday columns of the timetable grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Column key used by the grid template
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Monday => "M",
            Self::Tuesday => "T",
            Self::Wednesday => "W",
            Self::Thursday => "Th",
            Self::Friday => "F",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }

    /// Position in the week (0 = Monday, 4 = Friday)
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get weekday from index (0 = Monday, 4 = Friday)
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Monday),
            1 => Some(Self::Tuesday),
            2 => Some(Self::Wednesday),
            3 => Some(Self::Thursday),
            4 => Some(Self::Friday),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.column() == column)
    }
}

/// One row of the weekly grid template.
///
/// Weekday cells hold the canonical slot token for that period (e.g. "A1"),
/// or arbitrary text such as "Lunch" that is shown as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    #[serde(rename = "Slot", default)]
    pub label: String,
    #[serde(rename = "M", default)]
    pub monday: Option<String>,
    #[serde(rename = "T", default)]
    pub tuesday: Option<String>,
    #[serde(rename = "W", default)]
    pub wednesday: Option<String>,
    #[serde(rename = "Th", default)]
    pub thursday: Option<String>,
    #[serde(rename = "F", default)]
    pub friday: Option<String>,
}

impl GridRow {
    #[must_use]
    pub fn cell(&self, day: Weekday) -> Option<&str> {
        match day {
            Weekday::Monday => self.monday.as_deref(),
            Weekday::Tuesday => self.tuesday.as_deref(),
            Weekday::Wednesday => self.wednesday.as_deref(),
            Weekday::Thursday => self.thursday.as_deref(),
            Weekday::Friday => self.friday.as_deref(),
        }
    }

    pub fn set_cell(&mut self, day: Weekday, value: Option<String>) {
        match day {
            Weekday::Monday => self.monday = value,
            Weekday::Tuesday => self.tuesday = value,
            Weekday::Wednesday => self.wednesday = value,
            Weekday::Thursday => self.thursday = value,
            Weekday::Friday => self.friday = value,
        }
    }
}
