//! Weekly grid projection of a slot mapping.

use serde::{Deserialize, Serialize};

use crate::filter::MarkerFamily;
use crate::logging::{log, warn};
use crate::models::{Course, GridRow, Weekday};
use crate::slot_map::{build_slot_map, SlotMapping};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimetableCell {
    /// Template text shown as-is (slot label, unmapped slot, blank)
    Label(String),
    /// Exactly one course meets in this slot
    Course(String),
    /// Several courses meet in this slot
    Conflict(Vec<String>),
}

impl TimetableCell {
    fn from_template(raw: Option<&str>, mapping: &SlotMapping) -> Self {
        let raw = raw.unwrap_or_default();
        match mapping.entries(raw.trim()) {
            Some([single]) => Self::Course(single.clone()),
            Some(entries) if !entries.is_empty() => Self::Conflict(entries.to_vec()),
            _ => Self::Label(raw.to_string()),
        }
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    pub label: String,
    /// Monday to Friday
    pub cells: [TimetableCell; 5],
}

impl TimetableRow {
    #[must_use]
    pub fn cell(&self, day: Weekday) -> &TimetableCell {
        &self.cells[day.index()]
    }
}

/// Join the grid template with a slot mapping
#[must_use]
pub fn project_grid(grid: &[GridRow], mapping: &SlotMapping) -> Vec<TimetableRow> {
    grid.iter()
        .map(|row| TimetableRow {
            label: row.label.clone(),
            cells: Weekday::ALL.map(|day| TimetableCell::from_template(row.cell(day), mapping)),
        })
        .collect()
}

/// One projected timetable per half-semester marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfTimetables {
    pub halves: Vec<(String, Vec<TimetableRow>)>,
}

impl HalfTimetables {
    /// Build every half's grid from the selected courses.
    ///
    /// Returns `None` (and logs a warning) when the grid template is
    /// missing. An empty selection still projects every half with the
    /// template's raw labels.
    #[must_use]
    pub fn build(selected: &[&Course], grid: &[GridRow], family: &MarkerFamily) -> Option<Self> {
        if grid.is_empty() {
            warn!(
                "Timetable not rendered: no grid template ({} selected courses)",
                selected.len()
            );
            return None;
        }

        let halves = family
            .partition(selected)
            .into_iter()
            .map(|(marker, courses)| {
                let mapping = build_slot_map(courses);
                log!("{}: {} slots mapped", marker, mapping.len());
                (marker, project_grid(grid, &mapping))
            })
            .collect();

        Some(Self { halves })
    }

    /// Grid shown first (the first marker of the family)
    #[must_use]
    pub fn default_view(&self) -> Option<&[TimetableRow]> {
        self.halves.first().map(|(_, rows)| rows.as_slice())
    }

    #[must_use]
    pub fn half(&self, marker: &str) -> Option<&[TimetableRow]> {
        self.halves
            .iter()
            .find(|(name, _)| name == marker)
            .map(|(_, rows)| rows.as_slice())
    }
}
