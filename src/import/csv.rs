use std::collections::HashMap;

use crate::constants::{CANONICAL_COLUMNS, COL_INSTRUCTORS, GRID_LABEL_COLUMN};
use crate::logging::{log, warn};
use crate::models::{Course, GridRow, Weekday};

/// Header name → column position, headers trimmed
fn header_positions(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (header.trim().to_string(), idx))
        .collect()
}

/// Parse the timetable sheet (exported as CSV) into catalog courses.
///
/// Only the canonical columns are kept; extra columns are ignored. Rows
/// without an instructor are not offered courses and are dropped.
///
/// # Errors
///
/// Returns an error if the CSV cannot be read or a canonical column is
/// missing from the header row
pub fn parse_catalog_csv(content: &str) -> Result<Vec<Course>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read catalog header: {e}"))?;
    let positions = header_positions(headers);

    let missing: Vec<&str> = CANONICAL_COLUMNS
        .iter()
        .copied()
        .filter(|column| !positions.contains_key(*column))
        .collect();
    if !missing.is_empty() {
        return Err(format!("Catalog is missing columns: {}", missing.join(", ")));
    }

    let mut courses = Vec::new();
    let mut dropped = 0;
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("Failed to read catalog row {}: {e}", line + 1))?;

        let mut course = Course::default();
        for column in CANONICAL_COLUMNS {
            let value = positions
                .get(column)
                .and_then(|&idx| record.get(idx))
                .unwrap_or_default();
            if let Some(field) = course.column_mut(column) {
                *field = value.to_string();
            }
        }

        if course.instructors.trim().is_empty() {
            dropped += 1;
            continue;
        }
        courses.push(course);
    }

    log!(
        "Imported {} courses ({} rows without {} dropped)",
        courses.len(),
        dropped,
        COL_INSTRUCTORS
    );

    Ok(courses)
}

/// Parse the weekly grid template ("Slot", "M", "T", "W", "Th", "F").
///
/// Missing weekday columns and blank cells become empty cells.
///
/// # Errors
///
/// Returns an error if the CSV cannot be read or has no "Slot" column
pub fn parse_grid_csv(content: &str) -> Result<Vec<GridRow>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read grid header: {e}"))?;
    let positions = header_positions(headers);

    let label_idx = *positions
        .get(GRID_LABEL_COLUMN)
        .ok_or_else(|| format!("Grid template has no \"{GRID_LABEL_COLUMN}\" column"))?;

    let day_positions: Vec<(Weekday, usize)> = Weekday::ALL
        .into_iter()
        .filter_map(|day| positions.get(day.column()).map(|&idx| (day, idx)))
        .collect();
    if day_positions.len() < Weekday::ALL.len() {
        warn!(
            "Grid template has {} of {} weekday columns",
            day_positions.len(),
            Weekday::ALL.len()
        );
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("Failed to read grid row {}: {e}", line + 1))?;

        let mut row = GridRow {
            label: record.get(label_idx).unwrap_or_default().to_string(),
            ..GridRow::default()
        };
        for &(day, idx) in &day_positions {
            let cell = record
                .get(idx)
                .filter(|value| !value.trim().is_empty())
                .map(ToString::to_string);
            row.set_cell(day, cell);
        }
        rows.push(row);
    }

    Ok(rows)
}
