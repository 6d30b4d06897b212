use crate::models::{Course, GridRow};

/// Parse a JSON list of course records (catalog dump or exported selection).
///
/// Extra keys such as `index`, `priority` or `searched` are ignored.
///
/// # Errors
///
/// Returns an error if the document is not a JSON array of records
pub fn parse_catalog_json(json: &str) -> Result<Vec<Course>, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse catalog: {e}"))
}

/// Parse a JSON list of grid template rows
///
/// # Errors
///
/// Returns an error if the document is not a JSON array of grid rows
pub fn parse_grid_json(json: &str) -> Result<Vec<GridRow>, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse grid template: {e}"))
}
