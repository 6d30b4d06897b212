use serde::{Deserialize, Serialize};
use crate::constants::{COL_CODE, COL_INSTRUCTORS, COL_NAME, DEFAULT_SUBMIT_ENDPOINT};
use crate::filter::MarkerFamily;

fn default_search_columns() -> Vec<String> {
    [COL_CODE, COL_NAME, COL_INSTRUCTORS]
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

fn default_submit_endpoint() -> String {
    DEFAULT_SUBMIT_ENDPOINT.to_string()
}

/// Planner configuration supplied by the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Mutually exclusive half-semester markers found in course names
    #[serde(default)]
    pub half_markers: MarkerFamily,
    /// Columns scanned by the search box
    #[serde(default = "default_search_columns")]
    pub search_columns: Vec<String>,
    #[serde(default = "default_submit_endpoint")]
    pub submit_endpoint: String,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            half_markers: MarkerFamily::default(),
            search_columns: default_search_columns(),
            submit_endpoint: default_submit_endpoint(),
        }
    }
}

impl PlannerSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from JSON, filling absent fields with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid settings JSON
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse settings: {e}"))
    }
}
