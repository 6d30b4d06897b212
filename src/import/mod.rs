pub mod csv;
pub mod json;

// Re-export commonly used items
pub use self::csv::{parse_catalog_csv, parse_grid_csv};
pub use self::json::{parse_catalog_json, parse_grid_json};
