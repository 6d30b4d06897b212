mod course;
mod grid;
mod settings;

pub use course::{Course, SessionKind};
pub use grid::{GridRow, Weekday};
pub use settings::PlannerSettings;
