//! Course registration planning core.
//!
//! Parses schedule cells into slot tokens, maps slots to courses for the
//! weekly grid, detects clashes among selected courses and keeps the
//! ordered selection state. Rendering and event wiring live in the host
//! page, which calls these functions with plain data.

pub mod logging;
pub mod constants;
pub mod models;
pub mod slots;
pub mod filter;
pub mod slot_map;
pub mod conflict;
pub mod selection;
pub mod timetable;
pub mod import;
pub mod api;

pub use conflict::{ClashRecord, ClashSummary};
pub use filter::MarkerFamily;
pub use models::{Course, GridRow, PlannerSettings, SessionKind, Weekday};
pub use selection::{SelectionModel, View};
pub use slot_map::SlotMapping;
pub use slots::{SlotGroup, SlotToken};
