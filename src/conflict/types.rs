//! Core types for clash detection.

use serde::{Deserialize, Serialize};
use crate::constants::NO_CLASHES_MESSAGE;
use crate::slots::SlotToken;

/// Two selected courses that meet in at least one common slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClashRecord {
    pub course1: String,
    pub course2: String,
    pub slots: Vec<SlotToken>,
}

impl ClashRecord {
    /// Format a human-readable message describing the clash
    #[must_use]
    pub fn format_message(&self) -> String {
        let slots: Vec<&str> = self.slots.iter().map(SlotToken::as_str).collect();
        format!(
            "{} clashes with {} due to slots: {}",
            self.course1,
            self.course2,
            slots.join(", ")
        )
    }
}

/// All clashes among the current selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClashSummary {
    pub clashes: Vec<ClashRecord>,
}

impl ClashSummary {
    #[must_use]
    pub fn new(clashes: Vec<ClashRecord>) -> Self {
        Self { clashes }
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.clashes.is_empty()
    }

    /// One message per clash, or the all-clear message
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        if self.is_clear() {
            return vec![NO_CLASHES_MESSAGE.to_string()];
        }
        self.clashes.iter().map(ClashRecord::format_message).collect()
    }
}
