use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{Course, SessionKind};
use crate::slots::{parse_slot_groups, SlotToken};

static NAME_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("annotation pattern is valid"));

/// Course name without its own parenthesized annotations, e.g.
/// "Microeconomics (First Half)" becomes "Microeconomics"
#[must_use]
pub fn clean_course_name(name: &str) -> String {
    NAME_ANNOTATION.replace_all(name, " ").trim().to_string()
}

/// Slot token → display entries ("<course> (<venue>)"), in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotMapping {
    slots: IndexMap<SlotToken, Vec<String>>,
}

impl SlotMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slot: SlotToken, entry: String) {
        self.slots.entry(slot).or_default().push(entry);
    }

    /// Entries for a slot, looked up by its raw code
    #[must_use]
    pub fn entries(&self, slot: &str) -> Option<&[String]> {
        self.slots.get(slot).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_conflict(&self, slot: &str) -> bool {
        self.entries(slot).is_some_and(|entries| entries.len() > 1)
    }

    /// Slots holding more than one entry, in insertion order
    pub fn conflicting_slots(&self) -> impl Iterator<Item = &SlotToken> {
        self.slots
            .iter()
            .filter(|(_, entries)| entries.len() > 1)
            .map(|(slot, _)| slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SlotToken, &[String])> {
        self.slots.iter().map(|(slot, entries)| (slot, entries.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Build the slot mapping for a course list.
///
/// Entries accumulate in catalog order, then lecture/tutorial/lab order.
pub fn build_slot_map<'a, I>(courses: I) -> SlotMapping
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut mapping = SlotMapping::new();

    for course in courses {
        let label = clean_course_name(&course.name);
        for kind in SessionKind::ALL {
            for group in parse_slot_groups(course.schedule(kind)) {
                let entry = format!("{label} ({})", group.venue);
                for slot in group.tokens {
                    mapping.push(slot, entry.clone());
                }
            }
        }
    }

    mapping
}
