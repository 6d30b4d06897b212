mod types;

pub use types::{ClashRecord, ClashSummary};

use std::collections::HashSet;

use crate::logging::log;
use crate::models::Course;
use crate::slots::{course_slots, SlotToken};

/// Union of the slot tokens of every given (selected) course
pub fn occupied_slots<'a, I>(selected: I) -> HashSet<SlotToken>
where
    I: IntoIterator<Item = &'a Course>,
{
    selected.into_iter().flat_map(course_slots).collect()
}

/// Whether any slot of `course` is already taken in `occupied`.
///
/// Used to flag not-yet-selected rows that would clash with the selection.
#[must_use]
pub fn cell_clash(course: &Course, occupied: &HashSet<SlotToken>) -> bool {
    course_slots(course).iter().any(|slot| occupied.contains(slot))
}

/// Slots of `first` that also appear in `second`, in `first`'s order, each once
fn intersect_slots(first: &[SlotToken], second: &HashSet<SlotToken>) -> Vec<SlotToken> {
    let mut seen = HashSet::new();
    first
        .iter()
        .filter(|slot| second.contains(*slot) && seen.insert(*slot))
        .cloned()
        .collect()
}

/// Every clashing pair among `selected`, compared in the given order.
///
/// Pairs are emitted with i < j, so a pair is never reported twice or
/// reversed. Duplicate slots within one course count once.
#[must_use]
pub fn pairwise_clashes(selected: &[&Course]) -> Vec<ClashRecord> {
    let slot_lists: Vec<Vec<SlotToken>> = selected.iter().map(|c| course_slots(c)).collect();
    let slot_sets: Vec<HashSet<SlotToken>> = slot_lists
        .iter()
        .map(|slots| slots.iter().cloned().collect())
        .collect();

    let mut clashes = Vec::new();
    for i in 0..selected.len() {
        for j in (i + 1)..selected.len() {
            let slots = intersect_slots(&slot_lists[i], &slot_sets[j]);
            if slots.is_empty() {
                continue;
            }
            clashes.push(ClashRecord {
                course1: selected[i].name.clone(),
                course2: selected[j].name.clone(),
                slots,
            });
        }
    }

    log!(
        "Clash check: {} selected courses, {} clashing pairs",
        selected.len(),
        clashes.len()
    );

    clashes
}
