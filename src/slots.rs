//! Schedule cell tokenizer.
//!
//! A schedule cell holds one or more lines. Each line is one of:
//! - a slot line: comma-joined slot codes such as `A1,A2`
//! - a venue line: `(LH-101)`, annotating the slot line right above it
//! - anything else, which is ignored
//!
//! Text that yields no tokens is never an error; it simply contributes
//! nothing to slot maps or clash checks.

use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::NO_VENUE;
use crate::models::{Course, SessionKind};

static SLOT_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][0-9]+(?:,[A-Z][0-9]+)*").expect("slot group pattern is valid")
});

static SLOT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]+$").expect("slot token pattern is valid"));

static VENUE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((.*)\)$").expect("venue line pattern is valid"));

/// A weekly recurring period such as `A1` (letter followed by digits)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotToken(String);

impl SlotToken {
    /// Validate a single token; surrounding whitespace is ignored
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        SLOT_TOKEN.is_match(raw).then(|| Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SlotToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Tokens of one slot line together with the venue that annotates them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGroup {
    pub tokens: Vec<SlotToken>,
    pub venue: String,
}

fn venue_of(line: &str) -> Option<&str> {
    VENUE_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// First comma-joined run of slot codes in a line
fn slot_tokens_in_line(line: &str) -> Option<Vec<SlotToken>> {
    let group = SLOT_GROUP.find(line)?;
    let tokens: Vec<SlotToken> = group
        .as_str()
        .split(',')
        .filter_map(SlotToken::parse)
        .collect();
    (!tokens.is_empty()).then_some(tokens)
}

/// Parse a schedule cell into slot groups, resolving each group's venue.
///
/// A venue line directly after a slot line is consumed as that line's venue.
/// A slot line without one gets [`NO_VENUE`]. Venue lines that do not follow
/// a slot line are skipped.
#[must_use]
pub fn parse_slot_groups(text: &str) -> Vec<SlotGroup> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut groups = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        i += 1;

        if line.is_empty() || venue_of(line).is_some() {
            continue;
        }

        let Some(tokens) = slot_tokens_in_line(line) else {
            continue;
        };

        let venue = match lines.get(i).and_then(|next| venue_of(next)) {
            Some(venue) => {
                i += 1;
                venue.to_string()
            }
            None => NO_VENUE.to_string(),
        };

        groups.push(SlotGroup { tokens, venue });
    }

    groups
}

/// Slot tokens of a schedule cell in order of appearance, venues dropped
#[must_use]
pub fn parse_slots(text: &str) -> Vec<SlotToken> {
    parse_slot_groups(text)
        .into_iter()
        .flat_map(|group| group.tokens)
        .collect()
}

/// All slot tokens of a course: lecture, then tutorial, then lab
#[must_use]
pub fn course_slots(course: &Course) -> Vec<SlotToken> {
    SessionKind::ALL
        .into_iter()
        .flat_map(|kind| parse_slots(course.schedule(kind)))
        .collect()
}

/// Schedule fields that hold text but no recognizable slot codes
#[must_use]
pub fn malformed_schedule_fields(course: &Course) -> Vec<SessionKind> {
    SessionKind::ALL
        .into_iter()
        .filter(|&kind| {
            let text = course.schedule(kind);
            !text.trim().is_empty() && parse_slot_groups(text).is_empty()
        })
        .collect()
}
