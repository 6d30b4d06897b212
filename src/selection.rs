//! Owned selection state over the course catalog.
//!
//! Every command (toggle, search, edit, export) goes through
//! [`SelectionModel`]; front ends hold one model per loaded catalog and
//! drop it on navigation away.

use std::cmp::Reverse;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::conflict::{cell_clash, occupied_slots, pairwise_clashes, ClashSummary};
use crate::logging::{log, warn};
use crate::models::{Course, PlannerSettings, SessionKind};
use crate::slots::{malformed_schedule_fields, SlotToken};

/// Which page the front end is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    /// Full catalog, rows toggle on click
    #[default]
    Browse,
    /// Selected rows only, schedule cells editable
    Summary,
}

/// A catalog entry plus its selection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Position in the catalog as loaded
    pub index: usize,
    #[serde(flatten)]
    pub course: Course,
    /// Selection rank, lowest first; serialized as -1 when unselected
    #[serde(with = "priority_serde", default)]
    pub priority: Option<u32>,
    /// Matched the last search query; serialized as 0/1
    #[serde(with = "flag_serde", default)]
    pub searched: bool,
}

impl CatalogRow {
    #[must_use]
    pub fn new(index: usize, course: Course) -> Self {
        Self {
            index,
            course,
            priority: None,
            searched: false,
        }
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.priority.is_some()
    }

    fn matches(&self, lower_query: &str, columns: &[String]) -> bool {
        columns.iter().any(|column| {
            self.course
                .column(column)
                .is_some_and(|value| value.to_lowercase().contains(lower_query))
        })
    }
}

/// Read-only projection of one displayed row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    pub index: usize,
    pub course: &'a Course,
    pub priority: Option<u32>,
    /// Selected-row highlight (browse view only)
    pub selected: bool,
    /// Search-hit highlight (browse view only)
    pub search_hit: bool,
    /// Unselected row that would clash with the selection (strike-through)
    pub clashes: bool,
    /// Schedule cells are editable (summary view only)
    pub editable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionModel {
    rows: Vec<CatalogRow>,
    settings: PlannerSettings,
    view: View,
}

impl SelectionModel {
    /// Create a model over a freshly loaded catalog; nothing selected
    #[must_use]
    pub fn new(catalog: Vec<Course>) -> Self {
        let rows: Vec<CatalogRow> = catalog
            .into_iter()
            .enumerate()
            .map(|(index, course)| CatalogRow::new(index, course))
            .collect();

        for row in &rows {
            let malformed = malformed_schedule_fields(&row.course);
            if !malformed.is_empty() {
                warn!(
                    "No slot codes found in {:?} of \"{}\"; they will not take part in clash checks",
                    malformed,
                    row.course.name
                );
            }
        }

        log!("Selection model created with {} courses", rows.len());

        Self {
            rows,
            settings: PlannerSettings::default(),
            view: View::Browse,
        }
    }

    /// Treat exported data as a new catalog, every row pre-selected in order.
    ///
    /// Settings are reset to the defaults; use
    /// [`import_selection_with`](Self::import_selection_with) to keep the
    /// host's configuration.
    #[must_use]
    pub fn import_selection(courses: Vec<Course>) -> Self {
        Self::import_selection_with(courses, PlannerSettings::default())
    }

    #[must_use]
    pub fn import_selection_with(courses: Vec<Course>, settings: PlannerSettings) -> Self {
        let mut model = Self::new(courses).with_settings(settings);
        for (rank, row) in (1..).zip(model.rows.iter_mut()) {
            row.priority = Some(rank);
        }
        model
    }

    /// Parse exported selection JSON and import it with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a list of course records
    pub fn import_selection_json(json: &str) -> Result<Self, String> {
        Self::import_selection_json_with(json, PlannerSettings::default())
    }

    /// Parse exported selection JSON and import it under `settings`
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a list of course records
    pub fn import_selection_json_with(json: &str, settings: PlannerSettings) -> Result<Self, String> {
        let courses = crate::import::parse_catalog_json(json)?;
        Ok(Self::import_selection_with(courses, settings))
    }

    #[must_use]
    pub fn with_settings(mut self, settings: PlannerSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Rows in catalog order
    #[must_use]
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&CatalogRow> {
        self.rows.get(index)
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    pub fn enter_summary(&mut self) {
        self.view = View::Summary;
    }

    pub fn leave_summary(&mut self) {
        self.view = View::Browse;
    }

    fn next_rank(&self) -> u32 {
        self.rows
            .iter()
            .filter_map(|row| row.priority)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Select an unselected row (next rank) or deselect a selected one.
    ///
    /// Deselecting does not renumber the remaining ranks. Returns the row's
    /// new priority.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is unknown or the summary view is active
    pub fn toggle_selection(&mut self, index: usize) -> Result<Option<u32>, String> {
        if self.view == View::Summary {
            return Err("Rows cannot be toggled in the summary view".to_string());
        }

        let rank = self.next_rank();
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| format!("No catalog row at index {index}"))?;

        row.priority = match row.priority {
            Some(_) => None,
            None => Some(rank),
        };
        Ok(row.priority)
    }

    /// Flag rows matching `query` (case-insensitive) in the search columns.
    ///
    /// A blank query clears every flag. Rows are never hidden, only
    /// reordered. Returns the number of matching rows.
    pub fn search(&mut self, query: &str) -> usize {
        if query.trim().is_empty() {
            self.clear_search();
            return 0;
        }

        let lower_query = query.to_lowercase();
        let columns = &self.settings.search_columns;
        let mut hits = 0;
        for row in &mut self.rows {
            row.searched = row.matches(&lower_query, columns);
            hits += usize::from(row.searched);
        }
        hits
    }

    pub fn clear_search(&mut self) {
        for row in &mut self.rows {
            row.searched = false;
        }
    }

    /// All rows in display order: selected by rank, then search hits, then
    /// catalog order
    #[must_use]
    pub fn display_order(&self) -> Vec<&CatalogRow> {
        let mut ordered: Vec<&CatalogRow> = self.rows.iter().collect();
        ordered.sort_by_key(|row| {
            (
                row.priority.is_none(),
                row.priority,
                Reverse(row.searched),
                row.index,
            )
        });
        ordered
    }

    /// Selected rows in rank order
    #[must_use]
    pub fn selected(&self) -> Vec<&CatalogRow> {
        self.display_order()
            .into_iter()
            .filter(|row| row.is_selected())
            .collect()
    }

    #[must_use]
    pub fn selected_courses(&self) -> Vec<&Course> {
        self.selected().into_iter().map(|row| &row.course).collect()
    }

    /// Slots taken by the current selection
    #[must_use]
    pub fn occupied_slots(&self) -> HashSet<SlotToken> {
        occupied_slots(self.selected_courses())
    }

    /// Rows to display for the current view, with their highlight state
    #[must_use]
    pub fn row_views(&self) -> Vec<RowView<'_>> {
        let occupied = self.occupied_slots();
        let browsing = self.view == View::Browse;

        self.display_order()
            .into_iter()
            .filter(|row| browsing || row.is_selected())
            .map(|row| RowView {
                index: row.index,
                course: &row.course,
                priority: row.priority,
                selected: browsing && row.is_selected(),
                search_hit: browsing && row.searched,
                clashes: browsing && !row.is_selected() && cell_clash(&row.course, &occupied),
                editable: !browsing,
            })
            .collect()
    }

    /// Pairwise clashes among the selected rows, in rank order
    #[must_use]
    pub fn clash_summary(&self) -> ClashSummary {
        ClashSummary::new(pairwise_clashes(&self.selected_courses()))
    }

    /// Replace a schedule cell from the summary view and recompute clashes
    ///
    /// # Errors
    ///
    /// Returns an error outside the summary view, for unknown rows, and for
    /// rows that are not selected
    pub fn commit_edit(
        &mut self,
        index: usize,
        kind: SessionKind,
        text: &str,
    ) -> Result<ClashSummary, String> {
        if self.view != View::Summary {
            return Err("Schedule cells can only be edited in the summary view".to_string());
        }

        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| format!("No catalog row at index {index}"))?;
        if !row.is_selected() {
            return Err(format!("\"{}\" is not selected", row.course.name));
        }

        row.course.set_schedule(kind, text.trim().to_string());
        if !malformed_schedule_fields(&row.course).is_empty() {
            warn!("Edited {} of \"{}\" has no slot codes", kind.column(), row.course.name);
        }

        Ok(self.clash_summary())
    }

    /// Selected courses restricted to the canonical columns, in display order
    #[must_use]
    pub fn export_selection(&self) -> Vec<Course> {
        self.selected_courses().into_iter().cloned().collect()
    }

    /// Pretty-printed JSON of [`Self::export_selection`]
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn export_selection_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(&self.export_selection())
            .map_err(|e| format!("Failed to serialize selection: {e}"))
    }
}

mod priority_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(priority: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match priority {
            Some(rank) => serializer.serialize_i64(i64::from(*rank)),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        if value < 0 {
            return Ok(None);
        }
        u32::try_from(value)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Priority out of range: {value}")))
    }
}

mod flag_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*flag))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, name: &str, instructors: &str, lecture: &str) -> Course {
        Course {
            code: code.to_string(),
            name: name.to_string(),
            instructors: instructors.to_string(),
            lecture: lecture.to_string(),
            ..Course::default()
        }
    }

    fn sample_model() -> SelectionModel {
        SelectionModel::new(vec![
            course("CS101", "Algorithms", "Dr. Rao", "A1,A2\n(LH-1)"),
            course("BI102", "Biology", "Dr. Singh", "A1"),
            course("CH103", "Chemistry", "Dr. Iyer", "B1"),
            course("PH104", "Physics", "Dr. Rao", "C1\n(LH-2)"),
        ])
    }

    fn order(model: &SelectionModel) -> Vec<usize> {
        model.display_order().iter().map(|row| row.index).collect()
    }

    #[test]
    fn test_new_rows_are_unselected() {
        let model = sample_model();
        assert_eq!(model.rows().len(), 4);
        assert!(model.rows().iter().all(|row| row.priority.is_none() && !row.searched));
        assert_eq!(order(&model), [0, 1, 2, 3]);
        assert_eq!(model.view(), View::Browse);
    }

    #[test]
    fn test_selection_ranks_follow_click_order() {
        let mut model = sample_model();
        assert_eq!(model.toggle_selection(3), Ok(Some(1)));
        assert_eq!(model.toggle_selection(0), Ok(Some(2)));
        assert_eq!(model.toggle_selection(2), Ok(Some(3)));

        assert_eq!(order(&model), [3, 0, 2, 1]);
        let selected: Vec<usize> = model.selected().iter().map(|row| row.index).collect();
        assert_eq!(selected, [3, 0, 2]);
    }

    #[test]
    fn test_deselect_leaves_other_ranks_alone() {
        let mut model = sample_model();
        model.toggle_selection(0).expect("row exists");
        model.toggle_selection(1).expect("row exists");
        model.toggle_selection(2).expect("row exists");

        assert_eq!(model.toggle_selection(1), Ok(None));
        assert_eq!(model.row(0).and_then(|r| r.priority), Some(1));
        assert_eq!(model.row(1).and_then(|r| r.priority), None);
        assert_eq!(model.row(2).and_then(|r| r.priority), Some(3));

        // Gaps are not compacted; the next pick goes after the current max
        assert_eq!(model.toggle_selection(3), Ok(Some(4)));
    }

    #[test]
    fn test_toggle_twice_restores_unselected() {
        let mut model = sample_model();
        model.toggle_selection(2).expect("row exists");
        model.toggle_selection(2).expect("row exists");
        assert!(model.row(2).is_some_and(|row| row.priority.is_none()));
        assert_eq!(model.toggle_selection(0), Ok(Some(1)));
    }

    #[test]
    fn test_toggle_unknown_index() {
        let mut model = sample_model();
        assert!(model.toggle_selection(42).is_err());
        assert!(model.selected().is_empty());
    }

    #[test]
    fn test_search_reorders_without_filtering() {
        let mut model = sample_model();
        assert_eq!(model.search("dr. RAO"), 2);
        assert_eq!(order(&model), [0, 3, 1, 2]);

        assert_eq!(model.search("ch10"), 1);
        assert_eq!(order(&model), [2, 0, 1, 3]);
        assert_eq!(model.display_order().len(), 4);
    }

    #[test]
    fn test_search_without_matches() {
        let mut model = sample_model();
        model.toggle_selection(2).expect("row exists");
        let before = order(&model);

        assert_eq!(model.search("zoology"), 0);
        assert!(model.rows().iter().all(|row| !row.searched));
        assert_eq!(order(&model), before);
    }

    #[test]
    fn test_blank_query_clears_flags() {
        let mut model = sample_model();
        model.search("biology");
        assert!(model.row(1).is_some_and(|row| row.searched));

        assert_eq!(model.search("   "), 0);
        assert!(model.rows().iter().all(|row| !row.searched));

        model.search("biology");
        model.clear_search();
        assert!(model.rows().iter().all(|row| !row.searched));
    }

    #[test]
    fn test_selected_rows_sort_before_search_hits() {
        let mut model = sample_model();
        model.toggle_selection(2).expect("row exists");
        model.search("physics");
        assert_eq!(order(&model), [2, 3, 0, 1]);
    }

    #[test]
    fn test_row_views_flag_clashing_unselected_rows() {
        let mut model = sample_model();
        model.toggle_selection(0).expect("row exists");

        let views = model.row_views();
        assert_eq!(views.len(), 4);
        let biology = views.iter().find(|v| v.index == 1).expect("biology displayed");
        assert!(biology.clashes);
        let chemistry = views.iter().find(|v| v.index == 2).expect("chemistry displayed");
        assert!(!chemistry.clashes);
        let algorithms = views.iter().find(|v| v.index == 0).expect("algorithms displayed");
        assert!(algorithms.selected);
        assert!(!algorithms.clashes);
    }

    #[test]
    fn test_summary_view_shows_selected_rows_only() {
        let mut model = sample_model();
        model.toggle_selection(1).expect("row exists");
        model.toggle_selection(0).expect("row exists");
        model.search("physics");
        model.enter_summary();

        let views = model.row_views();
        let indices: Vec<usize> = views.iter().map(|v| v.index).collect();
        assert_eq!(indices, [1, 0]);
        assert!(views.iter().all(|v| v.editable && !v.selected && !v.search_hit && !v.clashes));
        assert!(model.toggle_selection(2).is_err());

        model.leave_summary();
        assert_eq!(model.row_views().len(), 4);
    }

    #[test]
    fn test_clash_summary_uses_rank_order() {
        let mut model = sample_model();
        model.toggle_selection(1).expect("row exists");
        model.toggle_selection(0).expect("row exists");

        let summary = model.clash_summary();
        assert_eq!(summary.clashes.len(), 1);
        assert_eq!(summary.clashes[0].course1, "Biology");
        assert_eq!(summary.clashes[0].course2, "Algorithms");
    }

    #[test]
    fn test_commit_edit_recomputes_clashes() {
        let mut model = sample_model();
        model.toggle_selection(0).expect("row exists");
        model.toggle_selection(1).expect("row exists");

        assert!(model.commit_edit(1, SessionKind::Lecture, "D1").is_err());

        model.enter_summary();
        assert!(!model.clash_summary().is_clear());

        let summary = model
            .commit_edit(1, SessionKind::Lecture, "  D1\n(LH-9) ")
            .expect("edit should succeed");
        assert!(summary.is_clear());
        assert_eq!(model.row(1).map(|r| r.course.lecture.as_str()), Some("D1\n(LH-9)"));

        let summary = model
            .commit_edit(1, SessionKind::Tutorial, "A2")
            .expect("edit should succeed");
        assert_eq!(summary.clashes.len(), 1);

        assert!(model.commit_edit(3, SessionKind::Lab, "P1").is_err());
        assert!(model.commit_edit(99, SessionKind::Lab, "P1").is_err());
    }

    #[test]
    fn test_export_follows_display_order() {
        let mut model = sample_model();
        model.toggle_selection(2).expect("row exists");
        model.toggle_selection(0).expect("row exists");

        let exported = model.export_selection();
        let codes: Vec<&str> = exported.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["CH103", "CS101"]);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut model = sample_model();
        model.toggle_selection(3).expect("row exists");
        model.toggle_selection(1).expect("row exists");

        let json = model.export_selection_json().expect("export should succeed");
        let imported = SelectionModel::import_selection_json(&json).expect("import should succeed");

        assert_eq!(imported.export_selection(), model.export_selection());
        let ranks: Vec<Option<u32>> = imported.rows().iter().map(|r| r.priority).collect();
        assert_eq!(ranks, [Some(1), Some(2)]);
        assert_eq!(
            imported.export_selection_json().expect("export should succeed"),
            json
        );
    }

    #[test]
    fn test_catalog_row_serialization() {
        let mut row = CatalogRow::new(7, course("CS101", "Algorithms", "Dr. Rao", "A1"));
        let value = serde_json::to_value(&row).expect("serialization should succeed");
        assert_eq!(value["index"], 7);
        assert_eq!(value["priority"], -1);
        assert_eq!(value["searched"], 0);
        assert_eq!(value["Course Name"], "Algorithms");

        row.priority = Some(2);
        row.searched = true;
        let json = serde_json::to_string(&row).expect("serialization should succeed");
        let back: CatalogRow = serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, row);
    }

    #[test]
    fn test_custom_search_columns() {
        let mut settings = PlannerSettings::default();
        settings.search_columns = vec!["Lecture".to_string()];
        let mut model = sample_model().with_settings(settings);

        assert_eq!(model.search("lh-2"), 1);
        assert!(model.row(3).is_some_and(|row| row.searched));
        assert_eq!(model.search("dr."), 0);
    }

    #[test]
    fn test_import_keeps_host_settings() {
        let mut settings = PlannerSettings::default();
        settings.search_columns = vec!["Lecture".to_string()];
        settings.submit_endpoint = "/api/selection".to_string();

        let mut model = sample_model();
        model.toggle_selection(3).expect("row exists");
        let json = model.export_selection_json().expect("export should succeed");

        let imported = SelectionModel::import_selection_json_with(&json, settings.clone())
            .expect("import should succeed");
        assert_eq!(imported.settings(), &settings);
        assert_eq!(imported.row(0).and_then(|row| row.priority), Some(1));

        let reset = SelectionModel::import_selection_json(&json).expect("import should succeed");
        assert_eq!(reset.settings(), &PlannerSettings::default());
    }

    #[test]
    fn test_models_compare_by_value() {
        let mut model = sample_model();
        let snapshot = model.clone();
        assert_eq!(model, snapshot);

        model.toggle_selection(0).expect("row exists");
        assert_ne!(model, snapshot);
        model.toggle_selection(0).expect("row exists");
        assert_eq!(model, snapshot);
    }
}
