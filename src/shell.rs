//! State transitions behind the page's commands. Every mutation of
//! [`UiState`] outside the network refresh goes through here.

use crate::models::{FormDraft, Record, UiState};
use chrono::NaiveDate;

/// Duration inputs arrive as raw strings; anything that is not a
/// non-negative integer counts as 0 minutes.
pub fn parse_duration(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

pub fn reset_form(state: &mut UiState, today: NaiveDate) {
    state.form = FormDraft::blank(today);
}

/// Clicking the already-selected date clears the selection; any other date
/// becomes the selection. The clicked date is mirrored into the form's date
/// field either way.
pub fn toggle_selection(state: &mut UiState, date: &str) {
    if state.selected_date.as_deref() == Some(date) {
        state.selected_date = None;
    } else {
        state.selected_date = Some(date.to_string());
    }
    state.form.date = date.to_string();
}

pub fn clear_selection(state: &mut UiState) {
    state.selected_date = None;
}

/// Loads the record's fields into the form and marks it as the one being
/// edited. Returns false when the id is not in the cache.
pub fn begin_edit(state: &mut UiState, id: i64) -> bool {
    let Some(record) = state.records.iter().find(|record| record.id == id) else {
        return false;
    };
    state.form = FormDraft {
        date: record.date.clone(),
        content: record.content.clone(),
        duration: record.duration.to_string(),
        notes: record.notes.clone(),
    };
    state.editing_id = Some(id);
    true
}

pub fn cancel_edit(state: &mut UiState, today: NaiveDate) {
    state.editing_id = None;
    reset_form(state, today);
}

/// The displayed list: filtered to the selected date when one is set, and
/// always sorted newest first. Recomputed per render.
pub fn visible_records(state: &UiState) -> Vec<&Record> {
    let mut records: Vec<&Record> = match state.selected_date.as_deref() {
        Some(selected) => state
            .records
            .iter()
            .filter(|record| record.date == selected)
            .collect(),
        None => state.records.iter().collect(),
    };
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}
