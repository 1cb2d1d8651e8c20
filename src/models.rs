use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged activity entry, owned by the remote API. The client keeps a
/// transient cached copy refreshed after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub date: String,
    pub content: String,
    pub duration: u32,
    #[serde(default)]
    pub notes: String,
}

/// Server-computed aggregate over all records. Never derived locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_records: i64,
    pub total_duration: u32,
}

/// Body sent to the create and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPayload {
    pub date: String,
    pub content: String,
    pub duration: u32,
    pub notes: String,
}

/// In-progress create or edit. Duration stays a raw string until submit,
/// where it is parsed to whole minutes (invalid or empty parses to 0).
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub date: String,
    pub content: String,
    pub duration: String,
    pub notes: String,
}

impl FormDraft {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            content: String::new(),
            duration: String::new(),
            notes: String::new(),
        }
    }
}

/// Everything the page renders from: the cached remote truth plus the
/// client-only form, selection, and editing state.
#[derive(Debug, Clone)]
pub struct UiState {
    pub records: Vec<Record>,
    pub stats: Stats,
    pub form: FormDraft,
    pub editing_id: Option<i64>,
    pub selected_date: Option<String>,
}

impl UiState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            records: Vec::new(),
            stats: Stats::default(),
            form: FormDraft::blank(today),
            editing_id: None,
            selected_date: None,
        }
    }
}
