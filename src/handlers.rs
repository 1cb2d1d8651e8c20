use crate::calendar::MonthCursor;
use crate::errors::AppError;
use crate::models::{FormDraft, RecordPayload};
use crate::shell;
use crate::state::AppState;
use crate::ui::render_page;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::{error, warn};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntryForm {
    date: String,
    content: String,
    duration: String,
    #[serde(default)]
    notes: String,
    month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectForm {
    date: String,
    month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthForm {
    month: Option<String>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Commands land back on the page for the month they were issued from.
fn back_to(month: &Option<String>) -> Redirect {
    match month {
        Some(month) => Redirect::to(&format!("/?month={month}")),
        None => Redirect::to("/"),
    }
}

/// Pulls fresh records and stats from the remote API into the cache.
/// Failures are logged and the previous cache stays in place.
async fn refresh(state: &AppState) {
    match state.api.list_records().await {
        Ok(records) => state.ui.lock().await.records = records,
        Err(err) => error!("failed to fetch records: {err}"),
    }
    match state.api.fetch_stats().await {
        Ok(stats) => state.ui.lock().await.stats = stats,
        Err(err) => error!("failed to fetch stats: {err}"),
    }
}

pub async fn index(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    refresh(&state).await;

    let today = today();
    let cursor = query
        .month
        .as_deref()
        .and_then(MonthCursor::parse)
        .unwrap_or_else(|| MonthCursor::current(today));

    let ui = state.ui.lock().await;
    Html(render_page(&ui, cursor, today))
}

/// Creates a record, or updates the one being edited. The form resets and
/// the cache refreshes once the request completes; a transport failure
/// leaves the draft and editing marker as they were.
pub async fn submit(State(state): State<AppState>, Form(form): Form<EntryForm>) -> Redirect {
    let EntryForm {
        date,
        content,
        duration,
        notes,
        month,
    } = form;

    let today = today();
    let payload = RecordPayload {
        date: date.clone(),
        content: content.clone(),
        duration: shell::parse_duration(&duration),
        notes: notes.clone(),
    };

    let mut ui = state.ui.lock().await;
    let outcome = match ui.editing_id {
        Some(id) => state.api.update_record(id, &payload).await,
        None => state.api.create_record(&payload).await,
    };

    match outcome {
        Ok(()) => {
            ui.editing_id = None;
            shell::reset_form(&mut ui, today);
            drop(ui);
            refresh(&state).await;
        }
        Err(err) => {
            error!("failed to save record: {err}");
            // keep what the user typed so the re-rendered form shows it
            ui.form = FormDraft {
                date,
                content,
                duration,
                notes,
            };
        }
    }

    back_to(&month)
}

pub async fn edit_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<MonthForm>,
) -> Redirect {
    let mut ui = state.ui.lock().await;
    if !shell::begin_edit(&mut ui, id) {
        warn!("edit requested for unknown record {id}");
    }
    back_to(&form.month)
}

/// The page asks for confirmation before this command is ever issued.
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<MonthForm>,
) -> Redirect {
    match state.api.delete_record(id).await {
        Ok(()) => refresh(&state).await,
        Err(err) => error!("failed to delete record: {err}"),
    }
    back_to(&form.month)
}

pub async fn cancel_edit(State(state): State<AppState>, Form(form): Form<MonthForm>) -> Redirect {
    let mut ui = state.ui.lock().await;
    shell::cancel_edit(&mut ui, today());
    back_to(&form.month)
}

pub async fn select_date(
    State(state): State<AppState>,
    Form(form): Form<SelectForm>,
) -> Result<Redirect, AppError> {
    if NaiveDate::parse_from_str(&form.date, "%Y-%m-%d").is_err() {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    }

    let mut ui = state.ui.lock().await;
    shell::toggle_selection(&mut ui, &form.date);
    Ok(back_to(&form.month))
}

pub async fn clear_selection(
    State(state): State<AppState>,
    Form(form): Form<MonthForm>,
) -> Redirect {
    let mut ui = state.ui.lock().await;
    shell::clear_selection(&mut ui);
    back_to(&form.month)
}
