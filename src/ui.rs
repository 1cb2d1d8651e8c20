//! Renders the single page. Everything here is a pure function of the UI
//! state, the month cursor, and today's date; interaction happens through
//! the forms and links the page carries.

use crate::calendar::{self, MonthCursor};
use crate::heatmap::{self, Heatmap};
use crate::models::UiState;
use crate::shell;
use chrono::NaiveDate;

pub fn render_page(ui: &UiState, cursor: MonthCursor, today: NaiveDate) -> String {
    PAGE_HTML
        .replace("{{TOTAL_RECORDS}}", &ui.stats.total_records.to_string())
        .replace(
            "{{TOTAL_DURATION}}",
            &format_duration(ui.stats.total_duration),
        )
        .replace(
            "{{FREQUENCY}}",
            &render_frequency(&heatmap::build_heatmap(&ui.records, today)),
        )
        .replace("{{CALENDAR}}", &render_calendar(ui, cursor, today))
        .replace("{{FORM}}", &render_form(ui, cursor))
        .replace("{{RECORDS}}", &render_records(ui, cursor))
}

/// Minutes under an hour stay in minutes; anything longer drops to hours,
/// keeping a minute remainder only when there is one.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return count_of(minutes, "minute");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{} {}", count_of(hours, "hour"), count_of(rest, "minute"))
    } else {
        count_of(hours, "hour")
    }
}

fn count_of(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn month_field(cursor: MonthCursor) -> String {
    format!(
        r#"<input type="hidden" name="month" value="{}" />"#,
        cursor.query()
    )
}

fn render_frequency(map: &Heatmap) -> String {
    let mut html = String::new();

    html.push_str(r#"<div class="freq-months">"#);
    for label in &map.month_labels {
        html.push_str(&format!(
            r#"<span class="month-label" style="left: {:.2}%">{}</span>"#,
            label.left_pct, label.name
        ));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="freq-grid">"#);
    for week in &map.weeks {
        html.push_str(r#"<div class="freq-week">"#);
        for cell in week {
            html.push_str(&format!(
                r#"<div class="freq-cell intensity-{}" title="{}: {} times"></div>"#,
                cell.intensity, cell.date, cell.count
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="freq-legend"><span>Less</span>"#);
    for level in 0..5 {
        html.push_str(&format!(
            r#"<div class="freq-cell intensity-{level}"></div>"#
        ));
    }
    html.push_str("<span>More</span></div>");

    html
}

fn render_calendar(ui: &UiState, cursor: MonthCursor, today: NaiveDate) -> String {
    let grid = calendar::month_grid(
        cursor,
        &ui.records,
        ui.selected_date.as_deref(),
        today,
    );

    let mut html = String::new();
    html.push_str(&format!(
        concat!(
            r#"<div class="calendar-header">"#,
            r#"<a class="month-nav" href="/?month={prev}">&#9664;</a>"#,
            "<h3>{label}</h3>",
            r#"<a class="month-nav" href="/?month={next}">&#9654;</a>"#,
            "</div>"
        ),
        prev = cursor.prev().query(),
        label = cursor.label(),
        next = cursor.next().query(),
    ));

    html.push_str(r#"<div class="calendar-weekdays">"#);
    for weekday in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        html.push_str(&format!(r#"<div class="weekday">{weekday}</div>"#));
    }
    html.push_str("</div>");

    html.push_str(r#"<form method="post" action="/select">"#);
    html.push_str(&month_field(cursor));
    html.push_str(r#"<div class="calendar-grid">"#);
    for _ in 0..grid.leading_blanks {
        html.push_str(r#"<div class="calendar-day empty"></div>"#);
    }
    for cell in &grid.days {
        let mut classes = String::from("calendar-day");
        if cell.count > 0 {
            classes.push_str(" has-record");
        }
        if cell.selected {
            classes.push_str(" selected");
        }
        if cell.is_today {
            classes.push_str(" today");
        }
        let badge = if cell.count > 0 {
            format!(r#"<span class="record-count">{}</span>"#, cell.count)
        } else {
            String::new()
        };
        html.push_str(&format!(
            concat!(
                r#"<button type="submit" name="date" value="{date}" class="{classes}">"#,
                r#"<span class="day-number">{day}</span>{badge}"#,
                "</button>"
            ),
            date = cell.date,
            classes = classes,
            day = cell.day,
            badge = badge,
        ));
    }
    html.push_str("</div></form>");
    html
}

fn render_form(ui: &UiState, cursor: MonthCursor) -> String {
    let editing = ui.editing_id.is_some();
    let heading = if editing { "Edit record" } else { "Add record" };
    let submit = if editing { "Update" } else { "Save" };

    let mut html = format!("<h2>{heading}</h2>");
    html.push_str(r#"<form method="post" action="/records">"#);
    html.push_str(&month_field(cursor));
    html.push_str(&format!(
        concat!(
            r#"<div class="form-row">"#,
            r#"<div class="form-group"><label>Date</label>"#,
            r#"<input type="date" name="date" value="{date}" required /></div>"#,
            r#"<div class="form-group"><label>Duration (minutes)</label>"#,
            r#"<input type="number" name="duration" value="{duration}" placeholder="e.g. 30" min="1" required /></div>"#,
            "</div>",
            r#"<div class="form-group"><label>Content</label>"#,
            r#"<input type="text" name="content" value="{content}" placeholder="What did you do?" required /></div>"#,
            r#"<div class="form-group"><label>Notes</label>"#,
            r#"<textarea name="notes" placeholder="Optional notes...">{notes}</textarea></div>"#,
            r#"<button type="submit" class="btn btn-primary">{submit}</button>"#,
            "</form>"
        ),
        date = escape_html(&ui.form.date),
        duration = escape_html(&ui.form.duration),
        content = escape_html(&ui.form.content),
        notes = escape_html(&ui.form.notes),
        submit = submit,
    ));
    if editing {
        html.push_str(&format!(
            concat!(
                r#"<form method="post" action="/form/cancel">{month}"#,
                r#"<button type="submit" class="btn btn-cancel">Cancel</button></form>"#
            ),
            month = month_field(cursor),
        ));
    }
    html
}

fn render_records(ui: &UiState, cursor: MonthCursor) -> String {
    let mut html = String::from("<h2>");
    match ui.selected_date.as_deref() {
        Some(selected) => {
            html.push_str(&format!("{} records", escape_html(selected)));
            html.push_str(&format!(
                concat!(
                    r#"<form class="inline" method="post" action="/select/clear">{month}"#,
                    r#"<button type="submit" class="btn-clear">Show all</button></form>"#
                ),
                month = month_field(cursor),
            ));
        }
        None => html.push_str("History"),
    }
    html.push_str("</h2>");

    let visible = shell::visible_records(ui);
    if visible.is_empty() {
        html.push_str(r#"<div class="empty-state">No records yet</div>"#);
        return html;
    }

    html.push_str(r#"<div class="record-list">"#);
    for record in visible {
        let notes = if record.notes.is_empty() {
            String::new()
        } else {
            format!(
                r#"<p class="notes">Notes: {}</p>"#,
                escape_html(&record.notes)
            )
        };
        html.push_str(&format!(
            concat!(
                r#"<div class="record-card">"#,
                r#"<div class="record-info">"#,
                "<h3>{content}</h3>",
                "<p>Date: {date}</p>",
                "<p>Duration: {duration}</p>",
                "{notes}",
                "</div>",
                r#"<div class="record-actions">"#,
                r#"<form method="post" action="/records/{id}/edit">{month}"#,
                r#"<button type="submit" class="btn btn-primary">Edit</button></form>"#,
                r#"<form method="post" action="/records/{id}/delete" onsubmit="return confirm('Delete this record?');">{month}"#,
                r#"<button type="submit" class="btn btn-danger">Delete</button></form>"#,
                "</div></div>"
            ),
            content = escape_html(&record.content),
            date = escape_html(&record.date),
            duration = format_duration(record.duration),
            notes = notes,
            id = record.id,
            month = month_field(cursor),
        ));
    }
    html.push_str("</div>");
    html
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg-1: #f6f4ef;
      --bg-2: #dfe9e2;
      --ink: #28312b;
      --accent: #3c8a5a;
      --accent-soft: #9fd3b4;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: #ffffff;
      --line: rgba(47, 72, 88, 0.12);
      --shadow: 0 18px 44px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #eef3ec 60%, #f3f1ea 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      padding: 32px 18px 48px;
    }

    .container {
      width: min(980px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    h2 {
      margin: 0 0 14px;
      font-size: 1.25rem;
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .stat-card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 18px;
    }

    .stat-card h3 {
      margin: 0 0 8px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7a847d;
    }

    .stat-card .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .frequency-chart,
    .calendar,
    .form-section,
    .records-section {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 22px;
    }

    .freq-container {
      display: grid;
      gap: 10px;
    }

    .freq-months {
      position: relative;
      height: 1.1em;
      font-size: 0.75rem;
      color: #7a847d;
    }

    .month-label {
      position: absolute;
      top: 0;
    }

    .freq-grid {
      display: flex;
      gap: 3px;
      overflow-x: auto;
    }

    .freq-week {
      display: flex;
      flex-direction: column;
      gap: 3px;
    }

    .freq-cell {
      width: 11px;
      height: 11px;
      border-radius: 2px;
      background: #e8ece9;
    }

    .freq-cell.intensity-1 { background: var(--accent-soft); }
    .freq-cell.intensity-2 { background: #6fbb8c; }
    .freq-cell.intensity-3 { background: #4da06c; }
    .freq-cell.intensity-4 { background: var(--accent); }

    .freq-legend {
      display: flex;
      align-items: center;
      gap: 4px;
      font-size: 0.75rem;
      color: #7a847d;
    }

    .main-content {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 24px;
    }

    .calendar-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 12px;
    }

    .calendar-header h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    .month-nav {
      text-decoration: none;
      color: var(--accent-2);
      padding: 4px 10px;
      border-radius: 8px;
      border: 1px solid var(--line);
    }

    .calendar-weekdays,
    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .weekday {
      text-align: center;
      font-size: 0.75rem;
      color: #7a847d;
      padding-bottom: 4px;
    }

    .calendar-day {
      position: relative;
      aspect-ratio: 1;
      border: 1px solid transparent;
      border-radius: 10px;
      background: #f2f4f1;
      font: inherit;
      color: inherit;
      cursor: pointer;
      display: flex;
      align-items: center;
      justify-content: center;
    }

    .calendar-day.empty {
      background: transparent;
      cursor: default;
    }

    .calendar-day.has-record {
      background: var(--accent-soft);
    }

    .calendar-day.today {
      border-color: var(--accent-2);
    }

    .calendar-day.selected {
      background: var(--accent);
      color: white;
    }

    .record-count {
      position: absolute;
      top: 3px;
      right: 5px;
      font-size: 0.65rem;
      font-weight: 600;
    }

    .form-row {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .form-group {
      display: grid;
      gap: 6px;
      margin-bottom: 12px;
    }

    .form-group label {
      font-size: 0.85rem;
      color: #5d665f;
    }

    .form-group input,
    .form-group textarea {
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 10px;
      font: inherit;
    }

    .form-group textarea {
      min-height: 70px;
      resize: vertical;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 22px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .btn-cancel {
      background: #e4e7e4;
      color: var(--ink);
      margin-top: 8px;
    }

    .btn-danger {
      background: var(--danger);
      color: white;
    }

    .btn-clear {
      border: 1px solid var(--line);
      background: transparent;
      border-radius: 999px;
      padding: 4px 12px;
      font-size: 0.8rem;
      cursor: pointer;
    }

    .inline {
      display: inline;
    }

    .record-list {
      display: grid;
      gap: 12px;
    }

    .record-card {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 16px;
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 14px 16px;
    }

    .record-info h3 {
      margin: 0 0 6px;
      font-size: 1.05rem;
    }

    .record-info p {
      margin: 2px 0;
      font-size: 0.9rem;
      color: #555e57;
    }

    .record-info .notes {
      color: #7a847d;
    }

    .record-actions {
      display: flex;
      gap: 8px;
    }

    .empty-state {
      text-align: center;
      color: #7a847d;
      padding: 28px 0;
    }

    @media (max-width: 720px) {
      .main-content {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <div class="container">
    <h1>Habit Tracker</h1>

    <div class="stats">
      <div class="stat-card">
        <h3>Total records</h3>
        <div class="value">{{TOTAL_RECORDS}}</div>
      </div>
      <div class="stat-card">
        <h3>Total time</h3>
        <div class="value">{{TOTAL_DURATION}}</div>
      </div>
    </div>

    <div class="frequency-chart">
      <h2>Activity frequency</h2>
      <div class="freq-container">{{FREQUENCY}}</div>
    </div>

    <div class="main-content">
      <div class="left-panel">
        <div class="calendar">{{CALENDAR}}</div>
      </div>
      <div class="right-panel">
        <div class="form-section">{{FORM}}</div>
      </div>
    </div>

    <div class="records-section">{{RECORDS}}</div>
  </div>
</body>
</html>
"#;
