//! Month grid derivation for the calendar view. Pure functions of the
//! record set, the selection, and a "today" date.

use crate::models::Record;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashMap;

/// Which month the calendar is showing. Navigable one month at a time over
/// an unbounded range; day arithmetic always anchors on day 1, which every
/// month has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn current(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Parses the `YYYY-MM` form carried in the page URL.
    pub fn parse(raw: &str) -> Option<Self> {
        let (year, month) = raw.split_once('-')?;
        let year = year.parse().ok()?;
        let month = month.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    fn first_day(self) -> NaiveDate {
        // month was validated on construction; day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn prev(self) -> Self {
        let first = self.first_day() - Months::new(1);
        Self::current(first)
    }

    pub fn next(self) -> Self {
        let first = self.first_day() + Months::new(1);
        Self::current(first)
    }

    pub fn days_in_month(self) -> u32 {
        let next = self.first_day() + Months::new(1);
        (next - self.first_day()).num_days() as u32
    }

    /// Sunday-based weekday of day 1, i.e. how many blank cells lead the
    /// grid.
    pub fn leading_blanks(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Heading text, e.g. "August 2026".
    pub fn label(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// The `YYYY-MM` form used in URLs and hidden form fields.
    pub fn query(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub date: String,
    pub count: usize,
    pub selected: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

pub fn month_grid(
    cursor: MonthCursor,
    records: &[Record],
    selected: Option<&str>,
    today: NaiveDate,
) -> MonthGrid {
    let mut by_date: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *by_date.entry(record.date.as_str()).or_default() += 1;
    }

    let today_key = today.format("%Y-%m-%d").to_string();
    let days = (1..=cursor.days_in_month())
        .map(|day| {
            let date = format!("{:04}-{:02}-{:02}", cursor.year, cursor.month, day);
            DayCell {
                day,
                count: by_date.get(date.as_str()).copied().unwrap_or(0),
                selected: selected == Some(date.as_str()),
                is_today: date == today_key,
                date,
            }
        })
        .collect();

    MonthGrid {
        leading_blanks: cursor.leading_blanks(),
        days,
    }
}
