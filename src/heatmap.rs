//! Year-long frequency heatmap: 52 Sunday-aligned week columns of 7 day
//! cells, bucketed by exact date and shaded relative to the busiest day in
//! the dataset.

use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

pub const WEEKS: usize = 52;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq)]
pub struct HeatCell {
    pub date: String,
    pub count: usize,
    pub intensity: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLabel {
    pub name: &'static str,
    /// Horizontal position as a percentage of the grid width.
    pub left_pct: f64,
}

#[derive(Debug, Clone)]
pub struct Heatmap {
    pub weeks: Vec<Vec<HeatCell>>,
    pub month_labels: Vec<MonthLabel>,
}

/// First cell of the grid: 52×7 − 1 days before today, rolled back to the
/// Sunday on or before it. Keeps every column a full Sunday..Saturday week.
pub fn start_date(today: NaiveDate) -> NaiveDate {
    let origin = today - Duration::days(WEEKS as i64 * 7 - 1);
    origin - Duration::days(origin.weekday().num_days_from_sunday() as i64)
}

/// Five-level shade: 0 only for inactive days, 1..=4 for the quartile of
/// the busiest observed day (inclusive upper bounds).
fn intensity(count: usize, max: usize) -> u8 {
    if count == 0 {
        return 0;
    }
    let count = count as f64;
    let max = max as f64;
    if count <= max * 0.25 {
        1
    } else if count <= max * 0.5 {
        2
    } else if count <= max * 0.75 {
        3
    } else {
        4
    }
}

pub fn build_heatmap(records: &[Record], today: NaiveDate) -> Heatmap {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.date.as_str()).or_default() += 1;
    }
    // floored at 1 so a lone record still lands in a quartile
    let max = counts.values().copied().max().unwrap_or(0).max(1);

    let start = start_date(today);
    let mut weeks = Vec::with_capacity(WEEKS);
    for week in 0..WEEKS {
        let mut cells = Vec::with_capacity(7);
        for day in 0..7 {
            let date = (start + Duration::days((week * 7 + day) as i64))
                .format("%Y-%m-%d")
                .to_string();
            let count = counts.get(date.as_str()).copied().unwrap_or(0);
            cells.push(HeatCell {
                intensity: intensity(count, max),
                count,
                date,
            });
        }
        weeks.push(cells);
    }

    // label each week column whose month differs from the previous column's
    let mut month_labels = Vec::new();
    let mut last_month = 0;
    for week in 0..WEEKS {
        let month = (start + Duration::days(week as i64 * 7)).month();
        if month != last_month {
            month_labels.push(MonthLabel {
                name: MONTH_NAMES[month as usize - 1],
                left_pct: week as f64 / WEEKS as f64 * 100.0,
            });
            last_month = month;
        }
    }

    Heatmap {
        weeks,
        month_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn record_on(date: &str) -> Record {
        Record {
            id: 0,
            date: date.to_string(),
            content: "x".to_string(),
            duration: 10,
            notes: String::new(),
        }
    }

    #[test]
    fn grid_is_always_52_by_7() {
        for day in [1, 6, 15, 28] {
            let today = NaiveDate::from_ymd_opt(2026, 8, day).unwrap();
            let map = build_heatmap(&[], today);
            assert_eq!(map.weeks.len(), WEEKS);
            assert!(map.weeks.iter().all(|week| week.len() == 7));
        }
    }

    #[test]
    fn start_is_always_a_sunday() {
        for offset in 0..14 {
            let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap() + Duration::days(offset);
            assert_eq!(start_date(today).weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn cells_are_consecutive_days_from_start() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let map = build_heatmap(&[], today);
        let start = start_date(today);

        assert_eq!(map.weeks[0][0].date, start.format("%Y-%m-%d").to_string());
        let last = start + Duration::days(WEEKS as i64 * 7 - 1);
        assert_eq!(map.weeks[51][6].date, last.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn intensity_is_monotonic_and_bounded() {
        for max in 1..=8 {
            let mut last = 0;
            for count in 0..=max {
                let level = intensity(count, max);
                assert!(level <= 4);
                assert!(level >= last, "level dropped at count {count} of max {max}");
                assert_eq!(level == 0, count == 0);
                last = level;
            }
            assert_eq!(intensity(max, max), 4);
        }
    }

    #[test]
    fn intensity_quartiles_at_max_four() {
        assert_eq!(intensity(1, 4), 1);
        assert_eq!(intensity(2, 4), 2);
        assert_eq!(intensity(3, 4), 3);
        assert_eq!(intensity(4, 4), 4);
    }

    #[test]
    fn single_record_day_is_full_intensity() {
        // max floors at 1, so the only active day maps to the top level
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let date = start_date(today) + Duration::days(3);
        let records = vec![record_on(&date.format("%Y-%m-%d").to_string())];

        let map = build_heatmap(&records, today);
        assert_eq!(map.weeks[0][3].count, 1);
        assert_eq!(map.weeks[0][3].intensity, 4);
    }

    #[test]
    fn counts_bucket_by_exact_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let date = start_date(today) + Duration::days(10);
        let key = date.format("%Y-%m-%d").to_string();
        let records = vec![record_on(&key), record_on(&key), record_on(&key)];

        let map = build_heatmap(&records, today);
        assert_eq!(map.weeks[1][3].count, 3);
    }

    #[test]
    fn month_labels_start_at_the_first_column() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let map = build_heatmap(&[], today);

        let labels = &map.month_labels;
        assert!(!labels.is_empty());
        assert_eq!(labels[0].left_pct, 0.0);
        // 364 days cross a year of month boundaries
        assert!((12..=13).contains(&labels.len()), "{} labels", labels.len());
        assert!(
            labels
                .windows(2)
                .all(|pair| pair[0].left_pct < pair[1].left_pct)
        );
    }
}
