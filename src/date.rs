use crate::error::{DashboardError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Parses an ISO-style `YYYY-MM-DD` string into a canonical calendar value.
///
/// Segments are parsed as integers, so `2024-3-5` and `2024-03-05` are the
/// same date.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    let (year, month, day) = split_date_segments(text, [0, 1, 2])?;
    date_from_parts(text, year, month, day)
}

/// Parses a display-form `DD-MM-YYYY` string (padded or unpadded) into the
/// same canonical calendar value as [`parse_iso_date`].
pub fn parse_display_date(text: &str) -> Result<NaiveDate> {
    let (year, month, day) = split_date_segments(text, [2, 1, 0])?;
    date_from_parts(text, year, month, day)
}

/// Renders a date back into the display encoding used by the rendered rows.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// True iff `a` is chronologically on or after `b`.
///
/// Comparison is over the canonical calendar value (year, then month, then
/// day), never over the raw date text, which is unsafe across mixed padding.
pub fn is_on_or_after(a: NaiveDate, b: NaiveDate) -> bool {
    a >= b
}

/// True iff `a` is chronologically on or before `b`.
pub fn is_on_or_before(a: NaiveDate, b: NaiveDate) -> bool {
    a <= b
}

fn split_date_segments(text: &str, order: [usize; 3]) -> Result<(i32, u32, u32)> {
    let parts: Vec<&str> = text.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(DashboardError::DateParse(format!(
            "Expected three '-' separated segments, got '{}'",
            text
        )));
    }

    let segment = |idx: usize| -> Result<i64> {
        parts[order[idx]].trim().parse::<i64>().map_err(|_| {
            DashboardError::DateParse(format!(
                "Non-numeric segment '{}' in '{}'",
                parts[order[idx]], text
            ))
        })
    };

    let year = segment(0)?;
    let month = segment(1)?;
    let day = segment(2)?;

    if !(0..=9999).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(DashboardError::DateParse(format!(
            "Segment out of range in '{}'",
            text
        )));
    }

    Ok((year as i32, month as u32, day as u32))
}

fn date_from_parts(text: &str, year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DashboardError::DateParse(format!("'{}' is not a valid calendar date", text))
    })
}

/// A labelled inclusive date range offered as a quick filter preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedRange {
    pub label: &'static str,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Returns the quick-pick ranges anchored on `today`: today, this week,
/// this month, last 7 days, last 30 days. All ranges end on `today`.
pub fn suggested_ranges(today: NaiveDate) -> Vec<SuggestedRange> {
    let days_back = |n: u64| today.checked_sub_days(Days::new(n)).unwrap_or(today);

    let week_start = days_back(today.weekday().num_days_from_monday() as u64);
    let month_start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);

    vec![
        SuggestedRange {
            label: "Today",
            start: today,
            end: today,
        },
        SuggestedRange {
            label: "This week",
            start: week_start,
            end: today,
        },
        SuggestedRange {
            label: "This month",
            start: month_start,
            end: today,
        },
        SuggestedRange {
            label: "Last 7 days",
            start: days_back(7),
            end: today,
        },
        SuggestedRange {
            label: "Last 30 days",
            start: days_back(30),
            end: today,
        },
    ]
}
