use chrono::NaiveDate;
use log::debug;

use crate::date::{is_on_or_after, is_on_or_before, parse_iso_date};
use crate::schema::ExpenseRecord;

/// The criteria set applied to the record list. Absent criteria match
/// everything; rebuilt from the current control values on every application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub origin: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds criteria from raw control values as read from the view.
    ///
    /// Empty strings mean the control is blank; date text that fails to
    /// parse degrades that bound to absent rather than erroring, so a bad
    /// bound never excludes rows on that criterion.
    pub fn from_controls(start: &str, end: &str, category: &str) -> Self {
        let parse_bound = |text: &str| {
            if text.trim().is_empty() {
                return None;
            }
            match parse_iso_date(text) {
                Ok(date) => Some(date),
                Err(err) => {
                    debug!("Ignoring unparseable date bound '{}': {}", text, err);
                    None
                }
            }
        };

        Self {
            start_date: parse_bound(start),
            end_date: parse_bound(end),
            category: non_empty(category),
            ..Self::default()
        }
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_amount_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// True when no criterion is set, i.e. the full record list is visible.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The row-inclusion predicate. Pure over a single record: no row's
    /// visibility depends on any other row.
    ///
    /// A record whose own date text does not parse fails any active date
    /// criterion and is hidden while that bound is set.
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        if self.start_date.is_some() || self.end_date.is_some() {
            let record_date = match record.date_value() {
                Some(date) => date,
                None => return false,
            };
            if let Some(start) = self.start_date {
                if !is_on_or_after(record_date, start) {
                    return false;
                }
            }
            if let Some(end) = self.end_date {
                if !is_on_or_before(record_date, end) {
                    return false;
                }
            }
        }

        if let Some(category) = &self.category {
            if record.category != *category {
                return false;
            }
        }

        if let Some(origin) = &self.origin {
            if record.origin != *origin {
                return false;
            }
        }

        if self.min_amount.is_some() || self.max_amount.is_some() {
            let amount = record.amount_value();
            if let Some(min) = self.min_amount {
                if amount < min {
                    return false;
                }
            }
            if let Some(max) = self.max_amount {
                if amount > max {
                    return false;
                }
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !record.description.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }
}

/// Recomputes the visibility flags for the whole record list. The result is
/// parallel to `records` and order-preserving; re-running with identical
/// criteria yields an identical set.
pub fn apply_criteria(records: &[ExpenseRecord], criteria: &FilterCriteria) -> Vec<bool> {
    records.iter().map(|r| criteria.matches(r)).collect()
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
