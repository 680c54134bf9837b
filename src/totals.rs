use std::collections::BTreeMap;

use crate::currency::{format_amount, parse_amount};
use crate::schema::ExpenseRecord;

/// Sum and count over the currently visible records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilteredTotals {
    pub total: f64,
    pub count: usize,
}

impl FilteredTotals {
    /// Display text for the totals row, e.g. `"$80.00 (2 records)"`.
    pub fn display(&self) -> String {
        format!("${} ({} records)", format_amount(self.total), self.count)
    }
}

/// Recomputes totals over the visible subset. `visibility` is parallel to
/// `records`; rows marked false contribute nothing. Zero/zero when the
/// visible set is empty.
pub fn aggregate_visible(records: &[ExpenseRecord], visibility: &[bool]) -> FilteredTotals {
    let mut totals = FilteredTotals::default();
    for (record, visible) in records.iter().zip(visibility) {
        if *visible {
            totals.total += parse_amount(&record.amount);
            totals.count += 1;
        }
    }
    totals
}

/// A (key, total) breakdown row, sorted by descending total.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownEntry {
    pub key: String,
    pub total: f64,
}

/// Richer statistics over the visible subset: overall total, count, average,
/// and per-category / per-origin breakdowns sorted by descending total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredStats {
    pub total: f64,
    pub count: usize,
    pub average: f64,
    pub by_category: Vec<BreakdownEntry>,
    pub by_origin: Vec<BreakdownEntry>,
}

pub fn stats_for_visible(records: &[ExpenseRecord], visibility: &[bool]) -> FilteredStats {
    let totals = aggregate_visible(records, visibility);
    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    let mut by_origin: BTreeMap<&str, f64> = BTreeMap::new();

    for (record, visible) in records.iter().zip(visibility) {
        if *visible {
            let amount = parse_amount(&record.amount);
            *by_category.entry(record.category.as_str()).or_default() += amount;
            *by_origin.entry(record.origin.as_str()).or_default() += amount;
        }
    }

    FilteredStats {
        total: totals.total,
        count: totals.count,
        average: if totals.count > 0 {
            totals.total / totals.count as f64
        } else {
            0.0
        },
        by_category: sorted_breakdown(by_category),
        by_origin: sorted_breakdown(by_origin),
    }
}

fn sorted_breakdown(map: BTreeMap<&str, f64>) -> Vec<BreakdownEntry> {
    let mut entries: Vec<BreakdownEntry> = map
        .into_iter()
        .map(|(key, total)| BreakdownEntry {
            key: key.to_string(),
            total,
        })
        .collect();
    entries.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    entries
}
