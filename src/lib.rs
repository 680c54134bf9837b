//! # Expense Dashboard
//!
//! A library for narrowing a pre-rendered table of expense records by date
//! range and category, and deriving a proportional spending breakdown as
//! chart-ready series.
//!
//! ## Core Concepts
//!
//! - **Record list**: typed expense rows populated once from the server
//!   payload; the rendered view is a projection of this list
//! - **Visible set**: per-row visibility flags recomputed wholesale on each
//!   filter application, never patched incrementally
//! - **Canonical calendar value**: dates parsed from either textual encoding
//!   (`YYYY-MM-DD` controls, `DD-MM-YYYY` rows) into a `chrono::NaiveDate`
//!   before any comparison
//! - **Defensive parsing**: a bad date bound degrades to "no criterion", a
//!   bad amount contributes 0; failures never surface to the user
//!
//! ## Example
//!
//! ```rust,ignore
//! use expense_dashboard::*;
//!
//! let mut dashboard = Dashboard::from_source(&source)?;
//! dashboard.apply_filters(&ControlValues {
//!     start_date: Some("2024-02-01".to_string()),
//!     end_date: None,
//!     category: None,
//! });
//! println!("{}", dashboard.totals_display());
//! ```

pub mod budget;
pub mod chart;
pub mod currency;
pub mod dashboard;
pub mod date;
pub mod error;
pub mod filter;
pub mod schema;
pub mod totals;
pub mod validate;

pub use budget::{budget_alerts, budget_progress, Budget, BudgetProgress, BudgetStatus};
pub use chart::{build_chart_series, ChartSeries};
pub use currency::{format_amount, parse_amount, parse_amount_strict};
pub use dashboard::{ChartRenderer, ControlValues, Dashboard, RecordSource};
pub use date::{
    format_display_date, is_on_or_after, is_on_or_before, parse_display_date, parse_iso_date,
    suggested_ranges, SuggestedRange,
};
pub use error::{DashboardError, Result};
pub use filter::{apply_criteria, FilterCriteria};
pub use schema::{CategoryStat, DashboardPayload, ExpenseRecord};
pub use totals::{
    aggregate_visible, stats_for_visible, BreakdownEntry, FilteredStats, FilteredTotals,
};
pub use validate::{default_categories, validate_expense_input, ExpenseInput};

/// Filters the record list and aggregates totals over the survivors in one
/// step, for callers that do not hold a [`Dashboard`].
pub fn filter_and_total(
    records: &[ExpenseRecord],
    criteria: &FilterCriteria,
) -> (Vec<bool>, FilteredTotals) {
    let visibility = apply_criteria(records, criteria);
    let totals = aggregate_visible(records, &visibility);
    (visibility, totals)
}
