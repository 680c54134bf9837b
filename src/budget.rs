use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::currency::parse_amount;
use crate::schema::ExpenseRecord;

/// A monthly spending limit for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: String,
    pub monthly_limit: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Safe,
    Moderate,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    /// Status band for a percent-used figure: < 60 safe, < 80 moderate,
    /// < 100 warning, else exceeded.
    pub fn from_percent_used(percent: f64) -> Self {
        if percent >= 100.0 {
            Self::Exceeded
        } else if percent >= 80.0 {
            Self::Warning
        } else if percent >= 60.0 {
            Self::Moderate
        } else {
            Self::Safe
        }
    }
}

/// How far along a category's monthly budget is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetProgress {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
    pub status: BudgetStatus,
}

/// Computes progress against `budget` for the given month, summing the
/// category's records whose display dates fall inside it. Records with
/// unparseable dates or amounts contribute nothing. Returns `None` for a
/// non-positive limit, where percent-used is undefined.
pub fn budget_progress(
    budget: &Budget,
    records: &[ExpenseRecord],
    year: i32,
    month: u32,
) -> Option<BudgetProgress> {
    if budget.monthly_limit <= 0.0 {
        return None;
    }

    let spent: f64 = records
        .iter()
        .filter(|r| r.category == budget.category)
        .filter(|r| {
            r.date_value()
                .map(|d| d.year() == year && d.month() == month)
                .unwrap_or(false)
        })
        .map(|r| parse_amount(&r.amount))
        .sum();

    let percent_used = ((spent / budget.monthly_limit) * 1000.0).round() / 10.0;

    Some(BudgetProgress {
        category: budget.category.clone(),
        limit: budget.monthly_limit,
        spent,
        remaining: budget.monthly_limit - spent,
        percent_used,
        status: BudgetStatus::from_percent_used(percent_used),
    })
}

/// Budgets at or past the warning band (>= 80% used) for the given month.
pub fn budget_alerts(
    budgets: &[Budget],
    records: &[ExpenseRecord],
    year: i32,
    month: u32,
) -> Vec<BudgetProgress> {
    budgets
        .iter()
        .filter_map(|b| budget_progress(b, records, year, month))
        .filter(|p| p.percent_used >= 80.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, category: &str, amount: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: "x".to_string(),
            description: "test".to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            origin: "manual".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_status_bands() {
        assert_eq!(BudgetStatus::from_percent_used(0.0), BudgetStatus::Safe);
        assert_eq!(BudgetStatus::from_percent_used(59.9), BudgetStatus::Safe);
        assert_eq!(BudgetStatus::from_percent_used(60.0), BudgetStatus::Moderate);
        assert_eq!(BudgetStatus::from_percent_used(80.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::from_percent_used(100.0), BudgetStatus::Exceeded);
        assert_eq!(BudgetStatus::from_percent_used(130.0), BudgetStatus::Exceeded);
    }

    #[test]
    fn test_progress_sums_only_matching_month_and_category() {
        let budget = Budget {
            category: "Food".to_string(),
            monthly_limit: 100.0,
        };
        let records = vec![
            record("10-01-2024", "Food", "$40.00"),
            record("20-01-2024", "Food", "$25.00"),
            record("10-02-2024", "Food", "$99.00"),
            record("10-01-2024", "Transport", "$15.00"),
            record("junk", "Food", "$10.00"),
        ];

        let progress = budget_progress(&budget, &records, 2024, 1).unwrap();
        assert_eq!(progress.spent, 65.0);
        assert_eq!(progress.remaining, 35.0);
        assert_eq!(progress.percent_used, 65.0);
        assert_eq!(progress.status, BudgetStatus::Moderate);
    }

    #[test]
    fn test_non_positive_limit_yields_none() {
        let budget = Budget {
            category: "Food".to_string(),
            monthly_limit: 0.0,
        };
        assert!(budget_progress(&budget, &[], 2024, 1).is_none());
    }

    #[test]
    fn test_alerts_only_at_or_past_warning() {
        let budgets = vec![
            Budget {
                category: "Food".to_string(),
                monthly_limit: 100.0,
            },
            Budget {
                category: "Transport".to_string(),
                monthly_limit: 100.0,
            },
        ];
        let records = vec![
            record("10-01-2024", "Food", "$85.00"),
            record("10-01-2024", "Transport", "$20.00"),
        ];

        let alerts = budget_alerts(&budgets, &records, 2024, 1);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].category, "Food");
        assert_eq!(alerts[0].status, BudgetStatus::Warning);
    }
}
