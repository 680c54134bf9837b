use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::currency::parse_amount;
use crate::date::parse_display_date;
use chrono::NaiveDate;

/// One expense row as rendered into the view. Field text is kept exactly as
/// the server formats it; numeric and calendar views of the data are derived
/// on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ExpenseRecord {
    #[schemars(description = "Server-assigned record identifier")]
    pub id: String,

    #[schemars(description = "Free-text description of the expense")]
    pub description: String,

    #[schemars(
        description = "Display-formatted amount exactly as rendered, e.g. '$45.50'. Non-negative."
    )]
    pub amount: String,

    #[schemars(description = "Category key. Matched exactly (case-sensitive) by the filter.")]
    pub category: String,

    #[schemars(description = "Where the expense was recorded from (e.g. 'manual', 'import')")]
    pub origin: String,

    #[schemars(description = "Calendar date in display form DD-MM-YYYY, no time component")]
    pub date: String,
}

impl ExpenseRecord {
    /// Numeric amount for aggregation. Malformed or negative text counts as 0.
    pub fn amount_value(&self) -> f64 {
        parse_amount(&self.amount)
    }

    /// Canonical calendar value of the record's date, if its text parses.
    pub fn date_value(&self) -> Option<NaiveDate> {
        parse_display_date(&self.date).ok()
    }
}

/// A server-computed per-category aggregate, independent of any client-side
/// filtering. Supplied once at view initialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct CategoryStat {
    #[schemars(description = "Category key")]
    pub category: String,

    #[schemars(description = "Total spent in this category. May be zero.")]
    pub total: f64,

    #[schemars(description = "Display color for the category's chart segment")]
    pub color: String,
}

/// The initial server payload a view is populated from: the full record list
/// plus the category aggregates feeding the chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DashboardPayload {
    #[schemars(description = "All expense records for the view, in render order")]
    pub records: Vec<ExpenseRecord>,

    #[schemars(description = "Ordered per-category aggregates for the chart")]
    pub category_stats: Vec<CategoryStat>,
}

impl DashboardPayload {
    /// Deserializes the payload as delivered by the server-side render.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(DashboardPayload)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_generation() {
        let schema_json = DashboardPayload::schema_as_json().unwrap();
        assert!(schema_json.contains("records"));
        assert!(schema_json.contains("category_stats"));
    }

    #[test]
    fn test_payload_from_json() {
        let json = r#"{
            "records": [{
                "id": "1",
                "description": "Groceries",
                "amount": "$45.50",
                "category": "Food",
                "origin": "manual",
                "date": "10-01-2024"
            }],
            "category_stats": [{"category": "Food", "total": 45.5, "color": "red"}]
        }"#;
        let payload = DashboardPayload::from_json(json).unwrap();
        assert_eq!(payload.records.len(), 1);
        assert_eq!(payload.category_stats[0].total, 45.5);

        assert!(DashboardPayload::from_json("{").is_err());
    }

    #[test]
    fn test_record_round_trip() {
        let record = ExpenseRecord {
            id: "abc123".to_string(),
            description: "Groceries".to_string(),
            amount: "$45.50".to_string(),
            category: "Food".to_string(),
            origin: "manual".to_string(),
            date: "10-01-2024".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_derived_views_of_record() {
        let record = ExpenseRecord {
            id: "1".to_string(),
            description: "Bus ticket".to_string(),
            amount: "$2.75".to_string(),
            category: "Transport".to_string(),
            origin: "manual".to_string(),
            date: "5-3-2024".to_string(),
        };

        assert_eq!(record.amount_value(), 2.75);
        assert_eq!(
            record.date_value(),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }

    #[test]
    fn test_malformed_fields_degrade() {
        let record = ExpenseRecord {
            id: "1".to_string(),
            description: "???".to_string(),
            amount: "n/a".to_string(),
            category: "Other".to_string(),
            origin: "import".to_string(),
            date: "not-a-date".to_string(),
        };

        assert_eq!(record.amount_value(), 0.0);
        assert_eq!(record.date_value(), None);
    }
}
