use crate::date::parse_display_date;

pub const MIN_DESCRIPTION_LEN: usize = 3;
pub const MAX_DESCRIPTION_LEN: usize = 100;
pub const MAX_AMOUNT: f64 = 999_999.99;

/// The category keys a new expense may use, in display order.
pub fn default_categories() -> &'static [&'static str] {
    &[
        "Food",
        "Transport",
        "Entertainment",
        "Health",
        "Education",
        "Utilities",
        "Clothing",
        "Home",
        "Other",
    ]
}

/// Fields of a new or edited expense as submitted, before any coercion.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: String,
    pub category: String,
    /// Display form DD-MM-YYYY; empty means "today" is filled in upstream.
    pub date: String,
}

/// Validates a submitted expense against the allowed categories, collecting
/// every failure instead of stopping at the first.
pub fn validate_expense_input(input: &ExpenseInput, categories: &[&str]) -> Vec<String> {
    let mut errors = Vec::new();

    let description = input.description.trim();
    if description.is_empty() {
        errors.push("Description is required".to_string());
    } else if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.push(format!(
            "Description must be at least {} characters",
            MIN_DESCRIPTION_LEN
        ));
    } else if input.description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.push(format!(
            "Description must be at most {} characters",
            MAX_DESCRIPTION_LEN
        ));
    }

    let amount = input.amount.trim();
    if amount.is_empty() {
        errors.push("Amount is required".to_string());
    } else {
        match amount.parse::<f64>() {
            Ok(value) if value <= 0.0 => {
                errors.push("Amount must be greater than 0".to_string());
            }
            Ok(value) if value > MAX_AMOUNT => {
                errors.push("Amount is too large".to_string());
            }
            Ok(_) => {}
            Err(_) => errors.push("Amount must be a valid number".to_string()),
        }
    }

    if input.category.is_empty() {
        errors.push("Category is required".to_string());
    } else if !categories.contains(&input.category.as_str()) {
        errors.push(format!(
            "Category must be one of: {}",
            categories.join(", ")
        ));
    }

    if !input.date.is_empty() && parse_display_date(&input.date).is_err() {
        errors.push("Date must use the format DD-MM-YYYY (e.g. 25-12-2025)".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ExpenseInput {
        ExpenseInput {
            description: "Groceries".to_string(),
            amount: "45.50".to_string(),
            category: "Food".to_string(),
            date: "10-01-2024".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let errors = validate_expense_input(&valid_input(), default_categories());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_empty_date_is_allowed() {
        let mut input = valid_input();
        input.date = String::new();
        assert!(validate_expense_input(&input, default_categories()).is_empty());
    }

    #[test]
    fn test_description_bounds() {
        let mut input = valid_input();
        input.description = "ab".to_string();
        assert_eq!(
            validate_expense_input(&input, default_categories()).len(),
            1
        );

        input.description = "x".repeat(101);
        assert_eq!(
            validate_expense_input(&input, default_categories()).len(),
            1
        );
    }

    #[test]
    fn test_amount_bounds() {
        let mut input = valid_input();
        input.amount = "0".to_string();
        assert!(!validate_expense_input(&input, default_categories()).is_empty());

        input.amount = "1000000.00".to_string();
        assert!(!validate_expense_input(&input, default_categories()).is_empty());

        input.amount = "abc".to_string();
        assert!(!validate_expense_input(&input, default_categories()).is_empty());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut input = valid_input();
        input.category = "Yachts".to_string();
        let errors = validate_expense_input(&input, default_categories());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Category must be one of"));
    }

    #[test]
    fn test_multiple_failures_are_collected() {
        let input = ExpenseInput {
            description: String::new(),
            amount: "nope".to_string(),
            category: String::new(),
            date: "2024-01-10".to_string(),
        };
        let errors = validate_expense_input(&input, default_categories());
        assert_eq!(errors.len(), 4);
    }
}
