//! Form validation
//!
//! Turns the raw text of the add-expense form into a typed record. Nothing
//! reaches the store unless every field is filled in and parses.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::NewExpense;

/// Date formats accepted by the form, tried in order
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form input for a new expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub date: String,
    pub category: String,
}

impl ExpenseDraft {
    /// Create a draft from raw field values
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            date: date.into(),
            category: category.into(),
        }
    }

    /// Validate the draft and build a record for the store
    pub fn validate(&self) -> ExpenseResult<NewExpense> {
        let title = self.title.trim();
        let amount = self.amount.trim();
        let date = self.date.trim();
        let category = self.category.trim();

        if title.is_empty() || amount.is_empty() || date.is_empty() || category.is_empty() {
            return Err(ExpenseError::missing_fields());
        }

        let amount = parse_amount(amount)?;
        let date = parse_date(date)?;

        Ok(NewExpense::new(title, amount, date, category))
    }
}

/// Parse a decimal amount; anything that isn't a finite number is rejected
pub fn parse_amount(s: &str) -> ExpenseResult<f64> {
    match s.trim().parse::<f64>() {
        // -0 is stored as 0
        Ok(value) if value == 0.0 => Ok(0.0),
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExpenseError::Validation("Amount must be a number".into())),
    }
}

/// Parse `YYYY-MM-DD` (midnight) or `YYYY-MM-DD HH:MM[:SS]`
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDateTime> {
    let s = s.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ExpenseError::Validation("Invalid date, use YYYY-MM-DD".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ExpenseDraft {
        ExpenseDraft::new("Coffee", "4.5", "2024-01-02", "Food")
    }

    #[test]
    fn test_valid_draft() {
        let record = valid().validate().unwrap();
        assert_eq!(record.title, "Coffee");
        assert_eq!(record.amount, 4.5);
        assert_eq!(record.date.to_string(), "2024-01-02 00:00:00");
        assert_eq!(record.category, "Food");
    }

    #[test]
    fn test_any_blank_field_is_rejected() {
        let blanks = [
            ExpenseDraft { title: String::new(), ..valid() },
            ExpenseDraft { amount: String::new(), ..valid() },
            ExpenseDraft { date: String::new(), ..valid() },
            ExpenseDraft { title: " \t ".into(), ..valid() },
            ExpenseDraft { category: "   ".into(), ..valid() },
        ];

        for draft in blanks {
            let err = draft.validate().unwrap_err();
            assert_eq!(err.to_string(), "Please fill in all fields");
        }
    }

    #[test]
    fn test_non_numeric_amount_is_rejected() {
        for bad in ["abc", "12abc", "NaN", "inf"] {
            let draft = ExpenseDraft { amount: bad.into(), ..valid() };
            let err = draft.validate().unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "Amount must be a number");
        }
    }

    #[test]
    fn test_negative_and_zero_amounts_are_allowed() {
        assert_eq!(parse_amount("-12.5").unwrap(), -12.5);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
        assert_eq!(parse_amount(" 7 ").unwrap(), 7.0);
    }

    #[test]
    fn test_negative_zero_amount_is_zero() {
        let amount = parse_amount("-0").unwrap();
        assert_eq!(amount, 0.0);
        assert!(amount.is_sign_positive());
        assert!(parse_amount("-0.00").unwrap().is_sign_positive());
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(
            parse_date("2024-01-02 14:30").unwrap().to_string(),
            "2024-01-02 14:30:00"
        );
        assert_eq!(
            parse_date("2024-01-02 14:30:15").unwrap().to_string(),
            "2024-01-02 14:30:15"
        );
        assert!(parse_date("02/01/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let draft = ExpenseDraft::new("  Coffee ", "4.5", "2024-01-02", " Food ");
        let record = draft.validate().unwrap();
        assert_eq!(record.title, "Coffee");
        assert_eq!(record.category, "Food");
    }
}
