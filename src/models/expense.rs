//! Expense model
//!
//! An expense is one logged spending event: an amount, a free-text category
//! and the calendar date it happened on. `ExpenseDraft` and `ExpenseUpdate`
//! carry raw user input until it has been parsed and validated.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Date format used for input, storage and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount a single expense may have ($1,000,000,000.00)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// The day an expense happened on
///
/// Older data files hold free text in the date field, including an empty
/// string. Text that is not a `YYYY-MM-DD` date loads as `Unparsed` and is
/// written back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpenseDate {
    Day(NaiveDate),
    Unparsed(String),
}

impl ExpenseDate {
    /// Interpret stored text, keeping it verbatim when it is not a date
    pub fn from_text(text: &str) -> Self {
        match NaiveDate::parse_from_str(text.trim(), DATE_FORMAT) {
            Ok(day) => Self::Day(day),
            Err(_) => Self::Unparsed(text.to_string()),
        }
    }

    pub fn as_day(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(day) => Some(*day),
            Self::Unparsed(_) => None,
        }
    }
}

impl From<NaiveDate> for ExpenseDate {
    fn from(day: NaiveDate) -> Self {
        Self::Day(day)
    }
}

impl PartialEq<NaiveDate> for ExpenseDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.as_day() == Some(*other)
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "{}", day.format(DATE_FORMAT)),
            Self::Unparsed(text) => f.write_str(text),
        }
    }
}

impl Serialize for ExpenseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpenseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::from_text(&text))
    }
}

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent
    pub amount: Money,

    /// Category label ("Food", "Transport", ...)
    pub category: String,

    /// Day the money was spent
    pub date: ExpenseDate,
}

impl Expense {
    /// Create a new expense
    pub fn new(amount: Money, category: impl Into<String>, date: impl Into<ExpenseDate>) -> Self {
        Self {
            amount,
            category: category.into().trim().to_string(),
            date: date.into(),
        }
    }

    /// Case-insensitive category comparison
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl From<ExpenseValidationError> for TrackerError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Parse an amount typed by the user
pub fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| TrackerError::Format(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date typed by the user
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid date '{}'. Use the format YYYY-MM-DD",
            input
        ))
    })
}

/// Raw input for a new expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    /// Blank means "today"
    pub date: String,
}

impl ExpenseDraft {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Parse and validate the draft, substituting `today` for a blank date
    pub fn into_expense(self, today: NaiveDate) -> TrackerResult<Expense> {
        let amount = parse_amount(&self.amount)?;
        let date = if self.date.trim().is_empty() {
            today
        } else {
            parse_date(&self.date)?
        };

        let expense = Expense::new(amount, self.category, date);
        expense.validate()?;
        Ok(expense)
    }
}

/// Changes to an existing expense; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpenseUpdate {
    /// Build an update from prompt answers, where blank answers keep the field
    pub fn from_input(amount: &str, category: &str, date: &str) -> TrackerResult<Self> {
        let amount = match amount.trim() {
            "" => None,
            text => Some(parse_amount(text)?),
        };
        let category = match category.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        let date = match date.trim() {
            "" => None,
            text => Some(parse_date(text)?),
        };

        Ok(Self {
            amount,
            category,
            date,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.date.is_none()
    }

    /// Apply the update to a copy of `expense` and validate the result
    pub fn apply_to(&self, expense: &Expense) -> TrackerResult<Expense> {
        let updated = Expense::new(
            self.amount.unwrap_or(expense.amount),
            self.category
                .clone()
                .unwrap_or_else(|| expense.category.clone()),
            self.date
                .map(ExpenseDate::Day)
                .unwrap_or_else(|| expense.date.clone()),
        );
        updated.validate()?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_trims_category() {
        let expense = Expense::new(Money::from_cents(500), "  Food ", date(2024, 1, 1));
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn test_matches_category_case_insensitive() {
        let expense = Expense::new(Money::from_cents(500), "Food", date(2024, 1, 1));
        assert!(expense.matches_category("food"));
        assert!(expense.matches_category("FOOD"));
        assert!(expense.matches_category(" Food "));
        assert!(!expense.matches_category("Transport"));
    }

    #[test]
    fn test_stored_date_text() {
        assert_eq!(ExpenseDate::from_text("2024-01-02"), date(2024, 1, 2));
        assert_eq!(
            ExpenseDate::from_text("01/02/2024"),
            ExpenseDate::Unparsed("01/02/2024".into())
        );
        assert_eq!(ExpenseDate::from_text(""), ExpenseDate::Unparsed(String::new()));
        assert_eq!(ExpenseDate::from_text("").as_day(), None);
    }

    #[test]
    fn test_legacy_dates_round_trip_verbatim() {
        let json = r#"[{"amount":5.0,"category":"Food","date":""},{"amount":2.0,"category":"Food","date":"01/02/2024"}]"#;
        let expenses: Vec<Expense> = serde_json::from_str(json).unwrap();

        assert_eq!(expenses[0].date, ExpenseDate::Unparsed(String::new()));
        assert_eq!(expenses[1].date.to_string(), "01/02/2024");

        let written = serde_json::to_value(&expenses).unwrap();
        assert_eq!(written[0]["date"], "");
        assert_eq!(written[1]["date"], "01/02/2024");
    }

    #[test]
    fn test_serialization_shape() {
        let expense = Expense::new(Money::from_cents(4550), "Transport", date(2024, 1, 1));
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"amount": 45.5, "category": "Transport", "date": "2024-01-01"})
        );
    }

    #[test]
    fn test_draft_blank_date_is_today() {
        let today = date(2024, 3, 9);
        let expense = ExpenseDraft::new("12.50", "Food", "  ")
            .into_expense(today)
            .unwrap();
        assert_eq!(expense.date, today);
        assert_eq!(expense.amount.cents(), 1250);
    }

    #[test]
    fn test_draft_non_numeric_amount() {
        let err = ExpenseDraft::new("twelve", "Food", "")
            .into_expense(date(2024, 1, 1))
            .unwrap_err();
        assert!(matches!(err, TrackerError::Format(_)));
    }

    #[test]
    fn test_draft_rejects_bad_input() {
        let today = date(2024, 1, 1);

        let err = ExpenseDraft::new("-5", "Food", "").into_expense(today).unwrap_err();
        assert!(err.is_validation());

        let err = ExpenseDraft::new("0", "Food", "").into_expense(today).unwrap_err();
        assert!(err.is_validation());

        let err = ExpenseDraft::new("5", "   ", "").into_expense(today).unwrap_err();
        assert!(err.is_validation());

        let err = ExpenseDraft::new("5", "Food", "01/02/2024")
            .into_expense(today)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_amount_cap() {
        let today = date(2024, 1, 1);

        let err = ExpenseDraft::new("90000000000000000", "Food", "")
            .into_expense(today)
            .unwrap_err();
        assert!(err.is_validation());

        let largest = ExpenseDraft::new("1000000000", "Food", "")
            .into_expense(today)
            .unwrap();
        assert_eq!(largest.amount, MAX_AMOUNT);
    }

    #[test]
    fn test_update_keeps_legacy_date() {
        let original = Expense::new(
            Money::from_cents(500),
            "Food",
            ExpenseDate::Unparsed(String::new()),
        );
        let updated = ExpenseUpdate::from_input("7", "", "")
            .unwrap()
            .apply_to(&original)
            .unwrap();
        assert_eq!(updated.date, ExpenseDate::Unparsed(String::new()));
        assert_eq!(updated.amount, Money::from_cents(700));
    }

    #[test]
    fn test_update_blank_fields_keep_values() {
        let original = Expense::new(Money::from_cents(12000), "Food", date(2024, 1, 1));
        let update = ExpenseUpdate::from_input("", "Groceries", "").unwrap();

        let updated = update.apply_to(&original).unwrap();
        assert_eq!(updated.amount, original.amount);
        assert_eq!(updated.category, "Groceries");
        assert_eq!(updated.date, original.date);
    }

    #[test]
    fn test_update_all_blank_is_empty() {
        assert!(ExpenseUpdate::from_input(" ", "", "").unwrap().is_empty());
    }

    #[test]
    fn test_update_validates_result() {
        let original = Expense::new(Money::from_cents(12000), "Food", date(2024, 1, 1));
        let update = ExpenseUpdate::from_input("-1", "", "").unwrap();
        assert!(update.apply_to(&original).unwrap_err().is_validation());

        assert!(matches!(
            ExpenseUpdate::from_input("abc", "", ""),
            Err(TrackerError::Format(_))
        ));
    }
}
