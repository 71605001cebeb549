use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Payment terms: either N days after the invoice or a fixed day of the following month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTerm {
    #[serde(default)]
    pub terms_indicator: i32,
    pub terms: String,
    #[serde(default)]
    pub days_before_due: u32,
    #[serde(default)]
    pub day_in_following_month: u32,
    #[serde(default)]
    pub inactive: bool,
}

impl PaymentTerm {
    pub fn is_cash(&self) -> bool {
        self.days_before_due == 0 && self.day_in_following_month == 0
    }

    pub fn due_date(&self, invoice_date: NaiveDate) -> NaiveDate {
        if self.day_in_following_month > 0 {
            let (year, month) = if invoice_date.month() == 12 {
                (invoice_date.year() + 1, 1)
            } else {
                (invoice_date.year(), invoice_date.month() + 1)
            };
            let day = self.day_in_following_month.min(days_in_month(year, month));
            NaiveDate::from_ymd_opt(year, month, day).unwrap_or(invoice_date)
        } else {
            invoice_date
                .checked_add_days(Days::new(self.days_before_due as u64))
                .unwrap_or(invoice_date)
        }
    }

    pub fn describe(&self) -> String {
        if self.day_in_following_month > 0 {
            format!("Day {} of following month", self.day_in_following_month)
        } else if self.days_before_due > 0 {
            format!("{} days", self.days_before_due)
        } else {
            "Cash / prepaid".to_string()
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

impl Validate for PaymentTerm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("terms", &self.terms, "Terms description is required");
        errors.check(
            self.day_in_following_month <= 31,
            "day_in_following_month",
            "Day in following month must be between 0 and 31",
        );
        errors.check(
            !(self.days_before_due > 0 && self.day_in_following_month > 0),
            "days_before_due",
            "Enter either days before due or day in following month, not both",
        );
        errors.into_result()
    }
}

impl AggregateRoot for PaymentTerm {
    type Id = i32;

    fn id(&self) -> i32 {
        self.terms_indicator
    }

    fn display_name(&self) -> String {
        self.terms.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a016"
    }

    fn collection_name() -> &'static str {
        "payment_terms"
    }

    fn element_name() -> &'static str {
        "Payment Term"
    }

    fn list_name() -> &'static str {
        "Payment Terms"
    }

    fn api_path() -> &'static str {
        "/api/payment-terms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_after_days() {
        let term = PaymentTerm {
            terms: "Net 30".into(),
            days_before_due: 30,
            ..Default::default()
        };
        assert_eq!(term.due_date(date(2025, 1, 15)), date(2025, 2, 14));
        assert_eq!(term.describe(), "30 days");
    }

    #[test]
    fn test_due_in_following_month_clamps() {
        let term = PaymentTerm {
            terms: "End of next month".into(),
            day_in_following_month: 31,
            ..Default::default()
        };
        assert_eq!(term.due_date(date(2025, 1, 20)), date(2025, 2, 28));
        assert_eq!(term.due_date(date(2024, 12, 5)), date(2025, 1, 31));
    }

    #[test]
    fn test_cash_term() {
        let term = PaymentTerm {
            terms: "Cash".into(),
            ..Default::default()
        };
        assert!(term.is_cash());
        assert_eq!(term.due_date(date(2025, 3, 3)), date(2025, 3, 3));
    }

    #[test]
    fn test_exclusive_fields() {
        let term = PaymentTerm {
            terms: "Odd".into(),
            days_before_due: 10,
            day_in_following_month: 5,
            ..Default::default()
        };
        assert_eq!(
            term.validate().unwrap_err().get("days_before_due"),
            Some("Enter either days before due or day in following month, not both")
        );
        let errors = PaymentTerm::default().validate().unwrap_err();
        assert_eq!(errors.get("terms"), Some("Terms description is required"));
    }
}
