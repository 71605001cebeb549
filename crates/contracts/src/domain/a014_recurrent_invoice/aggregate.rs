use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Template order re-invoiced to a customer or to every customer of a sales group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrentInvoice {
    #[serde(default)]
    pub id: i32,
    pub description: String,
    /// Sales order used as the template.
    pub order_no: i32,
    #[serde(default)]
    pub debtor_no: Option<i32>,
    #[serde(default)]
    pub group_no: Option<i32>,
    #[serde(default)]
    pub days: u32,
    #[serde(default)]
    pub monthly: u32,
    pub begin: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub last_sent: Option<NaiveDate>,
}

impl RecurrentInvoice {
    pub fn new(begin: NaiveDate) -> Self {
        Self {
            id: 0,
            description: String::new(),
            order_no: 0,
            debtor_no: None,
            group_no: None,
            days: 0,
            monthly: 1,
            begin,
            end: begin
                .checked_add_months(Months::new(12))
                .unwrap_or(begin),
            last_sent: None,
        }
    }

    /// Date the next invoice is due, or `None` once the schedule has ended.
    pub fn next_due(&self) -> Option<NaiveDate> {
        let due = match self.last_sent {
            None => self.begin,
            Some(sent) => sent
                .checked_add_months(Months::new(self.monthly))?
                .checked_add_days(Days::new(self.days as u64))?,
        };
        (due <= self.end).then_some(due)
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_due().is_some_and(|due| due <= today)
    }
}

impl Validate for RecurrentInvoice {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("description", &self.description, "Description is required");
        errors.check(self.order_no > 0, "order_no", "Template order is required");
        errors.check(
            self.debtor_no.is_some() != self.group_no.is_some(),
            "debtor_no",
            "Select either a customer or a sales group",
        );
        errors.check(
            self.days > 0 || self.monthly > 0,
            "days",
            "Enter days or months between invoices",
        );
        errors.check(
            self.end >= self.begin,
            "end",
            "End date cannot be before begin date",
        );
        errors.into_result()
    }
}

impl AggregateRoot for RecurrentInvoice {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.description.clone()
    }

    fn aggregate_index() -> &'static str {
        "a014"
    }

    fn collection_name() -> &'static str {
        "recurrent_invoices"
    }

    fn element_name() -> &'static str {
        "Recurrent Invoice"
    }

    fn list_name() -> &'static str {
        "Recurrent Invoices"
    }

    fn api_path() -> &'static str {
        "/api/recurrent-invoices"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn invoice() -> RecurrentInvoice {
        RecurrentInvoice {
            description: "Monthly hosting".into(),
            order_no: 12,
            debtor_no: Some(3),
            ..RecurrentInvoice::new(date(2025, 1, 31))
        }
    }

    #[test]
    fn test_next_due_schedule() {
        let mut inv = invoice();
        assert_eq!(inv.next_due(), Some(date(2025, 1, 31)));

        inv.last_sent = Some(date(2025, 1, 31));
        // month arithmetic clamps to the end of February
        assert_eq!(inv.next_due(), Some(date(2025, 2, 28)));

        inv.days = 3;
        assert_eq!(inv.next_due(), Some(date(2025, 3, 3)));

        inv.last_sent = Some(date(2026, 1, 15));
        assert_eq!(inv.next_due(), None);
    }

    #[test]
    fn test_is_due() {
        let inv = invoice();
        assert!(inv.is_due(date(2025, 2, 1)));
        assert!(!inv.is_due(date(2025, 1, 30)));
    }

    #[test]
    fn test_rules() {
        assert!(invoice().validate().is_ok());

        let both = RecurrentInvoice {
            group_no: Some(1),
            ..invoice()
        };
        assert_eq!(
            both.validate().unwrap_err().get("debtor_no"),
            Some("Select either a customer or a sales group")
        );

        let mut bad = RecurrentInvoice::new(date(2025, 6, 1));
        bad.monthly = 0;
        bad.end = date(2025, 5, 1);
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert_eq!(errors.get("order_no"), Some("Template order is required"));
        assert_eq!(errors.get("days"), Some("Enter days or months between invoices"));
        assert_eq!(errors.get("end"), Some("End date cannot be before begin date"));
    }
}
