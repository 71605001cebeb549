use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub debtor_no: i32,
    pub name: String,
    /// Short name shown in selects.
    pub debtor_ref: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub tax_id: String,
    pub curr_code: String,
    pub sales_type: i32,
    pub payment_terms: i32,
    #[serde(default)]
    pub credit_limit: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub inactive: bool,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            debtor_no: 0,
            name: String::new(),
            debtor_ref: String::new(),
            address: String::new(),
            tax_id: String::new(),
            curr_code: String::new(),
            sales_type: 0,
            payment_terms: 0,
            credit_limit: 1000.0,
            discount: 0.0,
            phone: String::new(),
            email: String::new(),
            notes: String::new(),
            inactive: false,
        }
    }
}

impl Validate for Customer {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Customer Name is required");
        errors.require("debtor_ref", &self.debtor_ref, "Customer Short Name is required");
        errors.require("curr_code", &self.curr_code, "Currency is required");
        errors.email("email", &self.email);
        errors.phone("phone", &self.phone);
        errors.check(
            (0.0..=100.0).contains(&self.discount),
            "discount",
            "Discount must be between 0 and 100",
        );
        errors.check(
            self.credit_limit >= 0.0,
            "credit_limit",
            "Credit limit cannot be negative",
        );
        errors.into_result()
    }
}

impl AggregateRoot for Customer {
    type Id = i32;

    fn id(&self) -> i32 {
        self.debtor_no
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn api_path() -> &'static str {
        "/api/customers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Customer {
        Customer {
            name: "Donald Easter LLC".into(),
            debtor_ref: "Donald".into(),
            curr_code: "USD".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        let errors = Customer::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Customer Name is required"));
        assert_eq!(errors.get("debtor_ref"), Some("Customer Short Name is required"));
        assert_eq!(errors.get("curr_code"), Some("Currency is required"));
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_contact_formats() {
        let customer = Customer {
            email: "not-an-email".into(),
            phone: "call me".into(),
            ..valid()
        };
        let errors = customer.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("phone"), Some("Invalid phone number"));
    }

    #[test]
    fn test_ranges() {
        let customer = Customer {
            discount: 120.0,
            credit_limit: -1.0,
            ..valid()
        };
        let errors = customer.validate().unwrap_err();
        assert!(errors.contains("discount"));
        assert!(errors.contains("credit_limit"));
    }
}
