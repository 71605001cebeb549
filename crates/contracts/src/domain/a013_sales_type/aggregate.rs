use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

/// Price list; prices are derived from the base list by `factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesType {
    #[serde(default)]
    pub id: i32,
    pub sales_type: String,
    #[serde(default)]
    pub tax_included: bool,
    pub factor: f64,
    #[serde(default)]
    pub inactive: bool,
}

impl Default for SalesType {
    fn default() -> Self {
        Self {
            id: 0,
            sales_type: String::new(),
            tax_included: false,
            factor: 1.0,
            inactive: false,
        }
    }
}

impl Validate for SalesType {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("sales_type", &self.sales_type, "Sales Type Name is required");
        errors.check(
            self.factor > 0.0,
            "factor",
            "Calculation factor must be greater than zero",
        );
        errors.into_result()
    }
}

impl AggregateRoot for SalesType {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.sales_type.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a013"
    }

    fn collection_name() -> &'static str {
        "sales_types"
    }

    fn element_name() -> &'static str {
        "Sales Type"
    }

    fn list_name() -> &'static str {
        "Sales Types"
    }

    fn api_path() -> &'static str {
        "/api/sales-types"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules() {
        let errors = SalesType {
            factor: 0.0,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("sales_type"), Some("Sales Type Name is required"));
        assert_eq!(
            errors.get("factor"),
            Some("Calculation factor must be greater than zero")
        );
    }
}
