use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesArea {
    #[serde(default)]
    pub area_code: i32,
    pub description: String,
    #[serde(default)]
    pub inactive: bool,
}

impl Validate for SalesArea {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("description", &self.description, "Area Name is required");
        errors.into_result()
    }
}

impl AggregateRoot for SalesArea {
    type Id = i32;

    fn id(&self) -> i32 {
        self.area_code
    }

    fn display_name(&self) -> String {
        self.description.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "sales_areas"
    }

    fn element_name() -> &'static str {
        "Sales Area"
    }

    fn list_name() -> &'static str {
        "Sales Areas"
    }

    fn api_path() -> &'static str {
        "/api/sales-areas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        let errors = SalesArea::default().validate().unwrap_err();
        assert_eq!(errors.get("description"), Some("Area Name is required"));
    }
}
