use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxGroup {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub inactive: bool,
}

impl Validate for TaxGroup {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Tax group name is required");
        errors.into_result()
    }
}

impl AggregateRoot for TaxGroup {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a017"
    }

    fn collection_name() -> &'static str {
        "tax_groups"
    }

    fn element_name() -> &'static str {
        "Tax Group"
    }

    fn list_name() -> &'static str {
        "Tax Groups"
    }

    fn api_path() -> &'static str {
        "/api/tax-groups"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        let errors = TaxGroup::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Tax group name is required"));
    }
}
