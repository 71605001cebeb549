use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesGroup {
    #[serde(default)]
    pub id: i32,
    pub description: String,
    #[serde(default)]
    pub inactive: bool,
}

impl Validate for SalesGroup {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("description", &self.description, "Group Name is required");
        errors.into_result()
    }
}

impl AggregateRoot for SalesGroup {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.description.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "sales_groups"
    }

    fn element_name() -> &'static str {
        "Sales Group"
    }

    fn list_name() -> &'static str {
        "Sales Groups"
    }

    fn api_path() -> &'static str {
        "/api/sales-groups"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        let errors = SalesGroup::default().validate().unwrap_err();
        assert_eq!(errors.get("description"), Some("Group Name is required"));
    }
}
