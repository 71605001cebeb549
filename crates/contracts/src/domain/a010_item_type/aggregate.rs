use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub inactive: bool,
}

impl Validate for ItemType {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Item Type Name is required");
        errors.into_result()
    }
}

impl AggregateRoot for ItemType {
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
        "a010"
    }

    fn collection_name() -> &'static str {
        "item_types"
    }

    fn element_name() -> &'static str {
        "Item Type"
    }

    fn list_name() -> &'static str {
        "Item Types"
    }

    fn api_path() -> &'static str {
        "/api/item-types"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        let errors = ItemType::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Item Type Name is required"));
    }
}
