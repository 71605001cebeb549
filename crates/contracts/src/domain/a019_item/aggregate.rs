use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

/// Stock item (inventory, manufactured or service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub stock_id: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    pub category_id: i32,
    #[serde(default)]
    pub tax_type_id: i32,
    pub units: String,
    #[serde(default = "default_mb_flag")]
    pub mb_flag: String,
    #[serde(default)]
    pub material_cost: f64,
    #[serde(default)]
    pub inactive: bool,
}

fn default_mb_flag() -> String {
    "B".to_string()
}

impl Default for Item {
    fn default() -> Self {
        Self {
            stock_id: String::new(),
            description: String::new(),
            long_description: String::new(),
            category_id: 0,
            tax_type_id: 0,
            units: String::new(),
            mb_flag: default_mb_flag(),
            material_cost: 0.0,
            inactive: false,
        }
    }
}

impl Item {
    /// Services have no stock and therefore no reorder levels.
    pub fn is_stocked(&self) -> bool {
        self.mb_flag != "D"
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("stock_id", &self.stock_id, "Item Code is required");
        errors.check(
            !self.stock_id.contains(' '),
            "stock_id",
            "Item Code cannot contain spaces",
        );
        errors.require("description", &self.description, "Item Name is required");
        errors.check(self.category_id > 0, "category_id", "Category is required");
        errors.require("units", &self.units, "Unit of measure is required");
        errors.into_result()
    }
}

impl AggregateRoot for Item {
    type Id = String;

    fn id(&self) -> String {
        self.stock_id.clone()
    }

    fn display_name(&self) -> String {
        self.description.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a019"
    }

    fn collection_name() -> &'static str {
        "items"
    }

    fn element_name() -> &'static str {
        "Item"
    }

    fn list_name() -> &'static str {
        "Items"
    }

    fn api_path() -> &'static str {
        "/api/items"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let errors = Item::default().validate().unwrap_err();
        assert_eq!(errors.get("stock_id"), Some("Item Code is required"));
        assert_eq!(errors.get("description"), Some("Item Name is required"));
        assert_eq!(errors.get("category_id"), Some("Category is required"));
        assert_eq!(errors.get("units"), Some("Unit of measure is required"));
    }

    #[test]
    fn test_code_without_spaces() {
        let item = Item {
            stock_id: "A 1".into(),
            description: "Widget".into(),
            category_id: 1,
            units: "each".into(),
            ..Default::default()
        };
        assert_eq!(
            item.validate().unwrap_err().get("stock_id"),
            Some("Item Code cannot contain spaces")
        );
        assert!(item.is_stocked());
    }
}
