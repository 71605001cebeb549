use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

/// Item category with the defaults new items inherit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCategory {
    #[serde(default)]
    pub category_id: i32,
    pub description: String,
    #[serde(default)]
    pub dflt_tax_type: i32,
    pub dflt_units: String,
    /// "B" purchased, "M" manufactured, "D" service.
    #[serde(default = "default_mb_flag")]
    pub dflt_mb_flag: String,
    #[serde(default)]
    pub dflt_sales_act: String,
    #[serde(default)]
    pub dflt_cogs_act: String,
    #[serde(default)]
    pub dflt_inventory_act: String,
    #[serde(default)]
    pub dflt_adjustment_act: String,
    #[serde(default)]
    pub dflt_no_sale: bool,
    #[serde(default)]
    pub inactive: bool,
}

fn default_mb_flag() -> String {
    "B".to_string()
}

impl Default for ItemCategory {
    fn default() -> Self {
        Self {
            category_id: 0,
            description: String::new(),
            dflt_tax_type: 0,
            dflt_units: String::new(),
            dflt_mb_flag: default_mb_flag(),
            dflt_sales_act: String::new(),
            dflt_cogs_act: String::new(),
            dflt_inventory_act: String::new(),
            dflt_adjustment_act: String::new(),
            dflt_no_sale: false,
            inactive: false,
        }
    }
}

pub const MB_FLAGS: [(&str, &str); 3] = [
    ("B", "Purchased"),
    ("M", "Manufactured"),
    ("D", "Service"),
];

pub fn mb_flag_label(flag: &str) -> &'static str {
    MB_FLAGS
        .iter()
        .find(|(code, _)| *code == flag)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

impl Validate for ItemCategory {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("description", &self.description, "Category Name is required");
        errors.require("dflt_units", &self.dflt_units, "Default unit is required");
        errors.check(
            MB_FLAGS.iter().any(|(code, _)| *code == self.dflt_mb_flag),
            "dflt_mb_flag",
            "Item type is required",
        );
        errors.into_result()
    }
}

impl AggregateRoot for ItemCategory {
    type Id = i32;

    fn id(&self) -> i32 {
        self.category_id
    }

    fn display_name(&self) -> String {
        self.description.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "item_categories"
    }

    fn element_name() -> &'static str {
        "Item Category"
    }

    fn list_name() -> &'static str {
        "Item Categories"
    }

    fn api_path() -> &'static str {
        "/api/item-categories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let errors = ItemCategory::default().validate().unwrap_err();
        assert_eq!(errors.get("description"), Some("Category Name is required"));
        assert_eq!(errors.get("dflt_units"), Some("Default unit is required"));
        assert!(!errors.contains("dflt_mb_flag"));
    }

    #[test]
    fn test_mb_flag_label() {
        assert_eq!(mb_flag_label("D"), "Service");
        assert_eq!(mb_flag_label("X"), "Unknown");
    }
}
