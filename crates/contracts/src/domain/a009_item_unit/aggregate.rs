use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUnit {
    pub abbr: String,
    pub name: String,
    pub decimals: i32,
    #[serde(default)]
    pub inactive: bool,
}

impl Validate for ItemUnit {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("abbr", &self.abbr, "Unit Abbreviation is required");
        errors.max_len(
            "abbr",
            &self.abbr,
            20,
            "Unit Abbreviation cannot be longer than 20 characters",
        );
        errors.require("name", &self.name, "Descriptive Name is required");
        errors.check(
            (0..=6).contains(&self.decimals),
            "decimals",
            "Decimals must be between 0 and 6",
        );
        errors.into_result()
    }
}

impl AggregateRoot for ItemUnit {
    type Id = String;

    fn id(&self) -> String {
        self.abbr.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "item_units"
    }

    fn element_name() -> &'static str {
        "Unit of Measure"
    }

    fn list_name() -> &'static str {
        "Units of Measure"
    }

    fn api_path() -> &'static str {
        "/api/item-units"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules() {
        let errors = ItemUnit {
            decimals: 9,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("abbr"), Some("Unit Abbreviation is required"));
        assert_eq!(errors.get("name"), Some("Descriptive Name is required"));
        assert_eq!(errors.get("decimals"), Some("Decimals must be between 0 and 6"));

        let unit = ItemUnit {
            abbr: "kg".into(),
            name: "Kilogram".into(),
            decimals: 3,
            inactive: false,
        };
        assert!(unit.validate().is_ok());
    }
}
