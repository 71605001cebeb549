use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockLocation {
    pub loc_code: String,
    pub location_name: String,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub phone2: String,
    #[serde(default)]
    pub fax: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub fixed_asset: bool,
    #[serde(default)]
    pub inactive: bool,
}

impl Validate for StockLocation {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("loc_code", &self.loc_code, "Location Code is required");
        errors.max_len(
            "loc_code",
            &self.loc_code,
            5,
            "Location code cannot be longer than 5 characters",
        );
        errors.require("location_name", &self.location_name, "Location Name is required");
        errors.phone("phone", &self.phone);
        errors.phone("phone2", &self.phone2);
        errors.email("email", &self.email);
        errors.into_result()
    }
}

impl AggregateRoot for StockLocation {
    type Id = String;

    fn id(&self) -> String {
        self.loc_code.clone()
    }

    fn display_name(&self) -> String {
        self.location_name.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a018"
    }

    fn collection_name() -> &'static str {
        "locations"
    }

    fn element_name() -> &'static str {
        "Inventory Location"
    }

    fn list_name() -> &'static str {
        "Inventory Locations"
    }

    fn api_path() -> &'static str {
        "/api/locations"
    }
}

/// Reorder level of one item at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocStock {
    pub loc_code: String,
    pub stock_id: String,
    pub reorder_level: f64,
}

impl LocStock {
    pub fn path(&self) -> String {
        format!("/api/loc-stock/{}/{}", self.loc_code, self.stock_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_rules() {
        let location = StockLocation {
            loc_code: "WAREHOUSE".into(),
            location_name: "Main warehouse".into(),
            ..Default::default()
        };
        assert_eq!(
            location.validate().unwrap_err().get("loc_code"),
            Some("Location code cannot be longer than 5 characters")
        );

        let errors = StockLocation::default().validate().unwrap_err();
        assert_eq!(errors.get("loc_code"), Some("Location Code is required"));
        assert_eq!(errors.get("location_name"), Some("Location Name is required"));
    }

    #[test]
    fn test_contacts() {
        let location = StockLocation {
            loc_code: "DEF".into(),
            location_name: "Default".into(),
            phone: "12".into(),
            email: "ops@example.com".into(),
            ..Default::default()
        };
        let errors = location.validate().unwrap_err();
        assert_eq!(errors.get("phone"), Some("Invalid phone number"));
        assert!(!errors.contains("email"));
    }
}
