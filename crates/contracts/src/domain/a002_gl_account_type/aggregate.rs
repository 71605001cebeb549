use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

/// Account group under a GL class; groups may nest through `parent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlAccountType {
    pub id: String,
    pub name: String,
    pub class_id: String,
    /// Empty for top-level groups.
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub inactive: bool,
}

impl GlAccountType {
    pub fn is_top_level(&self) -> bool {
        self.parent.trim().is_empty()
    }
}

impl Validate for GlAccountType {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("id", &self.id, "ID is required");
        errors.require("name", &self.name, "Name is required");
        errors.require("class_id", &self.class_id, "Class is required");
        errors.check(
            self.is_top_level() || self.parent.trim() != self.id.trim(),
            "parent",
            "A type cannot be its own parent",
        );
        errors.into_result()
    }
}

impl AggregateRoot for GlAccountType {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "gl_types"
    }

    fn element_name() -> &'static str {
        "GL Account Group"
    }

    fn list_name() -> &'static str {
        "GL Account Groups"
    }

    fn api_path() -> &'static str {
        "/api/gl-types"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let errors = GlAccountType::default().validate().unwrap_err();
        assert_eq!(errors.get("id"), Some("ID is required"));
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("class_id"), Some("Class is required"));
    }

    #[test]
    fn test_self_parent_rejected() {
        let ty = GlAccountType {
            id: "10".into(),
            name: "Current Assets".into(),
            class_id: "1".into(),
            parent: "10".into(),
            inactive: false,
        };
        let errors = ty.validate().unwrap_err();
        assert_eq!(errors.get("parent"), Some("A type cannot be its own parent"));

        let top = GlAccountType {
            parent: String::new(),
            ..ty
        };
        assert!(top.validate().is_ok());
        assert!(top.is_top_level());
    }
}
