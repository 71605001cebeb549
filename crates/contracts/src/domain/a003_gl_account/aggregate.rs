use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlAccount {
    pub account_code: String,
    #[serde(default)]
    pub account_code2: String,
    pub account_name: String,
    /// Id of the GL account type (group).
    pub account_type: String,
    #[serde(default)]
    pub inactive: bool,
}

impl GlAccount {
    /// "1060 Checking Account", as used in selects.
    pub fn code_and_name(&self) -> String {
        format!("{} {}", self.account_code, self.account_name)
    }
}

impl Validate for GlAccount {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("account_code", &self.account_code, "Account Code is required");
        errors.require("account_name", &self.account_name, "Account Name is required");
        errors.require("account_type", &self.account_type, "Account Group is required");
        errors.into_result()
    }
}

impl AggregateRoot for GlAccount {
    type Id = String;

    fn id(&self) -> String {
        self.account_code.clone()
    }

    fn display_name(&self) -> String {
        self.account_name.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "gl_accounts"
    }

    fn element_name() -> &'static str {
        "GL Account"
    }

    fn list_name() -> &'static str {
        "GL Accounts"
    }

    fn api_path() -> &'static str {
        "/api/gl-accounts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let errors = GlAccount::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("account_code"), Some("Account Code is required"));

        let account = GlAccount {
            account_code: "1060".into(),
            account_name: "Checking Account".into(),
            account_type: "1".into(),
            ..Default::default()
        };
        assert!(account.validate().is_ok());
        assert_eq!(account.code_and_name(), "1060 Checking Account");
    }
}
