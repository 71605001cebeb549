use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

/// Top level of the chart of accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlClass {
    pub cid: String,
    pub class_name: String,
    pub ctype: i32,
    #[serde(default)]
    pub inactive: bool,
}

impl Default for GlClass {
    fn default() -> Self {
        Self {
            cid: String::new(),
            class_name: String::new(),
            ctype: ClassType::Assets.code(),
            inactive: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassType {
    Assets,
    Liabilities,
    Equity,
    Income,
    CostOfGoodsSold,
    Expense,
}

impl ClassType {
    pub const ALL: [ClassType; 6] = [
        ClassType::Assets,
        ClassType::Liabilities,
        ClassType::Equity,
        ClassType::Income,
        ClassType::CostOfGoodsSold,
        ClassType::Expense,
    ];

    pub fn code(self) -> i32 {
        match self {
            ClassType::Assets => 1,
            ClassType::Liabilities => 2,
            ClassType::Equity => 3,
            ClassType::Income => 4,
            ClassType::CostOfGoodsSold => 5,
            ClassType::Expense => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            ClassType::Assets => "Assets",
            ClassType::Liabilities => "Liabilities",
            ClassType::Equity => "Equity",
            ClassType::Income => "Income",
            ClassType::CostOfGoodsSold => "Cost of Goods Sold",
            ClassType::Expense => "Expense",
        }
    }

    /// Balance sheet classes carry forward between fiscal years.
    pub fn is_balance_sheet(self) -> bool {
        matches!(
            self,
            ClassType::Assets | ClassType::Liabilities | ClassType::Equity
        )
    }
}

impl GlClass {
    pub fn class_type(&self) -> Option<ClassType> {
        ClassType::from_code(self.ctype)
    }

    pub fn class_type_label(&self) -> &'static str {
        self.class_type().map(ClassType::label).unwrap_or("Unknown")
    }

    /// Financial statement the class reports on.
    pub fn statement(&self) -> Option<&'static str> {
        self.class_type().map(|t| {
            if t.is_balance_sheet() {
                "Balance Sheet"
            } else {
                "Profit and Loss"
            }
        })
    }
}

impl Validate for GlClass {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("cid", &self.cid, "Class ID is required");
        errors.max_len("cid", &self.cid, 3, "Class ID cannot be longer than 3 characters");
        errors.require("class_name", &self.class_name, "Class Name is required");
        errors.check(
            self.class_type().is_some(),
            "ctype",
            "Class Type is required",
        );
        errors.into_result()
    }
}

impl AggregateRoot for GlClass {
    type Id = String;

    fn id(&self) -> String {
        self.cid.clone()
    }

    fn display_name(&self) -> String {
        self.class_name.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "gl_classes"
    }

    fn element_name() -> &'static str {
        "GL Account Class"
    }

    fn list_name() -> &'static str {
        "GL Account Classes"
    }

    fn api_path() -> &'static str {
        "/api/gl-classes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cid_is_rejected() {
        let class = GlClass {
            cid: String::new(),
            class_name: "Assets".into(),
            ..Default::default()
        };
        let errors = class.validate().unwrap_err();
        assert_eq!(errors.get("cid"), Some("Class ID is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_all_required_fields_reported() {
        let class = GlClass {
            ctype: 0,
            ..Default::default()
        };
        let errors = class.validate().unwrap_err();
        assert_eq!(errors.get("class_name"), Some("Class Name is required"));
        assert_eq!(errors.get("ctype"), Some("Class Type is required"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_statement_follows_class_type() {
        let mut class = GlClass {
            ctype: 3,
            ..Default::default()
        };
        assert_eq!(class.statement(), Some("Balance Sheet"));
        class.ctype = 6;
        assert_eq!(class.statement(), Some("Profit and Loss"));
        class.ctype = 9;
        assert_eq!(class.statement(), None);
    }

    #[test]
    fn test_inactive_is_optional_in_json() {
        let class: GlClass =
            serde_json::from_str(r#"{"cid":"1","class_name":"Assets","ctype":1}"#).unwrap();
        assert!(!class.inactive);
        assert!(class.validate().is_ok());
        assert_eq!(class.class_type_label(), "Assets");
    }
}
