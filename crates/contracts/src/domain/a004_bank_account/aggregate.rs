use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(default)]
    pub id: i32,
    /// GL account the bank account posts to.
    pub account_code: String,
    pub account_type: i32,
    pub bank_account_name: String,
    #[serde(default)]
    pub bank_account_number: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub bank_address: String,
    pub bank_curr_code: String,
    #[serde(default)]
    pub dflt_curr_act: bool,
    #[serde(default)]
    pub inactive: bool,
}

impl Default for BankAccount {
    fn default() -> Self {
        Self {
            id: 0,
            account_code: String::new(),
            account_type: BankAccountType::Chequing.code(),
            bank_account_name: String::new(),
            bank_account_number: String::new(),
            bank_name: String::new(),
            bank_address: String::new(),
            bank_curr_code: String::new(),
            dflt_curr_act: false,
            inactive: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankAccountType {
    Savings,
    Chequing,
    CreditCard,
    Cash,
}

impl BankAccountType {
    pub const ALL: [BankAccountType; 4] = [
        BankAccountType::Savings,
        BankAccountType::Chequing,
        BankAccountType::CreditCard,
        BankAccountType::Cash,
    ];

    pub fn code(self) -> i32 {
        match self {
            BankAccountType::Savings => 0,
            BankAccountType::Chequing => 1,
            BankAccountType::CreditCard => 2,
            BankAccountType::Cash => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            BankAccountType::Savings => "Savings Account",
            BankAccountType::Chequing => "Chequing Account",
            BankAccountType::CreditCard => "Credit Account",
            BankAccountType::Cash => "Cash Account",
        }
    }
}

impl BankAccount {
    pub fn type_label(&self) -> &'static str {
        BankAccountType::from_code(self.account_type)
            .map(BankAccountType::label)
            .unwrap_or("Unknown")
    }
}

impl Validate for BankAccount {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require(
            "bank_account_name",
            &self.bank_account_name,
            "Bank Account Name is required",
        );
        errors.require(
            "account_code",
            &self.account_code,
            "Bank Account GL Code is required",
        );
        errors.require("bank_curr_code", &self.bank_curr_code, "Currency is required");
        errors.check(
            BankAccountType::from_code(self.account_type).is_some(),
            "account_type",
            "Account Type is required",
        );
        errors.into_result()
    }
}

impl AggregateRoot for BankAccount {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.bank_account_name.clone()
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "bank_accounts"
    }

    fn element_name() -> &'static str {
        "Bank Account"
    }

    fn list_name() -> &'static str {
        "Bank Accounts"
    }

    fn api_path() -> &'static str {
        "/api/bank-accounts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let errors = BankAccount::default().validate().unwrap_err();
        assert_eq!(
            errors.get("bank_account_name"),
            Some("Bank Account Name is required")
        );
        assert_eq!(
            errors.get("account_code"),
            Some("Bank Account GL Code is required")
        );
        assert_eq!(errors.get("bank_curr_code"), Some("Currency is required"));
        assert!(!errors.contains("account_type"));
    }

    #[test]
    fn test_type_label() {
        let account = BankAccount {
            account_type: 3,
            ..Default::default()
        };
        assert_eq!(account.type_label(), "Cash Account");
    }
}
