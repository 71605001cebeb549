use crate::domain::common::AggregateRoot;
use crate::shared::money;
use crate::shared::validation::{FieldErrors, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Transaction type codes shared with the backend.
pub const ST_BANK_PAYMENT: i32 = 1;
pub const ST_BANK_DEPOSIT: i32 = 2;
pub const ST_CUST_PAYMENT: i32 = 12;

/// A posted movement on a bank account. Read-only apart from reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransaction {
    pub id: i32,
    #[serde(rename = "type")]
    pub trans_type: i32,
    pub trans_no: i32,
    pub bank_act: i32,
    #[serde(rename = "ref", default)]
    pub reference: String,
    pub trans_date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub person_type_id: i32,
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub reconciled: Option<NaiveDate>,
}

impl BankTransaction {
    pub fn type_label(&self) -> &'static str {
        match self.trans_type {
            ST_BANK_PAYMENT => "Bank Payment",
            ST_BANK_DEPOSIT => "Bank Deposit",
            ST_CUST_PAYMENT => "Customer Payment",
            _ => "Other",
        }
    }

    pub fn is_reconciled(&self) -> bool {
        self.reconciled.is_some()
    }
}

/// Balance after each transaction, in list order.
pub fn running_balances(transactions: &[BankTransaction], opening: f64) -> Vec<f64> {
    transactions
        .iter()
        .scan(opening, |balance, t| {
            *balance = money::round2(*balance + t.amount);
            Some(*balance)
        })
        .collect()
}

/// (deposits, payments) with payments reported as a positive number.
pub fn deposits_and_payments(transactions: &[BankTransaction]) -> (f64, f64) {
    let deposits = money::sum(transactions.iter().map(|t| t.amount).filter(|a| *a > 0.0));
    let payments = money::sum(transactions.iter().map(|t| -t.amount).filter(|a| *a > 0.0));
    (deposits, payments)
}

/// Server-side filter, sent as a query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankTransactionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_act: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl BankTransactionFilter {
    /// Stable cache-key segment.
    pub fn key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.bank_act.map(|a| a.to_string()).unwrap_or_default(),
            self.from.map(|d| d.to_string()).unwrap_or_default(),
            self.to.map(|d| d.to_string()).unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileRequest {
    pub reconciled: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Deposit,
    Payment,
}

/// Bank deposit / payment entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankEntryDto {
    pub kind: EntryKind,
    pub bank_act: i32,
    pub trans_date: NaiveDate,
    #[serde(rename = "ref")]
    pub reference: String,
    /// Always positive; the sign follows `kind`.
    pub amount: f64,
    /// Counter account of the entry.
    pub gl_account: String,
    pub memo: String,
}

impl BankEntryDto {
    pub fn new(trans_date: NaiveDate) -> Self {
        Self {
            kind: EntryKind::Deposit,
            bank_act: 0,
            trans_date,
            reference: String::new(),
            amount: 0.0,
            gl_account: String::new(),
            memo: String::new(),
        }
    }

    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Deposit => self.amount,
            EntryKind::Payment => -self.amount,
        }
    }
}

impl Validate for BankEntryDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(self.bank_act > 0, "bank_act", "Bank Account is required");
        errors.require("ref", &self.reference, "Reference is required");
        errors.require("gl_account", &self.gl_account, "Account is required");
        errors.check(
            self.amount > 0.0,
            "amount",
            "Amount must be greater than zero",
        );
        errors.into_result()
    }
}

impl AggregateRoot for BankTransaction {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.reference.clone()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "bank_transactions"
    }

    fn element_name() -> &'static str {
        "Bank Transaction"
    }

    fn list_name() -> &'static str {
        "Bank Transactions"
    }

    fn api_path() -> &'static str {
        "/api/bank-trans"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i32, amount: f64) -> BankTransaction {
        BankTransaction {
            id,
            trans_type: if amount >= 0.0 {
                ST_BANK_DEPOSIT
            } else {
                ST_BANK_PAYMENT
            },
            trans_no: id,
            bank_act: 1,
            reference: format!("{:03}", id),
            trans_date: NaiveDate::from_ymd_opt(2025, 1, id as u32).unwrap(),
            amount,
            person_type_id: 0,
            person_id: None,
            memo: String::new(),
            reconciled: None,
        }
    }

    #[test]
    fn test_running_balances() {
        let list = vec![tx(1, 100.0), tx(2, -30.5), tx(3, 10.25)];
        assert_eq!(running_balances(&list, 50.0), vec![150.0, 119.5, 129.75]);
        assert!(running_balances(&[], 5.0).is_empty());
    }

    #[test]
    fn test_deposits_and_payments() {
        let list = vec![tx(1, 100.0), tx(2, -30.5), tx(3, -9.5)];
        assert_eq!(deposits_and_payments(&list), (100.0, 40.0));
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(tx(4, 1.0)).unwrap();
        assert_eq!(json["type"], 2);
        assert_eq!(json["ref"], "004");
    }

    #[test]
    fn test_entry_validation() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let errors = BankEntryDto::new(date).validate().unwrap_err();
        assert_eq!(errors.get("bank_act"), Some("Bank Account is required"));
        assert_eq!(errors.get("ref"), Some("Reference is required"));
        assert_eq!(errors.get("amount"), Some("Amount must be greater than zero"));

        let entry = BankEntryDto {
            kind: EntryKind::Payment,
            bank_act: 1,
            reference: "001/2025".into(),
            amount: 12.5,
            gl_account: "5010".into(),
            ..BankEntryDto::new(date)
        };
        assert!(entry.validate().is_ok());
        assert_eq!(entry.signed_amount(), -12.5);
    }

    #[test]
    fn test_filter_key() {
        let filter = BankTransactionFilter {
            bank_act: Some(2),
            from: NaiveDate::from_ymd_opt(2025, 1, 1),
            to: None,
        };
        assert_eq!(filter.key(), "2|2025-01-01|");
    }
}
