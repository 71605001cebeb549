//! REST wrappers for `/api/bank-trans`.
//!
//! Transactions are posted by the backend; the front end only filters,
//! reconciles and enters new deposits or payments.

use crate::shared::api_utils::{self, with_query, ApiError};
use crate::shared::resource;
use chrono::NaiveDate;
use contracts::domain::a005_bank_transaction::{
    BankEntryDto, BankTransaction, BankTransactionFilter, ReconcileRequest,
};
use contracts::domain::common::AggregateRoot;
use serde::de::IgnoredAny;

pub async fn fetch_filtered(filter: &BankTransactionFilter) -> Result<Vec<BankTransaction>, ApiError> {
    let path = with_query(BankTransaction::api_path(), filter)?;
    api_utils::get_json(&path).await
}

/// `PATCH /api/bank-trans/{id}/reconcile`; `None` clears the reconciliation date.
pub async fn reconcile(id: i32, date: Option<NaiveDate>) -> Result<(), ApiError> {
    let path = format!("{}/reconcile", BankTransaction::item_path(&id));
    let _: IgnoredAny = api_utils::patch_json(&path, &ReconcileRequest { reconciled: date }).await?;
    Ok(())
}

pub async fn create_entry(entry: &BankEntryDto) -> Result<(), ApiError> {
    resource::create::<BankTransaction, _>(entry).await
}
