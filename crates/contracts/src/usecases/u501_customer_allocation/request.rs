use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment posted to `POST /api/customers/{debtor_no}/allocations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub debtor_no: i32,
    pub bank_act: i32,
    pub trans_date: NaiveDate,
    #[serde(rename = "ref")]
    pub reference: String,
    pub amount: f64,
    pub allocations: Vec<AllocationItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationItem {
    pub order_no: i32,
    pub amount: f64,
}
