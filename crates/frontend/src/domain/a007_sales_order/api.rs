use crate::shared::api_utils::{self, with_query, ApiError};
use crate::shared::resource;
use contracts::domain::a007_sales_order::SalesOrder;
use contracts::domain::common::AggregateRoot;
use serde::Serialize;

pub const CONFLICT_MESSAGE: &str =
    "This order has been modified by another user. Reload it and try again.";

#[derive(Serialize)]
struct OutstandingQuery {
    debtor_no: i32,
    outstanding: bool,
}

pub async fn fetch_all(show_inactive: bool) -> Result<Vec<SalesOrder>, ApiError> {
    resource::fetch_all::<SalesOrder>(show_inactive).await
}

/// Orders of `debtor_no` that still have an amount to be paid.
pub async fn fetch_outstanding(debtor_no: i32) -> Result<Vec<SalesOrder>, ApiError> {
    let query = OutstandingQuery {
        debtor_no,
        outstanding: true,
    };
    let path = with_query(SalesOrder::api_path(), &query)?;
    api_utils::get_json(&path).await
}

pub async fn fetch_by_id(order_no: i32) -> Result<SalesOrder, ApiError> {
    resource::fetch_by_id::<SalesOrder>(&order_no).await
}

pub async fn create(order: &SalesOrder) -> Result<(), ApiError> {
    resource::create::<SalesOrder, _>(order).await
}

/// Sends `order.version` as loaded; the server answers 409 when it has moved on.
pub async fn update(order_no: i32, order: &SalesOrder) -> Result<(), ApiError> {
    resource::update::<SalesOrder, _>(&order_no, order)
        .await
        .map_err(|e| {
            if e.is_conflict() {
                ApiError::Http {
                    status: 409,
                    message: CONFLICT_MESSAGE.to_string(),
                }
            } else {
                e
            }
        })
}

pub async fn delete(order_no: i32) -> Result<(), ApiError> {
    resource::delete::<SalesOrder>(&order_no).await
}
