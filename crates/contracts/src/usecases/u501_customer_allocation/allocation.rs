//! Distribution of a customer payment over open sales orders.

use crate::domain::a007_sales_order::SalesOrder;
use crate::shared::money;
use crate::shared::validation::FieldErrors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::request::AllocationItem;

/// One row of the allocation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationLine {
    pub order_no: i32,
    pub reference: String,
    pub ord_date: NaiveDate,
    pub outstanding: f64,
    pub amount: f64,
}

impl AllocationLine {
    pub fn from_order(order: &SalesOrder) -> Self {
        Self {
            order_no: order.order_no,
            reference: order.reference.clone(),
            ord_date: order.ord_date,
            outstanding: order.outstanding(),
            amount: 0.0,
        }
    }

    pub fn as_item(&self) -> Option<AllocationItem> {
        (self.amount > 0.0).then(|| AllocationItem {
            order_no: self.order_no,
            amount: self.amount,
        })
    }
}

/// Oldest order first (ties by order number), each capped at its outstanding amount.
///
/// Orders with nothing outstanding are left out.
pub fn auto_allocate(payment: f64, orders: &[SalesOrder]) -> Vec<AllocationLine> {
    let mut lines: Vec<AllocationLine> = orders
        .iter()
        .map(AllocationLine::from_order)
        .filter(|line| line.outstanding > 0.0)
        .collect();
    lines.sort_by(|a, b| {
        a.ord_date
            .cmp(&b.ord_date)
            .then_with(|| a.order_no.cmp(&b.order_no))
    });

    let mut left = money::round2(payment.max(0.0));
    for line in lines.iter_mut() {
        let amount = left.min(line.outstanding);
        line.amount = money::round2(amount);
        left = money::round2(left - line.amount);
    }
    lines
}

pub fn total_allocated(lines: &[AllocationLine]) -> f64 {
    money::sum(lines.iter().map(|l| l.amount))
}

pub fn unallocated(payment: f64, lines: &[AllocationLine]) -> f64 {
    money::round2(payment - total_allocated(lines))
}

/// Checks manual edits of the allocation table.
pub fn validate_allocation(payment: f64, lines: &[AllocationLine]) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check(payment > 0.0, "amount", "Payment amount must be greater than zero");
    for line in lines {
        if line.amount < 0.0 {
            errors.insert(
                "allocations",
                format!("Order {}: allocation cannot be negative", line.reference),
            );
        } else if line.amount > line.outstanding && !money::eq_cents(line.amount, line.outstanding) {
            errors.insert(
                "allocations",
                format!(
                    "Order {}: allocation exceeds the outstanding amount",
                    line.reference
                ),
            );
        }
    }
    let allocated = total_allocated(lines);
    errors.check(
        allocated <= payment || money::eq_cents(allocated, payment),
        "allocations",
        "Allocated total exceeds the payment amount",
    );
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_sales_order::SalesOrder;

    fn order(no: i32, day: u32, total: f64, alloc: f64) -> SalesOrder {
        let mut order = SalesOrder::new(NaiveDate::from_ymd_opt(2025, 4, day).unwrap());
        order.order_no = no;
        order.reference = format!("SO-{:03}", no);
        order.total = total;
        order.alloc = alloc;
        order
    }

    #[test]
    fn test_oldest_first_and_capped() {
        let orders = vec![
            order(3, 12, 100.0, 0.0),
            order(1, 10, 50.0, 20.0),
            order(2, 10, 40.0, 0.0),
        ];
        let lines = auto_allocate(100.0, &orders);
        let got: Vec<(i32, f64)> = lines.iter().map(|l| (l.order_no, l.amount)).collect();
        assert_eq!(got, vec![(1, 30.0), (2, 40.0), (3, 30.0)]);
        assert_eq!(unallocated(100.0, &lines), 0.0);
    }

    #[test]
    fn test_leftover_is_unallocated() {
        let orders = vec![order(1, 1, 25.0, 0.0), order(2, 2, 10.0, 10.0)];
        let lines = auto_allocate(40.0, &orders);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].amount, 25.0);
        assert_eq!(unallocated(40.0, &lines), 15.0);
        assert_eq!(lines[0].as_item().map(|i| i.order_no), Some(1));
    }

    #[test]
    fn test_manual_edits_validated() {
        let orders = vec![order(1, 1, 25.0, 0.0), order(2, 2, 30.0, 0.0)];
        let mut lines = auto_allocate(0.0, &orders);
        assert!(lines.iter().all(|l| l.as_item().is_none()));

        lines[0].amount = 26.0;
        let errors = validate_allocation(20.0, &lines).unwrap_err();
        assert_eq!(
            errors.get("allocations"),
            Some("Order SO-001: allocation exceeds the outstanding amount")
        );

        lines[0].amount = 15.0;
        lines[1].amount = 10.0;
        let errors = validate_allocation(20.0, &lines).unwrap_err();
        assert_eq!(
            errors.get("allocations"),
            Some("Allocated total exceeds the payment amount")
        );

        lines[1].amount = 5.0;
        assert!(validate_allocation(20.0, &lines).is_ok());
    }
}
