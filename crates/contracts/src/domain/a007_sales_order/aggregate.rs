use crate::domain::common::AggregateRoot;
use crate::shared::money;
use crate::shared::validation::{FieldErrors, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ST_SALES_ORDER: i32 = 30;
pub const ST_SALES_QUOTE: i32 = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    #[serde(default)]
    pub order_no: i32,
    #[serde(default = "default_trans_type")]
    pub trans_type: i32,
    /// Incremented by the server on every update; sent back unchanged.
    #[serde(default)]
    pub version: i32,
    pub debtor_no: i32,
    #[serde(default)]
    pub branch_code: i32,
    pub reference: String,
    #[serde(default)]
    pub customer_ref: String,
    #[serde(default)]
    pub comments: String,
    pub ord_date: NaiveDate,
    /// Sales type (price list).
    #[serde(default)]
    pub order_type: i32,
    #[serde(default)]
    pub ship_via: i32,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub deliver_to: String,
    #[serde(default)]
    pub freight_cost: f64,
    pub from_stk_loc: String,
    pub delivery_date: NaiveDate,
    #[serde(default)]
    pub payment_terms: Option<i32>,
    #[serde(default)]
    pub total: f64,
    /// Amount already allocated from customer payments.
    #[serde(default)]
    pub alloc: f64,
    #[serde(default)]
    pub details: Vec<SalesOrderLine>,
}

fn default_trans_type() -> i32 {
    ST_SALES_ORDER
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderLine {
    #[serde(default)]
    pub id: i32,
    pub stk_code: String,
    #[serde(default)]
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub qty_sent: f64,
}

impl SalesOrderLine {
    pub fn line_total(&self) -> f64 {
        money::line_total(self.quantity, self.unit_price, self.discount_percent)
    }
}

impl SalesOrder {
    pub fn new(ord_date: NaiveDate) -> Self {
        Self {
            order_no: 0,
            trans_type: ST_SALES_ORDER,
            version: 0,
            debtor_no: 0,
            branch_code: 0,
            reference: String::new(),
            customer_ref: String::new(),
            comments: String::new(),
            ord_date,
            order_type: 0,
            ship_via: 0,
            delivery_address: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            deliver_to: String::new(),
            freight_cost: 0.0,
            from_stk_loc: String::new(),
            delivery_date: ord_date,
            payment_terms: None,
            total: 0.0,
            alloc: 0.0,
            details: Vec::new(),
        }
    }

    pub fn subtotal(&self) -> f64 {
        money::sum(self.details.iter().map(SalesOrderLine::line_total))
    }

    pub fn total_with_freight(&self) -> f64 {
        money::round2(self.subtotal() + self.freight_cost)
    }

    /// Brings `total` in line with the lines before submission.
    pub fn recompute_total(&mut self) {
        self.total = self.total_with_freight();
    }

    /// Part of the total not yet covered by payments; never negative.
    pub fn outstanding(&self) -> f64 {
        money::round2((self.total - self.alloc).max(0.0))
    }

    pub fn is_quote(&self) -> bool {
        self.trans_type == ST_SALES_QUOTE
    }

    /// True when every line has been delivered in full.
    pub fn is_delivered(&self) -> bool {
        !self.details.is_empty() && self.details.iter().all(|l| l.qty_sent >= l.quantity)
    }
}

impl Validate for SalesOrder {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(self.debtor_no > 0, "debtor_no", "Customer is required");
        errors.require("reference", &self.reference, "Reference is required");
        errors.require(
            "from_stk_loc",
            &self.from_stk_loc,
            "Delivery location is required",
        );
        errors.check(
            self.delivery_date >= self.ord_date,
            "delivery_date",
            "Delivery date cannot be before order date",
        );
        errors.email("contact_email", &self.contact_email);
        errors.phone("contact_phone", &self.contact_phone);
        errors.check(
            self.freight_cost >= 0.0,
            "freight_cost",
            "Shipping charge cannot be negative",
        );
        errors.check(
            !self.details.is_empty(),
            "details",
            "At least one line item is required",
        );
        for (idx, line) in self.details.iter().enumerate() {
            let n = idx + 1;
            if line.stk_code.trim().is_empty() {
                errors.insert("details", format!("Line {}: item is required", n));
            } else if line.quantity <= 0.0 {
                errors.insert("details", format!("Line {}: quantity must be positive", n));
            } else if !(0.0..=100.0).contains(&line.discount_percent) {
                errors.insert(
                    "details",
                    format!("Line {}: discount must be between 0 and 100", n),
                );
            } else if line.unit_price < 0.0 {
                errors.insert("details", format!("Line {}: price cannot be negative", n));
            }
        }
        errors.into_result()
    }
}

impl AggregateRoot for SalesOrder {
    type Id = i32;

    fn id(&self) -> i32 {
        self.order_no
    }

    fn display_name(&self) -> String {
        self.reference.clone()
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "sales_orders"
    }

    fn element_name() -> &'static str {
        "Sales Order"
    }

    fn list_name() -> &'static str {
        "Sales Orders"
    }

    fn api_path() -> &'static str {
        "/api/sales-orders"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn order() -> SalesOrder {
        let mut order = SalesOrder::new(date(10));
        order.debtor_no = 3;
        order.reference = "001/2025".into();
        order.from_stk_loc = "DEF".into();
        order.freight_cost = 5.0;
        order.details = vec![
            SalesOrderLine {
                stk_code: "101".into(),
                quantity: 2.0,
                unit_price: 10.0,
                ..Default::default()
            },
            SalesOrderLine {
                stk_code: "102".into(),
                quantity: 1.0,
                unit_price: 50.0,
                discount_percent: 10.0,
                ..Default::default()
            },
        ];
        order
    }

    #[test]
    fn test_totals() {
        let mut order = order();
        assert_eq!(order.subtotal(), 65.0);
        order.recompute_total();
        assert_eq!(order.total, 70.0);
        order.alloc = 20.0;
        assert_eq!(order.outstanding(), 50.0);
        order.alloc = 90.0;
        assert_eq!(order.outstanding(), 0.0);
    }

    #[test]
    fn test_valid_order() {
        assert!(order().validate().is_ok());
    }

    #[test]
    fn test_required_fields_and_lines() {
        let errors = SalesOrder::new(date(1)).validate().unwrap_err();
        assert_eq!(errors.get("debtor_no"), Some("Customer is required"));
        assert_eq!(errors.get("reference"), Some("Reference is required"));
        assert_eq!(errors.get("from_stk_loc"), Some("Delivery location is required"));
        assert_eq!(errors.get("details"), Some("At least one line item is required"));
    }

    #[test]
    fn test_line_and_date_rules() {
        let mut order = order();
        order.delivery_date = date(9);
        order.details[1].quantity = 0.0;
        let errors = order.validate().unwrap_err();
        assert_eq!(
            errors.get("delivery_date"),
            Some("Delivery date cannot be before order date")
        );
        assert_eq!(errors.get("details"), Some("Line 2: quantity must be positive"));
    }

    #[test]
    fn test_version_round_trips() {
        let mut order = order();
        order.version = 4;
        let json = serde_json::to_string(&order).unwrap();
        let back: SalesOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.version, 4);
        assert_eq!(back.details.len(), 2);
    }
}
