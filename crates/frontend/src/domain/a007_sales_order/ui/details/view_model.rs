use crate::shared::date_utils::today;
use crate::shared::form::{number_text, parse_int, parse_number};
use chrono::NaiveDate;
use contracts::domain::a006_customer::Customer;
use contracts::domain::a007_sales_order::{SalesOrder, SalesOrderLine};
use contracts::domain::a019_item::Item;
use contracts::shared::money;
use leptos::prelude::*;

/// One editable line; `key` identifies the row while lines are added and removed.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRow {
    pub key: u64,
    pub line: SalesOrderLine,
}

pub fn rows_from_lines(lines: Vec<SalesOrderLine>) -> Vec<LineRow> {
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| LineRow {
            key: idx as u64 + 1,
            line,
        })
        .collect()
}

fn next_key(rows: &[LineRow]) -> u64 {
    rows.iter().map(|r| r.key).max().unwrap_or(0) + 1
}

fn blank_line() -> SalesOrderLine {
    SalesOrderLine {
        quantity: 1.0,
        ..Default::default()
    }
}

/// Puts `item` on the line, taking over its description.
pub fn set_line_item(line: &mut SalesOrderLine, item: Option<&Item>) {
    match item {
        Some(item) => {
            line.stk_code = item.stock_id.clone();
            line.description = item.description.clone();
        }
        None => {
            line.stk_code.clear();
            line.description.clear();
        }
    }
}

#[derive(Clone, Copy)]
pub struct SalesOrderDetailsVm {
    pub debtor_no: RwSignal<String>,
    pub reference: RwSignal<String>,
    pub customer_ref: RwSignal<String>,
    pub ord_date: RwSignal<NaiveDate>,
    pub delivery_date: RwSignal<NaiveDate>,
    pub order_type: RwSignal<String>,
    pub payment_terms: RwSignal<String>,
    pub from_stk_loc: RwSignal<String>,
    pub deliver_to: RwSignal<String>,
    pub delivery_address: RwSignal<String>,
    pub contact_phone: RwSignal<String>,
    pub contact_email: RwSignal<String>,
    pub freight_cost: RwSignal<String>,
    pub comments: RwSignal<String>,
    pub lines: RwSignal<Vec<LineRow>>,
    /// The order as loaded; carries the fields the form does not edit (version, alloc, ...).
    base: StoredValue<SalesOrder>,
}

impl SalesOrderDetailsVm {
    pub fn new() -> Self {
        let date = today();
        Self {
            debtor_no: RwSignal::new(String::new()),
            reference: RwSignal::new(String::new()),
            customer_ref: RwSignal::new(String::new()),
            ord_date: RwSignal::new(date),
            delivery_date: RwSignal::new(date),
            order_type: RwSignal::new(String::new()),
            payment_terms: RwSignal::new(String::new()),
            from_stk_loc: RwSignal::new(String::new()),
            deliver_to: RwSignal::new(String::new()),
            delivery_address: RwSignal::new(String::new()),
            contact_phone: RwSignal::new(String::new()),
            contact_email: RwSignal::new(String::new()),
            freight_cost: RwSignal::new(number_text(0.0)),
            comments: RwSignal::new(String::new()),
            lines: RwSignal::new(Vec::new()),
            base: StoredValue::new(SalesOrder::new(date)),
        }
    }

    pub fn apply(&self, order: SalesOrder) {
        self.debtor_no.set(if order.debtor_no > 0 {
            order.debtor_no.to_string()
        } else {
            String::new()
        });
        self.reference.set(order.reference.clone());
        self.customer_ref.set(order.customer_ref.clone());
        self.ord_date.set(order.ord_date);
        self.delivery_date.set(order.delivery_date);
        self.order_type.set(order.order_type.to_string());
        self.payment_terms
            .set(order.payment_terms.map(|t| t.to_string()).unwrap_or_default());
        self.from_stk_loc.set(order.from_stk_loc.clone());
        self.deliver_to.set(order.deliver_to.clone());
        self.delivery_address.set(order.delivery_address.clone());
        self.contact_phone.set(order.contact_phone.clone());
        self.contact_email.set(order.contact_email.clone());
        self.freight_cost.set(number_text(order.freight_cost));
        self.comments.set(order.comments.clone());
        self.lines.set(rows_from_lines(order.details.clone()));
        self.base.set_value(order);
    }

    /// Price list, terms and delivery details of a newly picked customer.
    pub fn apply_customer(&self, customer: &Customer) {
        self.order_type.set(customer.sales_type.to_string());
        self.payment_terms.set(customer.payment_terms.to_string());
        if self.deliver_to.get_untracked().trim().is_empty() {
            self.deliver_to.set(customer.name.clone());
        }
        if self.delivery_address.get_untracked().trim().is_empty() {
            self.delivery_address.set(customer.address.clone());
        }
        if self.contact_phone.get_untracked().trim().is_empty() {
            self.contact_phone.set(customer.phone.clone());
        }
        if self.contact_email.get_untracked().trim().is_empty() {
            self.contact_email.set(customer.email.clone());
        }
    }

    pub fn order_no(&self) -> i32 {
        self.base.with_value(|o| o.order_no)
    }

    pub fn add_line(&self) {
        self.lines.update(|rows| {
            let key = next_key(rows);
            rows.push(LineRow {
                key,
                line: blank_line(),
            });
        });
    }

    pub fn remove_line(&self, key: u64) {
        self.lines.update(|rows| rows.retain(|r| r.key != key));
    }

    pub fn update_line(&self, key: u64, edit: impl FnOnce(&mut SalesOrderLine)) {
        self.lines.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.key == key) {
                edit(&mut row.line);
            }
        });
    }

    pub fn line_total(&self, key: u64) -> f64 {
        self.lines.with(|rows| {
            rows.iter()
                .find(|r| r.key == key)
                .map(|r| r.line.line_total())
                .unwrap_or_default()
        })
    }

    pub fn subtotal(&self) -> f64 {
        self.lines
            .with(|rows| money::sum(rows.iter().map(|r| r.line.line_total())))
    }

    pub fn total(&self) -> f64 {
        money::round2(self.subtotal() + parse_number(&self.freight_cost.get()))
    }

    /// The record to send, with `total` recomputed from the lines.
    pub fn build(&self) -> SalesOrder {
        let mut order = self.base.get_value();
        order.debtor_no = parse_int(&self.debtor_no.get_untracked());
        order.reference = self.reference.get_untracked().trim().to_string();
        order.customer_ref = self.customer_ref.get_untracked().trim().to_string();
        order.ord_date = self.ord_date.get_untracked();
        order.delivery_date = self.delivery_date.get_untracked();
        order.order_type = parse_int(&self.order_type.get_untracked());
        order.payment_terms = self.payment_terms.get_untracked().parse().ok();
        order.from_stk_loc = self.from_stk_loc.get_untracked();
        order.deliver_to = self.deliver_to.get_untracked().trim().to_string();
        order.delivery_address = self.delivery_address.get_untracked().trim().to_string();
        order.contact_phone = self.contact_phone.get_untracked().trim().to_string();
        order.contact_email = self.contact_email.get_untracked().trim().to_string();
        order.freight_cost = parse_number(&self.freight_cost.get_untracked());
        order.comments = self.comments.get_untracked();
        order.details = self
            .lines
            .get_untracked()
            .into_iter()
            .map(|r| r.line)
            .collect();
        order.recompute_total();
        order
    }
}

impl Default for SalesOrderDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(code: &str) -> SalesOrderLine {
        SalesOrderLine {
            stk_code: code.to_string(),
            quantity: 1.0,
            unit_price: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_row_keys_stay_unique_after_removal() {
        let mut rows = rows_from_lines(vec![line("A"), line("B"), line("C")]);
        assert_eq!(rows.iter().map(|r| r.key).collect::<Vec<_>>(), vec![1, 2, 3]);
        rows.retain(|r| r.key != 2);
        assert_eq!(next_key(&rows), 4);
        assert_eq!(next_key(&[]), 1);
    }

    #[test]
    fn test_set_line_item() {
        let item = Item {
            stock_id: "101".into(),
            description: "iPad Air 2 16GB".into(),
            ..Default::default()
        };
        let mut l = blank_line();
        set_line_item(&mut l, Some(&item));
        assert_eq!(l.stk_code, "101");
        assert_eq!(l.description, "iPad Air 2 16GB");
        set_line_item(&mut l, None);
        assert!(l.stk_code.is_empty());
        assert_eq!(l.quantity, 1.0);
    }
}
