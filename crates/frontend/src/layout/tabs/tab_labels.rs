//! Tab keys and titles.
//!
//! List tabs are keyed by `AggregateRoot::full_name()` (`"a006_customers"`),
//! use cases by `UseCaseMetadata::full_name()`. Detail tabs append
//! `_detail_{id}` (or `_detail_new`) to their list key.

use contracts::domain::a001_gl_class::GlClass;
use contracts::domain::a002_gl_account_type::GlAccountType;
use contracts::domain::a003_gl_account::GlAccount;
use contracts::domain::a004_bank_account::BankAccount;
use contracts::domain::a005_bank_transaction::BankTransaction;
use contracts::domain::a006_customer::Customer;
use contracts::domain::a007_sales_order::SalesOrder;
use contracts::domain::a008_item_category::ItemCategory;
use contracts::domain::a009_item_unit::ItemUnit;
use contracts::domain::a010_item_type::ItemType;
use contracts::domain::a011_sales_group::SalesGroup;
use contracts::domain::a012_sales_area::SalesArea;
use contracts::domain::a013_sales_type::SalesType;
use contracts::domain::a014_recurrent_invoice::RecurrentInvoice;
use contracts::domain::a015_fiscal_year::FiscalYear;
use contracts::domain::a016_payment_term::PaymentTerm;
use contracts::domain::a017_tax_group::TaxGroup;
use contracts::domain::a018_stock_location::StockLocation;
use contracts::domain::a019_item::Item;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::system::users::User;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_customer_allocation::CustomerAllocation;
use contracts::usecases::u502_reorder_levels::ReorderLevels;

const DETAIL_MARKER: &str = "_detail_";
const NEW_ID: &str = "new";

fn list_label<T: AggregateRoot>(key: &str) -> Option<&'static str> {
    (key == T::full_name()).then(T::list_name)
}

fn element_label<T: AggregateRoot>(list_key: &str) -> Option<&'static str> {
    (list_key == T::full_name()).then(T::element_name)
}

fn usecase_label<U: UseCaseMetadata>(key: &str) -> Option<&'static str> {
    (key == U::full_name()).then(U::display_name)
}

macro_rules! first_label {
    ($f:ident, $key:expr, [$($t:ty),* $(,)?]) => {
        None $(.or_else(|| $f::<$t>($key)))*
    };
}

fn aggregate_list_label(key: &str) -> Option<&'static str> {
    first_label!(list_label, key, [
        GlClass, GlAccountType, GlAccount, BankAccount, BankTransaction, Customer,
        SalesOrder, ItemCategory, ItemUnit, ItemType, SalesGroup, SalesArea, SalesType,
        RecurrentInvoice, FiscalYear, PaymentTerm, TaxGroup, StockLocation, Item, User,
    ])
}

fn aggregate_element_label(list_key: &str) -> Option<&'static str> {
    first_label!(element_label, list_key, [Customer, SalesOrder, Item])
}

/// Title of the tab with `key`; unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(label) = aggregate_list_label(key)
        .or_else(|| usecase_label::<CustomerAllocation>(key))
        .or_else(|| usecase_label::<ReorderLevels>(key))
    {
        return label.to_string();
    }

    if let Some((list_key, id)) = split_detail_key(key) {
        if let Some(element) = aggregate_element_label(list_key) {
            return detail_tab_label(element, id);
        }
    }

    key.to_string()
}

/// "Customer · 42", "Customer · New"
pub fn detail_tab_label(entity_label: &str, id: &str) -> String {
    if id == NEW_ID {
        format!("{} · New", entity_label)
    } else {
        format!("{} · {}", entity_label, id)
    }
}

pub fn detail_tab_key<T: AggregateRoot>(id: Option<&T::Id>) -> String {
    let id = id.map(|id| id.as_string()).unwrap_or_else(|| NEW_ID.to_string());
    format!("{}{}{}", T::full_name(), DETAIL_MARKER, id)
}

/// `"a006_customers_detail_42"` -> `("a006_customers", "42")`
pub fn split_detail_key(key: &str) -> Option<(&str, &str)> {
    let (list_key, id) = key.split_once(DETAIL_MARKER)?;
    (!list_key.is_empty() && !id.is_empty()).then_some((list_key, id))
}

/// Record id of a detail tab of `T`; `Some(None)` for a new record.
pub fn parse_detail_key<T: AggregateRoot>(key: &str) -> Option<Option<T::Id>> {
    let (list_key, id) = split_detail_key(key)?;
    if list_key != T::full_name() {
        return None;
    }
    if id == NEW_ID {
        return Some(None);
    }
    T::Id::from_string(id).ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_labels() {
        assert_eq!(tab_label_for_key("a006_customers"), "Customers");
        assert_eq!(tab_label_for_key("sys_users"), "Users");
        assert_eq!(tab_label_for_key("u502_reorder_levels"), "Reorder Levels");
        assert_eq!(tab_label_for_key("nope"), "nope");
    }

    #[test]
    fn test_detail_keys() {
        let key = detail_tab_key::<Customer>(Some(&42));
        assert_eq!(key, "a006_customers_detail_42");
        assert_eq!(tab_label_for_key(&key), "Customer · 42");
        assert_eq!(parse_detail_key::<Customer>(&key), Some(Some(42)));
        assert_eq!(parse_detail_key::<SalesOrder>(&key), None);

        let new_key = detail_tab_key::<Item>(None);
        assert_eq!(parse_detail_key::<Item>(&new_key), Some(None));
        assert_eq!(tab_label_for_key(&new_key), "Item · New");
    }
}
