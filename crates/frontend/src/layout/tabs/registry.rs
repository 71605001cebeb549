//! Tab key -> view. Every tab key of the application resolves here.

use super::tab_labels::parse_detail_key;
use crate::domain::a001_gl_class::ui::list::GlClassList;
use crate::domain::a002_gl_account_type::ui::list::GlAccountTypeList;
use crate::domain::a003_gl_account::ui::list::GlAccountList;
use crate::domain::a004_bank_account::ui::list::BankAccountList;
use crate::domain::a005_bank_transaction::ui::list::BankTransactionList;
use crate::domain::a006_customer::ui::details::CustomerDetails;
use crate::domain::a006_customer::ui::list::CustomerList;
use crate::domain::a007_sales_order::ui::details::SalesOrderDetails;
use crate::domain::a007_sales_order::ui::list::SalesOrderList;
use crate::domain::a008_item_category::ui::list::ItemCategoryList;
use crate::domain::a009_item_unit::ui::list::ItemUnitList;
use crate::domain::a010_item_type::ui::list::ItemTypeList;
use crate::domain::a011_sales_group::ui::list::SalesGroupList;
use crate::domain::a012_sales_area::ui::list::SalesAreaList;
use crate::domain::a013_sales_type::ui::list::SalesTypeList;
use crate::domain::a014_recurrent_invoice::ui::list::RecurrentInvoiceList;
use crate::domain::a015_fiscal_year::ui::list::FiscalYearList;
use crate::domain::a016_payment_term::ui::list::PaymentTermList;
use crate::domain::a017_tax_group::ui::list::TaxGroupList;
use crate::domain::a018_stock_location::ui::list::StockLocationList;
use crate::domain::a019_item::ui::details::ItemDetails;
use crate::domain::a019_item::ui::list::ItemList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::users::ui::list::UserList;
use crate::usecases::u501_customer_allocation::CustomerAllocationPage;
use crate::usecases::u502_reorder_levels::ReorderLevelsPage;
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
use contracts::domain::common::AggregateRoot;
use contracts::system::users::User;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_customer_allocation::CustomerAllocation;
use contracts::usecases::u502_reorder_levels::ReorderLevels;
use leptos::prelude::*;

fn is<T: AggregateRoot>(key: &str) -> bool {
    key == T::full_name()
}

fn is_usecase<U: UseCaseMetadata>(key: &str) -> bool {
    key == U::full_name()
}

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    // General ledger
    if is::<GlClass>(key) {
        return view! { <GlClassList /> }.into_any();
    }
    if is::<GlAccountType>(key) {
        return view! { <GlAccountTypeList /> }.into_any();
    }
    if is::<GlAccount>(key) {
        return view! { <GlAccountList /> }.into_any();
    }

    // Banking
    if is::<BankAccount>(key) {
        return view! { <BankAccountList /> }.into_any();
    }
    if is::<BankTransaction>(key) {
        return view! { <BankTransactionList /> }.into_any();
    }

    // Sales
    if is::<Customer>(key) {
        return view! { <CustomerList /> }.into_any();
    }
    if let Some(id) = parse_detail_key::<Customer>(key) {
        return view! { <CustomerDetails id=id on_saved=close on_cancel=close /> }.into_any();
    }
    if is::<SalesOrder>(key) {
        return view! { <SalesOrderList /> }.into_any();
    }
    if let Some(id) = parse_detail_key::<SalesOrder>(key) {
        return view! { <SalesOrderDetails id=id on_saved=close on_cancel=close /> }.into_any();
    }
    if is::<RecurrentInvoice>(key) {
        return view! { <RecurrentInvoiceList /> }.into_any();
    }
    if is::<SalesType>(key) {
        return view! { <SalesTypeList /> }.into_any();
    }
    if is::<SalesGroup>(key) {
        return view! { <SalesGroupList /> }.into_any();
    }
    if is::<SalesArea>(key) {
        return view! { <SalesAreaList /> }.into_any();
    }
    if is_usecase::<CustomerAllocation>(key) {
        return view! { <CustomerAllocationPage /> }.into_any();
    }

    // Inventory
    if is::<Item>(key) {
        return view! { <ItemList /> }.into_any();
    }
    if let Some(id) = parse_detail_key::<Item>(key) {
        return view! { <ItemDetails id=id on_saved=close on_cancel=close /> }.into_any();
    }
    if is::<ItemCategory>(key) {
        return view! { <ItemCategoryList /> }.into_any();
    }
    if is::<ItemUnit>(key) {
        return view! { <ItemUnitList /> }.into_any();
    }
    if is::<ItemType>(key) {
        return view! { <ItemTypeList /> }.into_any();
    }
    if is::<StockLocation>(key) {
        return view! { <StockLocationList /> }.into_any();
    }
    if is_usecase::<ReorderLevels>(key) {
        return view! { <ReorderLevelsPage /> }.into_any();
    }

    // Setup
    if is::<FiscalYear>(key) {
        return view! { <FiscalYearList /> }.into_any();
    }
    if is::<PaymentTerm>(key) {
        return view! { <PaymentTermList /> }.into_any();
    }
    if is::<TaxGroup>(key) {
        return view! { <TaxGroupList /> }.into_any();
    }

    // System
    if is::<User>(key) {
        return view! { <UserList /> }.into_any();
    }

    log::warn!("no view registered for tab '{}'", key);
    view! {
        <div class="placeholder">{format!("Unknown tab: {}", key)}</div>
    }
    .into_any()
}
