//! Sidebar with collapsible menu groups.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{split_detail_key, tab_label_for_key};
use crate::shared::icons::icon;
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

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Tab keys, in menu order
    pub items: Vec<String>,
}

impl MenuGroup {
    /// True for one of the group's list keys or a detail tab opened from it.
    pub fn owns(&self, key: &str) -> bool {
        let list_key = split_detail_key(key).map(|(list, _)| list).unwrap_or(key);
        self.items.iter().any(|item| item == list_key)
    }
}

fn agg<T: AggregateRoot>() -> String {
    T::full_name()
}

fn uc<U: UseCaseMetadata>() -> String {
    U::full_name()
}

pub fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "banking",
            label: "Banking",
            icon: "banking",
            items: vec![agg::<BankAccount>(), agg::<BankTransaction>()],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "sales",
            items: vec![
                agg::<Customer>(),
                agg::<SalesOrder>(),
                agg::<RecurrentInvoice>(),
                uc::<CustomerAllocation>(),
                agg::<SalesType>(),
                agg::<SalesGroup>(),
                agg::<SalesArea>(),
            ],
        },
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            icon: "inventory",
            items: vec![
                agg::<Item>(),
                agg::<ItemCategory>(),
                agg::<ItemUnit>(),
                agg::<ItemType>(),
                agg::<StockLocation>(),
                uc::<ReorderLevels>(),
            ],
        },
        MenuGroup {
            id: "gl",
            label: "General Ledger",
            icon: "ledger",
            items: vec![agg::<GlClass>(), agg::<GlAccountType>(), agg::<GlAccount>()],
        },
        MenuGroup {
            id: "setup",
            label: "Setup",
            icon: "setup",
            items: vec![agg::<FiscalYear>(), agg::<PaymentTerm>(), agg::<TaxGroup>()],
        },
        MenuGroup {
            id: "system",
            label: "System",
            icon: "users",
            items: vec![agg::<User>()],
        },
    ]
}

/// Menu group a tab belongs to; drives the breadcrumb.
pub fn menu_group_for_key(key: &str) -> Option<MenuGroup> {
    menu_groups().into_iter().find(|g| g.owns(key))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded_groups = RwSignal::new(Vec::<&'static str>::new());

    // the group of the active tab is always unfolded
    Effect::new(move |_| {
        let Some(active) = ctx.active.get() else {
            return;
        };
        if let Some(group) = menu_group_for_key(&active) {
            if !expanded_groups.with_untracked(|g| g.contains(&group.id)) {
                expanded_groups.update(|g| g.push(group.id));
            }
        }
    });

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let gid = group.id;
                let is_expanded = move || expanded_groups.with(|g| g.contains(&gid));
                let toggle = move |_| {
                    expanded_groups.update(|items| {
                        if let Some(pos) = items.iter().position(|x| *x == gid) {
                            items.remove(pos);
                        } else {
                            items.push(gid);
                        }
                    })
                };
                let items = StoredValue::new(group.items.clone());

                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|key| {
                                    let label = tab_label_for_key(&key);
                                    let key = StoredValue::new(key);
                                    let title = label.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key.get_value().as_str()))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(&key.get_value(), &title)
                                        >
                                            <div class="app-sidebar__item-content">
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_in_one_group() {
        let groups = menu_groups();
        let keys: Vec<&String> = groups.iter().flat_map(|g| g.items.iter()).collect();
        assert_eq!(keys.len(), 22);
        for key in keys {
            assert_eq!(groups.iter().filter(|g| g.owns(key)).count(), 1, "{}", key);
        }
    }

    #[test]
    fn test_group_for_detail_tab() {
        let group = menu_group_for_key("a006_customers_detail_7");
        assert_eq!(group.map(|g| g.label), Some("Sales"));
        assert_eq!(
            menu_group_for_key("a001_gl_classes").map(|g| g.label),
            Some("General Ledger")
        );
        assert!(menu_group_for_key("unknown").is_none());
    }
}
