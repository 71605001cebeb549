use crate::domain::a004_bank_account;
use crate::domain::a005_bank_transaction::api;
use crate::domain::a005_bank_transaction::ui::details::BankEntryForm;
use crate::shared::components::{
    select_options, ListToolbar, OptionalDateInput, PageHeader, PaginationControls,
    SortableHeaderCell, TableCellMoney, TableTotalsRow,
};
use crate::shared::components::table::number_format::format_money;
use crate::shared::date_utils::{format_date, format_opt_date, today};
use crate::shared::form::use_mutator;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_f64, cmp_text, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_cache::{use_query, QueryKey};
use crate::shared::resource::{name_index, use_reference_list};
use contracts::domain::a005_bank_transaction::{
    deposits_and_payments, running_balances, BankTransaction, BankTransactionFilter,
};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use std::collections::HashMap;
use thaw::*;

impl Searchable for BankTransaction {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.memo.clone(),
            self.person_id.clone().unwrap_or_default(),
        ]
    }
}

impl Sortable for BankTransaction {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "ref" => cmp_text(&self.reference, &other.reference),
            "type" => self.trans_type.cmp(&other.trans_type),
            "amount" => cmp_f64(self.amount, other.amount),
            "reconciled" => self.reconciled.cmp(&other.reconciled),
            _ => self
                .trans_date
                .cmp(&other.trans_date)
                .then(self.id.cmp(&other.id)),
        }
    }
}

/// Balance after each transaction, walking the list in posting order
/// regardless of how the table is sorted.
fn balances_by_id(transactions: &[BankTransaction]) -> HashMap<i32, f64> {
    let mut chronological = transactions.to_vec();
    chronological.sort_by(|a, b| a.trans_date.cmp(&b.trans_date).then(a.id.cmp(&b.id)));
    chronological
        .iter()
        .map(|t| t.id)
        .zip(running_balances(&chronological, 0.0))
        .collect()
}

#[component]
pub fn BankTransactionList() -> impl IntoView {
    let state = ListState::new("trans_date");
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let bank_act = RwSignal::new(String::new());
    let from = RwSignal::new(None);
    let to = RwSignal::new(None);
    let filter = Memo::new(move |_| BankTransactionFilter {
        bank_act: bank_act.get().parse().ok(),
        from: from.get(),
        to: to.get(),
    });

    let query = use_query(
        move || {
            QueryKey::new(BankTransaction::collection_name())
                .with("list")
                .with(filter.get().key())
        },
        move || {
            let filter = filter.get_untracked();
            async move { api::fetch_filtered(&filter).await }
        },
    );
    let accounts_query = use_reference_list(a004_bank_account::api::fetch_all);
    let accounts = name_index(accounts_query, |a| {
        (a.id.to_string(), a.bank_account_name.clone())
    });

    Effect::new(move |prev: Option<()>| {
        filter.track();
        if prev.is_some() {
            state.page.set(0);
        }
    });

    let balances = Memo::new(move |_| query.data.with(|rows| {
        rows.as_deref().map(balances_by_id).unwrap_or_default()
    }));
    let page = Memo::new(move |_| state.view(query.get_or(Vec::new())));
    let totals = Memo::new(move |_| page.with(|p| deposits_and_payments(&p.filtered)));

    let open_entry = move |_| {
        let preselected = filter.get_untracked().bank_act;
        modal_stack.open_form(move |close| {
            match preselected {
                Some(account) => view! {
                    <BankEntryForm bank_act=account on_saved=close on_cancel=close />
                }
                .into_any(),
                None => view! { <BankEntryForm on_saved=close on_cancel=close /> }.into_any(),
            }
        });
    };

    let reconcile = move |id: i32, checked: bool| {
        let date = checked.then(today);
        spawn_local(async move {
            match api::reconcile(id, date).await {
                Ok(()) => mutator
                    .client()
                    .invalidate(&[BankTransaction::collection_name()]),
                Err(e) => mutator
                    .feedback()
                    .error(e.user_message("Failed to update the reconciliation")),
            }
        });
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<BankTransaction>();
    };

    view! {
        <PageFrame page_id="a005_bank_transaction--list" category=PAGE_CAT_LIST>
            <PageHeader title=BankTransaction::list_name() tab_key=BankTransaction::full_name()>
                <Button appearance=ButtonAppearance::Primary on_click=open_entry>
                    {icon("plus")}
                    " New Deposit / Payment"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=refresh
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-bar">
                    <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                        <Label>"Bank Account"</Label>
                        <Select value=bank_act>
                            {move || {
                                let pairs = accounts_query
                                    .get_or(Vec::new())
                                    .into_iter()
                                    .map(|a| (a.id.to_string(), a.bank_account_name))
                                    .collect();
                                select_options("All accounts", pairs, &bank_act.get_untracked())
                            }}
                        </Select>
                        <Label>"From"</Label>
                        <OptionalDateInput value=from />
                        <Label>"To"</Label>
                        <OptionalDateInput value=to />
                    </Flex>
                </div>

                <ListToolbar
                    search=state.search
                    on_search=state.on_search()
                    placeholder="Search by reference or memo"
                >
                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || page.with(|p| p.total_count()))
                        page_size=state.page_size
                        on_page_change=state.on_page_change()
                        on_page_size_change=state.on_page_size_change()
                    />
                </ListToolbar>

                {move || query.error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Date" sort_field="trans_date" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Type" sort_field="type" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Reference" sort_field="ref" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>"Bank Account"</TableHeaderCell>
                            <TableHeaderCell>"Memo"</TableHeaderCell>
                            <SortableHeaderCell label="Amount" sort_field="amount" current_sort_field=state.sort_field sort_ascending=state.sort_ascending align_right=true />
                            <TableHeaderCell class="text-right">"Balance"</TableHeaderCell>
                            <SortableHeaderCell label="Reconciled" sort_field="reconciled" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            let accounts = accounts.get();
                            let balances = balances.get();
                            page.get().rows.into_iter().map(|t| {
                                let id = t.id;
                                let balance = balances.get(&id).copied();
                                let reconciled = t.is_reconciled();
                                let reconciled_on = format_opt_date(t.reconciled.as_ref());
                                let trans_date = format_date(&t.trans_date);
                                let type_label = t.type_label();
                                let reference_view = highlight_matches(&t.reference, &search);
                                let bank_account = accounts.name_of(&t.bank_act.to_string());
                                let memo_view = highlight_matches(&t.memo, &search);
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{trans_date}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{type_label}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>{reference_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{bank_account}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{memo_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=Signal::stored(Some(t.amount)) color_by_sign=true />
                                        <TableCellMoney value=Signal::stored(balance) />
                                        <TableCell>
                                            <TableCellLayout>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=reconciled
                                                    on:change=move |ev| reconcile(id, event_target_checked(&ev))
                                                />
                                                " "
                                                {reconciled_on}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()
                        }}
                    </TableBody>
                    <tfoot>
                        {move || {
                            let (deposits, payments) = totals.get();
                            view! {
                                <TableTotalsRow
                                    label=Signal::derive(move || format!("Rows: {}", page.with(|p| p.total_count())))
                                    span=5
                                >
                                    <td class="text-right">{format!("Deposits {}", format_money(deposits))}</td>
                                    <td class="text-right">{format!("Payments {}", format_money(payments))}</td>
                                    <td class="text-right">{format!("Net {}", format_money(deposits - payments))}</td>
                                </TableTotalsRow>
                            }
                        }}
                    </tfoot>
                </Table>

                <Show when=move || query.loading.get()>
                    <Spinner />
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a005_bank_transaction::{ST_BANK_DEPOSIT, ST_BANK_PAYMENT};

    fn tx(id: i32, day: u32, amount: f64) -> BankTransaction {
        BankTransaction {
            id,
            trans_type: if amount >= 0.0 { ST_BANK_DEPOSIT } else { ST_BANK_PAYMENT },
            trans_no: id,
            bank_act: 1,
            reference: format!("{:03}", id),
            trans_date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            amount,
            person_type_id: 0,
            person_id: None,
            memo: String::new(),
            reconciled: None,
        }
    }

    #[test]
    fn test_balances_follow_posting_order() {
        // listed newest first, as the server may return them
        let rows = vec![tx(3, 10, -30.0), tx(1, 1, 100.0), tx(2, 5, 50.0)];
        let balances = balances_by_id(&rows);
        assert_eq!(balances[&1], 100.0);
        assert_eq!(balances[&2], 150.0);
        assert_eq!(balances[&3], 120.0);
    }

    #[test]
    fn test_same_day_ordered_by_id() {
        let rows = vec![tx(2, 1, -10.0), tx(1, 1, 25.0)];
        let balances = balances_by_id(&rows);
        assert_eq!(balances[&1], 25.0);
        assert_eq!(balances[&2], 15.0);
    }

    #[test]
    fn test_search_fields() {
        let mut t = tx(7, 1, 10.0);
        t.memo = "Office rent".to_string();
        assert!(t.matches_filter("RENT"));
        assert!(t.matches_filter("007"));
        assert!(!t.matches_filter("payroll"));
    }
}
