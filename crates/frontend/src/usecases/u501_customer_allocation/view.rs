use crate::domain::a004_bank_account;
use crate::domain::a005_bank_transaction;
use crate::domain::a006_customer;
use crate::domain::a007_sales_order;
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::{select_options, DateInput, FieldError, FormField, PageHeader};
use crate::shared::date_utils::{format_date, today};
use crate::shared::form::{number_text, parse_int, parse_number, use_mutator, FormState, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::query_cache::RequestSeq;
use crate::shared::resource::use_reference_list;
use chrono::NaiveDate;
use contracts::domain::a004_bank_account::BankAccount;
use contracts::domain::a005_bank_transaction::{BankTransaction, BankTransactionFilter};
use contracts::domain::a006_customer::Customer;
use contracts::domain::a007_sales_order::SalesOrder;
use contracts::domain::common::AggregateRoot;
use contracts::shared::reference::next_after;
use contracts::shared::validation::FieldErrors;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_customer_allocation::{
    auto_allocate, total_allocated, unallocated, validate_allocation, AllocationLine,
    AllocationRequest, CustomerAllocation,
};
use futures_util::future::try_join3;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Every outstanding order as a row with nothing allocated yet.
fn open_lines(orders: &[SalesOrder]) -> Vec<AllocationLine> {
    auto_allocate(0.0, orders)
}

fn set_amount(lines: &mut [AllocationLine], order_no: i32, amount: f64) {
    if let Some(line) = lines.iter_mut().find(|l| l.order_no == order_no) {
        line.amount = amount;
    }
}

/// Header checks plus the allocation table rules.
fn check_payment(request: &AllocationRequest, lines: &[AllocationLine]) -> FieldErrors {
    let mut errors = validate_allocation(request.amount, lines)
        .err()
        .unwrap_or_default();
    errors.check(request.debtor_no > 0, "debtor_no", "Select a customer");
    errors.check(request.bank_act > 0, "bank_act", "Select the bank account");
    errors.require("reference", &request.reference, "Reference is required");
    errors
}

fn build_request(
    debtor_no: i32,
    bank_act: i32,
    trans_date: NaiveDate,
    reference: String,
    amount: f64,
    lines: &[AllocationLine],
) -> AllocationRequest {
    AllocationRequest {
        debtor_no,
        bank_act,
        trans_date,
        reference,
        amount,
        allocations: lines.iter().filter_map(AllocationLine::as_item).collect(),
    }
}

#[component]
pub fn CustomerAllocationPage() -> impl IntoView {
    let form = FormState::new();
    let mutator = use_mutator();
    let customers = use_reference_list(a006_customer::api::fetch_all);

    let debtor_no = RwSignal::new(String::new());
    let bank_act = RwSignal::new(String::new());
    let trans_date = RwSignal::new(today());
    let reference = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());

    let bank_accounts = RwSignal::new(Vec::<BankAccount>::new());
    let orders = RwSignal::new(Vec::<SalesOrder>::new());
    let lines = RwSignal::new(Vec::<AllocationLine>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);
    let requests = StoredValue::new(RequestSeq::default());

    // Outstanding orders, bank accounts and the next payment reference for the chosen customer.
    Effect::new(move |_| {
        reload.track();
        let selected = debtor_no.get();
        requests.update_value(|seq| {
            seq.advance();
        });
        let ticket = requests.get_value();
        let Some(customer) = selected.parse::<i32>().ok().filter(|id| *id > 0) else {
            orders.set(Vec::new());
            lines.set(Vec::new());
            loading.set(false);
            return;
        };
        loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            let loaded = try_join3(
                a007_sales_order::api::fetch_outstanding(customer),
                a004_bank_account::api::fetch_all(false),
                a005_bank_transaction::api::fetch_filtered(&BankTransactionFilter::default()),
            )
            .await;
            if !ticket.is_latest(requests.get_value()) {
                log::debug!("allocation data for customer {} superseded", customer);
                return;
            }
            match loaded {
                Ok((open_orders, banks, transactions)) => {
                    if bank_act.get_untracked().is_empty() {
                        if let Some(first) = banks.iter().find(|b| b.dflt_curr_act).or(banks.first()) {
                            bank_act.set(first.id.to_string());
                        }
                    }
                    reference.set(next_after(transactions.iter().map(|t| t.reference.as_str())));
                    lines.set(open_lines(&open_orders));
                    orders.set(open_orders);
                    bank_accounts.set(banks);
                }
                Err(e) => {
                    log::warn!("allocation data for customer {} failed to load: {}", customer, e);
                    load_error.set(Some(e.user_message("Failed to load outstanding orders")));
                }
            }
            loading.set(false);
        });
    });

    let auto = move |_: leptos::ev::MouseEvent| {
        let payment = parse_number(&amount.get_untracked());
        let allocated = orders.with_untracked(|list| auto_allocate(payment, list));
        lines.set(allocated);
    };

    let allocated = Memo::new(move |_| lines.with(|l| total_allocated(l)));
    let left = Memo::new(move |_| {
        let payment = parse_number(&amount.get());
        lines.with(|l| unallocated(payment, l))
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let current = lines.get_untracked();
        let request = build_request(
            parse_int(&debtor_no.get_untracked()),
            parse_int(&bank_act.get_untracked()),
            trans_date.get_untracked(),
            reference.get_untracked().trim().to_string(),
            parse_number(&amount.get_untracked()),
            &current,
        );
        if !form.publish(check_payment(&request, &current)) {
            return;
        }
        let text = OutcomeText::new(
            format!(
                "Payment {} of {} has been allocated to {} order(s).",
                request.reference,
                format_money(request.amount),
                request.allocations.len()
            ),
            "Failed to allocate the payment",
        );
        form.saving.set(true);
        mutator.run(
            async move { a006_customer::api::allocate(&request).await },
            text,
            &[
                SalesOrder::collection_name(),
                Customer::collection_name(),
                BankTransaction::collection_name(),
            ],
            move |result| {
                form.saving.set(false);
                if result.is_ok() {
                    amount.set(String::new());
                    reload.update(|n| *n += 1);
                }
            },
        );
    };

    let errors = form.errors_signal();

    let line_view = move |line: AllocationLine| {
        let order_no = line.order_no;
        view! {
            <TableRow>
                <TableCell><TableCellLayout>{line.reference.clone()}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{format_date(&line.ord_date)}</TableCellLayout></TableCell>
                <TableCell class="text-right">{format_money(line.outstanding)}</TableCell>
                <TableCell>
                    <input
                        class="line-input line-input--number"
                        prop:value=move || {
                            lines.with(|ls| {
                                ls.iter()
                                    .find(|l| l.order_no == order_no)
                                    .map(|l| number_text(l.amount))
                                    .unwrap_or_default()
                            })
                        }
                        on:change=move |ev| {
                            let value = parse_number(&event_target_value(&ev));
                            lines.update(|ls| set_amount(ls, order_no, value));
                        }
                    />
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="u501_customer_allocation--usecase" category=PAGE_CAT_USECASE>
            <PageHeader
                title=CustomerAllocation::display_name()
                tab_key=CustomerAllocation::full_name()
                subtitle=CustomerAllocation::description().to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || form.saving.get() || loading.get())
                    loading=form.saving
                    on_click=submit
                >
                    {icon("check")}
                    " Process Payment"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="form__columns">
                    <div class="form__column">
                        <FormField label="Customer" field="debtor_no" errors=errors required=true>
                            <Select value=debtor_no>
                                {move || {
                                    let pairs = customers
                                        .get_or(Vec::new())
                                        .into_iter()
                                        .filter(|c| !c.inactive)
                                        .map(|c| (c.debtor_no.to_string(), c.name))
                                        .collect();
                                    select_options("— Select customer —", pairs, &debtor_no.get_untracked())
                                }}
                            </Select>
                        </FormField>
                        <FormField label="Into Bank Account" field="bank_act" errors=errors required=true>
                            <Select value=bank_act>
                                {move || {
                                    let pairs = bank_accounts
                                        .get()
                                        .into_iter()
                                        .map(|b| (b.id.to_string(), b.bank_account_name))
                                        .collect();
                                    select_options("— Select account —", pairs, &bank_act.get_untracked())
                                }}
                            </Select>
                        </FormField>
                    </div>
                    <div class="form__column">
                        <FormField label="Date of Deposit" field="trans_date" errors=errors required=true>
                            <DateInput value=trans_date />
                        </FormField>
                        <FormField label="Reference" field="reference" errors=errors required=true>
                            <Input value=reference />
                        </FormField>
                        <FormField label="Amount" field="amount" errors=errors required=true>
                            <Input value=amount />
                        </FormField>
                    </div>
                </div>

                {move || load_error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="details__section">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h3 class="details__section-title">"Outstanding Orders"</h3>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || orders.with(|o| o.is_empty()))
                            on_click=auto
                        >
                            "Auto Allocate"
                        </Button>
                    </Flex>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell class="text-right">"Outstanding"</TableHeaderCell>
                                <TableHeaderCell>"This Allocation"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For each=move || lines.get() key=|line| line.order_no children=line_view />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && debtor_no.with(|d| !d.is_empty()) && lines.with(|l| l.is_empty())>
                        <div class="placeholder">"This customer has no outstanding orders."</div>
                    </Show>
                    <Show when=move || loading.get()>
                        <Spinner />
                    </Show>
                    <FieldError field="allocations" errors=errors />
                    <div class="details__totals">
                        <div>{move || format!("Allocated: {}", format_money(allocated.get()))}</div>
                        <div class="details__totals-grand">
                            {move || format!("Left to allocate: {}", format_money(left.get()))}
                        </div>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(no: i32, day: u32, total: f64) -> SalesOrder {
        let mut order = SalesOrder::new(NaiveDate::from_ymd_opt(2025, 5, day).unwrap());
        order.order_no = no;
        order.reference = format!("SO-{}", no);
        order.total = total;
        order
    }

    #[test]
    fn test_open_lines_start_empty() {
        let lines = open_lines(&[order(2, 3, 40.0), order(1, 1, 10.0)]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].order_no, 1);
        assert!(lines.iter().all(|l| l.amount == 0.0));
    }

    #[test]
    fn test_request_skips_unallocated_orders() {
        let mut lines = open_lines(&[order(1, 1, 10.0), order(2, 3, 40.0)]);
        set_amount(&mut lines, 2, 25.0);
        let request = build_request(
            7,
            1,
            NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            "PAY-1".into(),
            25.0,
            &lines,
        );
        assert_eq!(request.allocations.len(), 1);
        assert_eq!(request.allocations[0].order_no, 2);
        assert!(check_payment(&request, &lines).is_empty());
    }

    #[test]
    fn test_header_is_checked_with_the_lines() {
        let mut lines = open_lines(&[order(1, 1, 10.0)]);
        set_amount(&mut lines, 1, 12.0);
        let request = build_request(
            0,
            0,
            NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            String::new(),
            12.0,
            &lines,
        );
        let errors = check_payment(&request, &lines);
        assert_eq!(errors.get("debtor_no"), Some("Select a customer"));
        assert_eq!(errors.get("bank_act"), Some("Select the bank account"));
        assert_eq!(errors.get("reference"), Some("Reference is required"));
        assert_eq!(
            errors.get("allocations"),
            Some("Order SO-1: allocation exceeds the outstanding amount")
        );
    }
}
