use crate::domain::a006_customer;
use crate::domain::a007_sales_order;
use crate::domain::a011_sales_group;
use crate::domain::a014_recurrent_invoice::api;
use crate::shared::components::{select_options, DateInput, DetailsShell, FormField};
use crate::shared::date_utils::{format_opt_date, today};
use crate::shared::form::{load_failure, parse_count, FormState, OutcomeText};
use contracts::domain::a006_customer::Customer;
use contracts::domain::a007_sales_order::SalesOrder;
use contracts::domain::a011_sales_group::SalesGroup;
use contracts::domain::a014_recurrent_invoice::RecurrentInvoice;
use contracts::domain::common::AggregateRoot;
use contracts::shared::reference::next_after;
use futures_util::future::{try_join, try_join4};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn optional_id(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

fn id_text(id: Option<i32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Keeps customer and group mutually exclusive: picking one clears the other.
fn exclusive_with(source: RwSignal<String>, other: RwSignal<String>) {
    Effect::new(move |prev: Option<String>| {
        let current = source.get();
        if prev.is_some_and(|p| p != current) && !current.is_empty() {
            other.set(String::new());
        }
        current
    });
}

#[component]
pub fn RecurrentInvoiceDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    let customers = RwSignal::new(Vec::<Customer>::new());
    let groups = RwSignal::new(Vec::<SalesGroup>::new());
    let orders = RwSignal::new(Vec::<SalesOrder>::new());

    let defaults = RecurrentInvoice::new(today());
    let description = RwSignal::new(String::new());
    let order_no = RwSignal::new(String::new());
    let debtor_no = RwSignal::new(String::new());
    let group_no = RwSignal::new(String::new());
    let days = RwSignal::new(defaults.days.to_string());
    let monthly = RwSignal::new(defaults.monthly.to_string());
    let begin = RwSignal::new(defaults.begin);
    let end = RwSignal::new(defaults.end);
    let last_sent = RwSignal::new(None);

    spawn_local(async move {
        let references = try_join4(
            a006_customer::api::fetch_all(false),
            a011_sales_group::api::fetch_all(false),
            a007_sales_order::api::fetch_all(false),
            api::fetch_all(true),
        );
        let loaded = match id {
            Some(id) => try_join(api::fetch_by_id(id), references)
                .await
                .map(|(invoice, refs)| (Some(invoice), refs)),
            None => references.await.map(|refs| (None, refs)),
        };
        match loaded {
            Ok((invoice, (customer_list, group_list, order_list, existing))) => {
                match invoice {
                    Some(invoice) => {
                        description.set(invoice.description);
                        order_no.set(invoice.order_no.to_string());
                        debtor_no.set(id_text(invoice.debtor_no));
                        group_no.set(id_text(invoice.group_no));
                        days.set(invoice.days.to_string());
                        monthly.set(invoice.monthly.to_string());
                        begin.set(invoice.begin);
                        end.set(invoice.end);
                        last_sent.set(invoice.last_sent);
                    }
                    None if !existing.is_empty() => {
                        description.set(next_after(existing.iter().map(|i| i.description.as_str())));
                    }
                    None => {}
                }
                customers.set(customer_list);
                groups.set(group_list);
                orders.set(order_list);
            }
            Err(e) => load_error.set(Some(load_failure(&e, RecurrentInvoice::element_name()))),
        }
        loading.set(false);
    });

    exclusive_with(debtor_no, group_no);
    exclusive_with(group_no, debtor_no);

    let submit = Callback::new(move |_| {
        let record = RecurrentInvoice {
            id: id.unwrap_or_default(),
            description: description.get_untracked().trim().to_string(),
            order_no: optional_id(&order_no.get_untracked()).unwrap_or_default(),
            debtor_no: optional_id(&debtor_no.get_untracked()),
            group_no: optional_id(&group_no.get_untracked()),
            days: parse_count(&days.get_untracked()),
            monthly: parse_count(&monthly.get_untracked()),
            begin: begin.get_untracked(),
            end: end.get_untracked(),
            last_sent: last_sent.get_untracked(),
        };
        if !form.validate(&record) {
            return;
        }
        let request = async move {
            match id {
                None => api::create(&record).await,
                Some(id) => api::update(id, &record).await,
            }
        };
        form.submit(
            request,
            OutcomeText::saved::<RecurrentInvoice>(is_new),
            &[RecurrentInvoice::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", RecurrentInvoice::element_name())
        } else {
            format!("{} {}", RecurrentInvoice::element_name(), description.get())
        }
    });
    let errors = form.errors_signal();

    view! {
        <DetailsShell
            title=title
            form=form
            loading=loading
            load_error=load_error
            on_submit=submit
            on_cancel=on_cancel
        >
            <FormField label="Description" field="description" errors=errors required=true>
                <Input value=description />
            </FormField>
            <FormField label="Template" field="order_no" errors=errors required=true>
                <Select value=order_no>
                    {move || {
                        let pairs = orders
                            .get()
                            .into_iter()
                            .map(|o| (o.order_no.to_string(), format!("{} {}", o.order_no, o.reference)))
                            .collect();
                        select_options("— Select order —", pairs, &order_no.get_untracked())
                    }}
                </Select>
            </FormField>
            <FormField label="Customer" field="debtor_no" errors=errors>
                <Select value=debtor_no>
                    {move || {
                        let pairs = customers
                            .get()
                            .into_iter()
                            .map(|c| (c.debtor_no.to_string(), c.name))
                            .collect();
                        select_options("— None —", pairs, &debtor_no.get_untracked())
                    }}
                </Select>
            </FormField>
            <FormField label="Sales Group" field="group_no" errors=errors>
                <Select value=group_no>
                    {move || {
                        let pairs = groups
                            .get()
                            .into_iter()
                            .map(|g| (g.id.to_string(), g.description))
                            .collect();
                        select_options("— None —", pairs, &group_no.get_untracked())
                    }}
                </Select>
            </FormField>
            <div class="form__columns">
                <div class="form__column">
                    <FormField label="Days" field="days" errors=errors>
                        <Input value=days />
                    </FormField>
                    <FormField label="Begin" field="begin" errors=errors required=true>
                        <DateInput value=begin />
                    </FormField>
                </div>
                <div class="form__column">
                    <FormField label="Monthly" field="monthly" errors=errors>
                        <Input value=monthly />
                    </FormField>
                    <FormField label="End" field="end" errors=errors required=true>
                        <DateInput value=end />
                    </FormField>
                </div>
            </div>
            <Show when=move || last_sent.get().is_some()>
                <div class="details__meta">
                    {move || format!("Last sent: {}", format_opt_date(last_sent.get().as_ref()))}
                </div>
            </Show>
        </DetailsShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_id() {
        assert_eq!(optional_id("12"), Some(12));
        assert_eq!(optional_id(" 3 "), Some(3));
        assert_eq!(optional_id(""), None);
        assert_eq!(optional_id("0"), None);
        assert_eq!(id_text(Some(5)), "5");
        assert_eq!(id_text(None), "");
    }
}
