use crate::domain::a006_customer::api;
use crate::domain::a013_sales_type;
use crate::domain::a016_payment_term;
use crate::shared::components::{select_options, DetailsShell, FormField};
use crate::shared::form::{load_failure, number_text, parse_int, parse_number, FormState, OutcomeText};
use contracts::domain::a006_customer::Customer;
use contracts::domain::a013_sales_type::SalesType;
use contracts::domain::a016_payment_term::PaymentTerm;
use contracts::domain::common::AggregateRoot;
use futures_util::future::try_join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Customer form, opened as a tab.
#[component]
pub fn CustomerDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    let sales_types = RwSignal::new(Vec::<SalesType>::new());
    let payment_terms = RwSignal::new(Vec::<PaymentTerm>::new());

    let defaults = Customer::default();
    let name = RwSignal::new(String::new());
    let debtor_ref = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let tax_id = RwSignal::new(String::new());
    let curr_code = RwSignal::new(String::new());
    let sales_type = RwSignal::new(String::new());
    let terms = RwSignal::new(String::new());
    let credit_limit = RwSignal::new(number_text(defaults.credit_limit));
    let discount = RwSignal::new(number_text(defaults.discount));
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let inactive = RwSignal::new(false);

    spawn_local(async move {
        let references = try_join(
            a013_sales_type::api::fetch_all(false),
            a016_payment_term::api::fetch_all(false),
        );
        let loaded = match id {
            Some(id) => try_join(api::fetch_by_id(id), references)
                .await
                .map(|(customer, refs)| (Some(customer), refs)),
            None => references.await.map(|refs| (None, refs)),
        };
        match loaded {
            Ok((customer, (types, term_list))) => {
                match customer {
                    Some(c) => {
                        name.set(c.name);
                        debtor_ref.set(c.debtor_ref);
                        address.set(c.address);
                        tax_id.set(c.tax_id);
                        curr_code.set(c.curr_code);
                        sales_type.set(c.sales_type.to_string());
                        terms.set(c.payment_terms.to_string());
                        credit_limit.set(number_text(c.credit_limit));
                        discount.set(number_text(c.discount));
                        phone.set(c.phone);
                        email.set(c.email);
                        notes.set(c.notes);
                        inactive.set(c.inactive);
                    }
                    None => {
                        if let Some(first) = types.first() {
                            sales_type.set(first.id.to_string());
                        }
                        if let Some(first) = term_list.first() {
                            terms.set(first.terms_indicator.to_string());
                        }
                    }
                }
                sales_types.set(types);
                payment_terms.set(term_list);
            }
            Err(e) => load_error.set(Some(load_failure(&e, Customer::element_name()))),
        }
        loading.set(false);
    });

    let submit = Callback::new(move |_| {
        let record = Customer {
            debtor_no: id.unwrap_or_default(),
            name: name.get_untracked().trim().to_string(),
            debtor_ref: debtor_ref.get_untracked().trim().to_string(),
            address: address.get_untracked().trim().to_string(),
            tax_id: tax_id.get_untracked().trim().to_string(),
            curr_code: curr_code.get_untracked().trim().to_uppercase(),
            sales_type: parse_int(&sales_type.get_untracked()),
            payment_terms: parse_int(&terms.get_untracked()),
            credit_limit: parse_number(&credit_limit.get_untracked()),
            discount: parse_number(&discount.get_untracked()),
            phone: phone.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            notes: notes.get_untracked(),
            inactive: inactive.get_untracked(),
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
            OutcomeText::saved::<Customer>(is_new),
            &[Customer::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", Customer::element_name())
        } else {
            format!("{} {}", Customer::element_name(), name.get())
        }
    });
    let errors = form.errors_signal();

    view! {
        <div class="details-page">
            <DetailsShell
                title=title
                form=form
                loading=loading
                load_error=load_error
                on_submit=submit
                on_cancel=on_cancel
            >
                <div class="form__columns">
                    <div class="form__column">
                        <FormField label="Customer Name" field="name" errors=errors required=true>
                            <Input value=name />
                        </FormField>
                        <FormField label="Customer Short Name" field="debtor_ref" errors=errors required=true>
                            <Input value=debtor_ref />
                        </FormField>
                        <FormField label="Address" field="address" errors=errors>
                            <Textarea value=address />
                        </FormField>
                        <FormField label="Tax ID" field="tax_id" errors=errors>
                            <Input value=tax_id />
                        </FormField>
                        <FormField label="Phone" field="phone" errors=errors>
                            <Input value=phone />
                        </FormField>
                        <FormField label="E-mail" field="email" errors=errors>
                            <Input value=email />
                        </FormField>
                    </div>
                    <div class="form__column">
                        <FormField label="Currency" field="curr_code" errors=errors required=true>
                            <Input value=curr_code placeholder="USD" />
                        </FormField>
                        <FormField label="Sales Type / Price List" field="sales_type" errors=errors>
                            <Select value=sales_type>
                                {move || {
                                    let pairs = sales_types
                                        .get()
                                        .into_iter()
                                        .map(|t| (t.id.to_string(), t.sales_type))
                                        .collect();
                                    select_options("— Select sales type —", pairs, &sales_type.get_untracked())
                                }}
                            </Select>
                        </FormField>
                        <FormField label="Payment Terms" field="payment_terms" errors=errors>
                            <Select value=terms>
                                {move || {
                                    let pairs = payment_terms
                                        .get()
                                        .into_iter()
                                        .map(|t| (t.terms_indicator.to_string(), t.terms))
                                        .collect();
                                    select_options("— Select terms —", pairs, &terms.get_untracked())
                                }}
                            </Select>
                        </FormField>
                        <FormField label="Credit Limit" field="credit_limit" errors=errors>
                            <Input value=credit_limit />
                        </FormField>
                        <FormField label="Discount, %" field="discount" errors=errors>
                            <Input value=discount />
                        </FormField>
                        <FormField label="General Notes" field="notes" errors=errors>
                            <Textarea value=notes />
                        </FormField>
                        <Checkbox checked=inactive label="Inactive" />
                    </div>
                </div>
            </DetailsShell>
        </div>
    }
}
