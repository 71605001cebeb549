use crate::domain::a016_payment_term::api;
use crate::shared::components::{DetailsShell, FormField};
use crate::shared::form::{load_failure, parse_count, FormState, OutcomeText};
use contracts::domain::a016_payment_term::PaymentTerm;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PaymentTermDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let terms = RwSignal::new(String::new());
    let days_before_due = RwSignal::new(String::new());
    let day_in_following_month = RwSignal::new(String::new());
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(term) => {
                    terms.set(term.terms);
                    days_before_due.set(term.days_before_due.to_string());
                    day_in_following_month.set(term.day_in_following_month.to_string());
                    inactive.set(term.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, PaymentTerm::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = PaymentTerm {
            terms_indicator: id.unwrap_or_default(),
            terms: terms.get_untracked().trim().to_string(),
            days_before_due: parse_count(&days_before_due.get_untracked()),
            day_in_following_month: parse_count(&day_in_following_month.get_untracked()),
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
            OutcomeText::saved::<PaymentTerm>(is_new),
            &[PaymentTerm::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", PaymentTerm::element_name())
        } else {
            format!("{} {}", PaymentTerm::element_name(), terms.get())
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
            <FormField label="Terms Description" field="terms" errors=errors required=true>
                <Input value=terms />
            </FormField>
            <FormField label="Days before due" field="days_before_due" errors=errors>
                <Input value=days_before_due placeholder="0 for cash" />
            </FormField>
            <FormField label="Day in following month" field="day_in_following_month" errors=errors>
                <Input value=day_in_following_month placeholder="1 to 31, or 0" />
            </FormField>
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
