use crate::domain::a013_sales_type::api;
use crate::shared::components::{DetailsShell, FormField};
use crate::shared::form::{load_failure, number_text, parse_number, FormState, OutcomeText};
use contracts::domain::a013_sales_type::SalesType;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SalesTypeDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let defaults = SalesType::default();
    let name = RwSignal::new(String::new());
    let factor = RwSignal::new(number_text(defaults.factor));
    let tax_included = RwSignal::new(false);
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(sales_type) => {
                    name.set(sales_type.sales_type);
                    factor.set(number_text(sales_type.factor));
                    tax_included.set(sales_type.tax_included);
                    inactive.set(sales_type.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, SalesType::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = SalesType {
            id: id.unwrap_or_default(),
            sales_type: name.get_untracked().trim().to_string(),
            factor: parse_number(&factor.get_untracked()),
            tax_included: tax_included.get_untracked(),
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
            OutcomeText::saved::<SalesType>(is_new),
            &[SalesType::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", SalesType::element_name())
        } else {
            format!("{} {}", SalesType::element_name(), name.get())
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
            <FormField label="Sales Type Name" field="sales_type" errors=errors required=true>
                <Input value=name />
            </FormField>
            <FormField label="Calculation factor" field="factor" errors=errors required=true>
                <Input value=factor />
            </FormField>
            <Checkbox checked=tax_included label="Tax included" />
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
