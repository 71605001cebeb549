use crate::domain::a009_item_unit::api;
use crate::shared::components::{DetailsShell, FormField};
use crate::shared::form::{load_failure, parse_int, FormState, OutcomeText};
use contracts::domain::a009_item_unit::ItemUnit;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ItemUnitDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let abbr = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let decimals = RwSignal::new(String::new());
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(unit) => {
                    abbr.set(unit.abbr);
                    name.set(unit.name);
                    decimals.set(unit.decimals.to_string());
                    inactive.set(unit.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, ItemUnit::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = ItemUnit {
            abbr: abbr.get_untracked().trim().to_string(),
            name: name.get_untracked().trim().to_string(),
            decimals: parse_int(&decimals.get_untracked()),
            inactive: inactive.get_untracked(),
        };
        if !form.validate(&record) {
            return;
        }
        let request = async move {
            if is_new {
                api::create(&record).await
            } else {
                api::update(&record.abbr, &record).await
            }
        };
        form.submit(
            request,
            OutcomeText::saved::<ItemUnit>(is_new),
            &[ItemUnit::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", ItemUnit::element_name())
        } else {
            format!("{} {}", ItemUnit::element_name(), abbr.get())
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
            <FormField label="Unit Abbreviation" field="abbr" errors=errors required=true>
                <Input value=abbr disabled=!is_new placeholder="Up to 20 characters" />
            </FormField>
            <FormField label="Descriptive Name" field="name" errors=errors required=true>
                <Input value=name />
            </FormField>
            <FormField label="Decimal Places" field="decimals" errors=errors>
                <Input value=decimals />
            </FormField>
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
