use crate::domain::a011_sales_group::api;
use crate::shared::components::{DetailsShell, FormField};
use crate::shared::form::{load_failure, FormState, OutcomeText};
use contracts::domain::a011_sales_group::SalesGroup;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SalesGroupDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let description = RwSignal::new(String::new());
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(group) => {
                    description.set(group.description);
                    inactive.set(group.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, SalesGroup::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = SalesGroup {
            id: id.unwrap_or_default(),
            description: description.get_untracked().trim().to_string(),
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
            OutcomeText::saved::<SalesGroup>(is_new),
            &[SalesGroup::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", SalesGroup::element_name())
        } else {
            format!("{} {}", SalesGroup::element_name(), description.get())
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
            <FormField label="Group Name" field="description" errors=errors required=true>
                <Input value=description />
            </FormField>
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
