use crate::domain::a010_item_type::api;
use crate::shared::components::{DetailsShell, FormField};
use crate::shared::form::{load_failure, FormState, OutcomeText};
use contracts::domain::a010_item_type::ItemType;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ItemTypeDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(item_type) => {
                    name.set(item_type.name);
                    description.set(item_type.description);
                    inactive.set(item_type.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, ItemType::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = ItemType {
            id: id.unwrap_or_default(),
            name: name.get_untracked().trim().to_string(),
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
            OutcomeText::saved::<ItemType>(is_new),
            &[ItemType::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", ItemType::element_name())
        } else {
            format!("{} {}", ItemType::element_name(), name.get())
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
            <FormField label="Name" field="name" errors=errors required=true>
                <Input value=name />
            </FormField>
            <FormField label="Description" field="description" errors=errors>
                <Textarea value=description />
            </FormField>
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
