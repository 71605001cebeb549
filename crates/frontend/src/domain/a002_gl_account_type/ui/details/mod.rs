use crate::domain::a001_gl_class;
use crate::domain::a002_gl_account_type::api;
use crate::shared::components::{select_options, DetailsShell, FormField};
use crate::shared::form::{load_failure, FormState, OutcomeText};
use crate::shared::resource::use_reference_list;
use contracts::domain::a002_gl_account_type::GlAccountType;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn GlAccountTypeDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let classes = use_reference_list(a001_gl_class::api::fetch_all);
    let groups = use_reference_list(api::fetch_all);

    let group_id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let class_id = RwSignal::new(String::new());
    let parent = RwSignal::new(String::new());
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(group) => {
                    group_id.set(group.id);
                    name.set(group.name);
                    class_id.set(group.class_id);
                    parent.set(group.parent);
                    inactive.set(group.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, GlAccountType::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = GlAccountType {
            id: group_id.get_untracked().trim().to_string(),
            name: name.get_untracked().trim().to_string(),
            class_id: class_id.get_untracked(),
            parent: parent.get_untracked(),
            inactive: inactive.get_untracked(),
        };
        if !form.validate(&record) {
            return;
        }
        let request = async move {
            if is_new {
                api::create(&record).await
            } else {
                api::update(&record.id, &record).await
            }
        };
        form.submit(
            request,
            OutcomeText::saved::<GlAccountType>(is_new),
            &[GlAccountType::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", GlAccountType::element_name())
        } else {
            format!("{} {}", GlAccountType::element_name(), name.get())
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
            <FormField label="ID" field="id" errors=errors required=true>
                <Input value=group_id disabled=!is_new />
            </FormField>
            <FormField label="Name" field="name" errors=errors required=true>
                <Input value=name />
            </FormField>
            <FormField label="Class" field="class_id" errors=errors required=true>
                <Select value=class_id>
                    {move || {
                        let pairs = classes
                            .get_or(Vec::new())
                            .into_iter()
                            .map(|c| (c.cid.clone(), c.class_name))
                            .collect();
                        select_options("— Select class —", pairs, &class_id.get_untracked())
                    }}
                </Select>
            </FormField>
            <FormField label="Subgroup Of" field="parent" errors=errors>
                <Select value=parent>
                    {move || {
                        let own_id = group_id.get();
                        let pairs = groups
                            .get_or(Vec::new())
                            .into_iter()
                            .filter(|g| g.id != own_id)
                            .map(|g| (g.id.clone(), g.name))
                            .collect();
                        select_options("None (top level)", pairs, &parent.get_untracked())
                    }}
                </Select>
            </FormField>
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
