use crate::domain::a001_gl_class::api;
use crate::shared::components::{DetailsShell, FormField};
use crate::shared::form::{load_failure, parse_int, FormState, OutcomeText};
use contracts::domain::a001_gl_class::{ClassType, GlClass};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn GlClassDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let cid = RwSignal::new(String::new());
    let class_name = RwSignal::new(String::new());
    let ctype = RwSignal::new(String::new());
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(class) => {
                    cid.set(class.cid);
                    class_name.set(class.class_name);
                    ctype.set(class.ctype.to_string());
                    inactive.set(class.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, GlClass::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = GlClass {
            cid: cid.get_untracked().trim().to_string(),
            class_name: class_name.get_untracked().trim().to_string(),
            ctype: parse_int(&ctype.get_untracked()),
            inactive: inactive.get_untracked(),
        };
        if !form.validate(&record) {
            return;
        }
        let request = async move {
            if is_new {
                api::create(&record).await
            } else {
                api::update(&record.cid, &record).await
            }
        };
        form.submit(
            request,
            OutcomeText::saved::<GlClass>(is_new),
            &[GlClass::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", GlClass::element_name())
        } else {
            format!("{} {}", GlClass::element_name(), cid.get())
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
            <FormField label="Class ID" field="cid" errors=errors required=true>
                <Input value=cid disabled=!is_new placeholder="Up to 3 characters" />
            </FormField>
            <FormField label="Class Name" field="class_name" errors=errors required=true>
                <Input value=class_name />
            </FormField>
            <FormField label="Class Type" field="ctype" errors=errors required=true>
                <Select value=ctype>
                    <option value="">"— Select type —"</option>
                    {ClassType::ALL
                        .iter()
                        .map(|t| view! { <option value=t.code().to_string()>{t.label()}</option> })
                        .collect_view()}
                </Select>
            </FormField>
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
