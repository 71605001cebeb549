use crate::domain::a002_gl_account_type;
use crate::domain::a003_gl_account::api;
use crate::shared::components::{select_options, DetailsShell, FormField};
use crate::shared::form::{load_failure, FormState, OutcomeText};
use crate::shared::resource::use_reference_list;
use contracts::domain::a003_gl_account::GlAccount;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn GlAccountDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let groups = use_reference_list(a002_gl_account_type::api::fetch_all);

    let account_code = RwSignal::new(String::new());
    let account_code2 = RwSignal::new(String::new());
    let account_name = RwSignal::new(String::new());
    let account_type = RwSignal::new(String::new());
    let inactive = RwSignal::new(false);

    if let Some(code) = id {
        spawn_local(async move {
            match api::fetch_by_id(&code).await {
                Ok(account) => {
                    account_code.set(account.account_code);
                    account_code2.set(account.account_code2);
                    account_name.set(account.account_name);
                    account_type.set(account.account_type);
                    inactive.set(account.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, GlAccount::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = GlAccount {
            account_code: account_code.get_untracked().trim().to_string(),
            account_code2: account_code2.get_untracked().trim().to_string(),
            account_name: account_name.get_untracked().trim().to_string(),
            account_type: account_type.get_untracked(),
            inactive: inactive.get_untracked(),
        };
        if !form.validate(&record) {
            return;
        }
        let request = async move {
            if is_new {
                api::create(&record).await
            } else {
                api::update(&record.account_code, &record).await
            }
        };
        form.submit(
            request,
            OutcomeText::saved::<GlAccount>(is_new),
            &[GlAccount::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", GlAccount::element_name())
        } else {
            format!("{} {}", GlAccount::element_name(), account_code.get())
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
            <FormField label="Account Code" field="account_code" errors=errors required=true>
                <Input value=account_code disabled=!is_new />
            </FormField>
            <FormField label="Account Code 2" field="account_code2" errors=errors>
                <Input value=account_code2 />
            </FormField>
            <FormField label="Account Name" field="account_name" errors=errors required=true>
                <Input value=account_name />
            </FormField>
            <FormField label="Account Group" field="account_type" errors=errors required=true>
                <Select value=account_type>
                    {move || {
                        let pairs = groups
                            .get_or(Vec::new())
                            .into_iter()
                            .map(|g| (g.id.clone(), g.name))
                            .collect();
                        select_options("— Select group —", pairs, &account_type.get_untracked())
                    }}
                </Select>
            </FormField>
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
