use crate::domain::a003_gl_account;
use crate::domain::a004_bank_account::api;
use crate::shared::components::{select_options, DetailsShell, FormField};
use crate::shared::form::{load_failure, parse_int, FormState, OutcomeText};
use crate::shared::resource::use_reference_list;
use contracts::domain::a004_bank_account::{BankAccount, BankAccountType};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn BankAccountDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let gl_accounts = use_reference_list(a003_gl_account::api::fetch_all);

    let defaults = BankAccount::default();
    let bank_account_name = RwSignal::new(String::new());
    let account_type = RwSignal::new(defaults.account_type.to_string());
    let account_code = RwSignal::new(String::new());
    let bank_curr_code = RwSignal::new(String::new());
    let bank_account_number = RwSignal::new(String::new());
    let bank_name = RwSignal::new(String::new());
    let bank_address = RwSignal::new(String::new());
    let dflt_curr_act = RwSignal::new(false);
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(account) => {
                    bank_account_name.set(account.bank_account_name);
                    account_type.set(account.account_type.to_string());
                    account_code.set(account.account_code);
                    bank_curr_code.set(account.bank_curr_code);
                    bank_account_number.set(account.bank_account_number);
                    bank_name.set(account.bank_name);
                    bank_address.set(account.bank_address);
                    dflt_curr_act.set(account.dflt_curr_act);
                    inactive.set(account.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, BankAccount::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = BankAccount {
            id: id.unwrap_or_default(),
            account_code: account_code.get_untracked(),
            account_type: parse_int(&account_type.get_untracked()),
            bank_account_name: bank_account_name.get_untracked().trim().to_string(),
            bank_account_number: bank_account_number.get_untracked().trim().to_string(),
            bank_name: bank_name.get_untracked().trim().to_string(),
            bank_address: bank_address.get_untracked().trim().to_string(),
            bank_curr_code: bank_curr_code.get_untracked().trim().to_uppercase(),
            dflt_curr_act: dflt_curr_act.get_untracked(),
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
            OutcomeText::saved::<BankAccount>(is_new),
            &[BankAccount::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", BankAccount::element_name())
        } else {
            format!("{} {}", BankAccount::element_name(), bank_account_name.get())
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
            <FormField label="Bank Account Name" field="bank_account_name" errors=errors required=true>
                <Input value=bank_account_name />
            </FormField>
            <FormField label="Account Type" field="account_type" errors=errors required=true>
                <Select value=account_type>
                    {BankAccountType::ALL
                        .iter()
                        .map(|t| view! { <option value=t.code().to_string()>{t.label()}</option> })
                        .collect_view()}
                </Select>
            </FormField>
            <FormField label="Bank Account GL Code" field="account_code" errors=errors required=true>
                <Select value=account_code>
                    {move || {
                        let pairs = gl_accounts
                            .get_or(Vec::new())
                            .into_iter()
                            .map(|a| (a.account_code.clone(), a.code_and_name()))
                            .collect();
                        select_options("— Select GL account —", pairs, &account_code.get_untracked())
                    }}
                </Select>
            </FormField>
            <FormField label="Currency" field="bank_curr_code" errors=errors required=true>
                <Input value=bank_curr_code placeholder="USD" />
            </FormField>
            <FormField label="Bank Account Number" field="bank_account_number" errors=errors>
                <Input value=bank_account_number />
            </FormField>
            <FormField label="Bank Name" field="bank_name" errors=errors>
                <Input value=bank_name />
            </FormField>
            <FormField label="Bank Address" field="bank_address" errors=errors>
                <Textarea value=bank_address />
            </FormField>
            <Checkbox checked=dflt_curr_act label="Default currency account" />
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
