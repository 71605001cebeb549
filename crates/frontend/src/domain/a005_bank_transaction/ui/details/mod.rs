//! "New Deposit / Payment" entry form.

use crate::domain::a003_gl_account;
use crate::domain::a004_bank_account;
use crate::domain::a005_bank_transaction::api;
use crate::shared::components::{select_options, DateInput, DetailsShell, FormField};
use crate::shared::date_utils::today;
use crate::shared::form::{parse_int, parse_number, FormState, OutcomeText};
use contracts::domain::a003_gl_account::GlAccount;
use contracts::domain::a004_bank_account::BankAccount;
use contracts::domain::a005_bank_transaction::{BankEntryDto, BankTransaction, BankTransactionFilter, EntryKind};
use contracts::domain::common::AggregateRoot;
use contracts::shared::reference::next_after;
use futures_util::future::try_join3;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn kind_value(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Deposit => "deposit",
        EntryKind::Payment => "payment",
    }
}

fn kind_from_value(value: &str) -> EntryKind {
    if value == "payment" {
        EntryKind::Payment
    } else {
        EntryKind::Deposit
    }
}

#[component]
pub fn BankEntryForm(
    /// Preselected account, usually the one the list is filtered by.
    #[prop(optional)]
    bank_act: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = FormState::new();
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    let bank_accounts = RwSignal::new(Vec::<BankAccount>::new());
    let gl_accounts = RwSignal::new(Vec::<GlAccount>::new());

    let defaults = BankEntryDto::new(today());
    let kind = RwSignal::new(kind_value(defaults.kind).to_string());
    let account = RwSignal::new(bank_act.map(|a| a.to_string()).unwrap_or_default());
    let trans_date = RwSignal::new(defaults.trans_date);
    let reference = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let gl_account = RwSignal::new(String::new());
    let memo = RwSignal::new(String::new());

    spawn_local(async move {
        let loaded = try_join3(
            a004_bank_account::api::fetch_all(false),
            a003_gl_account::api::fetch_all(false),
            api::fetch_filtered(&BankTransactionFilter::default()),
        )
        .await;
        match loaded {
            Ok((banks, accounts, transactions)) => {
                reference.set(next_after(transactions.iter().map(|t| t.reference.as_str())));
                bank_accounts.set(banks);
                gl_accounts.set(accounts);
            }
            Err(e) => load_error.set(Some(e.user_message("Failed to load bank accounts"))),
        }
        loading.set(false);
    });

    let submit = Callback::new(move |_| {
        let entry = BankEntryDto {
            kind: kind_from_value(&kind.get_untracked()),
            bank_act: parse_int(&account.get_untracked()),
            trans_date: trans_date.get_untracked(),
            reference: reference.get_untracked().trim().to_string(),
            amount: parse_number(&amount.get_untracked()),
            gl_account: gl_account.get_untracked(),
            memo: memo.get_untracked().trim().to_string(),
        };
        if !form.validate(&entry) {
            return;
        }
        let text = match entry.kind {
            EntryKind::Deposit => OutcomeText::new(
                format!("Deposit {} has been entered.", entry.reference),
                "Failed to enter the deposit",
            ),
            EntryKind::Payment => OutcomeText::new(
                format!("Payment {} has been entered.", entry.reference),
                "Failed to enter the payment",
            ),
        };
        form.submit(
            async move { api::create_entry(&entry).await },
            text,
            &[BankTransaction::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || match kind_from_value(&kind.get()) {
        EntryKind::Deposit => "New Deposit".to_string(),
        EntryKind::Payment => "New Payment".to_string(),
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
            <FormField label="Entry" field="kind" errors=errors>
                <Select value=kind>
                    <option value=kind_value(EntryKind::Deposit)>"Deposit"</option>
                    <option value=kind_value(EntryKind::Payment)>"Payment"</option>
                </Select>
            </FormField>
            <FormField label="Bank Account" field="bank_act" errors=errors required=true>
                <Select value=account>
                    {move || {
                        let pairs = bank_accounts
                            .get()
                            .into_iter()
                            .map(|a| (a.id.to_string(), a.bank_account_name))
                            .collect();
                        select_options("— Select bank account —", pairs, &account.get_untracked())
                    }}
                </Select>
            </FormField>
            <FormField label="Date" field="trans_date" errors=errors required=true>
                <DateInput value=trans_date />
            </FormField>
            <FormField label="Reference" field="ref" errors=errors required=true>
                <Input value=reference />
            </FormField>
            <FormField label="Amount" field="amount" errors=errors required=true>
                <Input value=amount placeholder="0.00" />
            </FormField>
            <FormField label="Account" field="gl_account" errors=errors required=true>
                <Select value=gl_account>
                    {move || {
                        let pairs = gl_accounts
                            .get()
                            .into_iter()
                            .map(|a| (a.account_code.clone(), a.code_and_name()))
                            .collect();
                        select_options("— Select account —", pairs, &gl_account.get_untracked())
                    }}
                </Select>
            </FormField>
            <FormField label="Memo" field="memo" errors=errors>
                <Textarea value=memo />
            </FormField>
        </DetailsShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_values() {
        for kind in [EntryKind::Deposit, EntryKind::Payment] {
            assert_eq!(kind_from_value(kind_value(kind)), kind);
        }
        assert_eq!(kind_from_value(""), EntryKind::Deposit);
    }
}
