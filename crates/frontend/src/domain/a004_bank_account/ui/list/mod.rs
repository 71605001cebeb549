use crate::domain::a003_gl_account;
use crate::domain::a004_bank_account::api;
use crate::domain::a004_bank_account::ui::details::BankAccountDetails;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, filter_inactive, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::{name_index, use_collection, use_reference_list};
use contracts::domain::a004_bank_account::BankAccount;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for BankAccount {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.bank_account_name.clone(),
            self.bank_account_number.clone(),
            self.bank_name.clone(),
            self.bank_curr_code.clone(),
        ]
    }
}

impl Sortable for BankAccount {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "account_type" => self.account_type.cmp(&other.account_type),
            "bank_curr_code" => cmp_text(&self.bank_curr_code, &other.bank_curr_code),
            "account_code" => cmp_text(&self.account_code, &other.account_code),
            "bank_account_number" => cmp_text(&self.bank_account_number, &other.bank_account_number),
            _ => cmp_text(&self.bank_account_name, &other.bank_account_name),
        }
    }
}

#[component]
pub fn BankAccountList() -> impl IntoView {
    let state = ListState::new("bank_account_name");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let gl_accounts = name_index(
        use_reference_list(a003_gl_account::api::fetch_all),
        |a| (a.account_code.clone(), a.code_and_name()),
    );
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<i32>| {
        modal_stack.open_form(move |close| {
            view! { <BankAccountDetails id=id on_saved=close on_cancel=close /> }.into_any()
        });
    };

    let delete = move |account: BankAccount| {
        let id = account.id;
        mutator.feedback().confirm_delete(
            BankAccount::element_name(),
            &account.display_name(),
            move || {
                mutator.run(
                    async move { api::delete(id).await },
                    OutcomeText::deleted::<BankAccount>(),
                    &[BankAccount::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<BankAccount>();
    };

    view! {
        <PageFrame page_id="a004_bank_account--list" category=PAGE_CAT_LIST>
            <PageHeader title=BankAccount::list_name() tab_key=BankAccount::full_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                    {icon("plus")}
                    " New"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=refresh
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListToolbar
                    search=state.search
                    on_search=state.on_search()
                    show_inactive=state.show_inactive
                    placeholder="Search by name, number or bank"
                >
                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || page.with(|p| p.total_count()))
                        page_size=state.page_size
                        on_page_change=state.on_page_change()
                        on_page_size_change=state.on_page_size_change()
                    />
                </ListToolbar>

                {move || query.error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Account Name" sort_field="bank_account_name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Type" sort_field="account_type" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Currency" sort_field="bank_curr_code" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="GL Account" sort_field="account_code" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>"Bank"</TableHeaderCell>
                            <SortableHeaderCell label="Number" sort_field="bank_account_number" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>"Default"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            let gl_accounts = gl_accounts.get();
                            page.get().rows.into_iter().map(|account| {
                                let id = account.id;
                                let gl_account = gl_accounts.name_of(&account.account_code);
                                let for_delete = account.clone();
                                let bank_account_name_view = highlight_matches(&account.bank_account_name, &search);
                                let type_label = account.type_label();
                                let bank_curr_code_view = highlight_matches(&account.bank_curr_code, &search);
                                let bank_name_view = highlight_matches(&account.bank_name, &search);
                                let bank_account_number_view = highlight_matches(&account.bank_account_number, &search);
                                let dflt_curr_act = if account.dflt_curr_act { "Yes" } else { "" };
                                let inactive = account.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id));
                                                }>
                                                    {bank_account_name_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{type_label}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>{bank_curr_code_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{gl_account}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>{bank_name_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{bank_account_number_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{dflt_curr_act}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            {inactive.then(|| view! {
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Inactive"</Badge>
                                            })}
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| delete(for_delete.clone())
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()
                        }}
                    </TableBody>
                </Table>

                <Show when=move || query.loading.get()>
                    <Spinner />
                </Show>
            </div>
        </PageFrame>
    }
}
