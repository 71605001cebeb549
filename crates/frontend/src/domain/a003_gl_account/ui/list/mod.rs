use crate::domain::a002_gl_account_type;
use crate::domain::a003_gl_account::api;
use crate::domain::a003_gl_account::ui::details::GlAccountDetails;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, filter_inactive, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::{name_index, use_collection, use_reference_list};
use contracts::domain::a003_gl_account::GlAccount;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for GlAccount {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.account_code.clone(),
            self.account_code2.clone(),
            self.account_name.clone(),
        ]
    }
}

impl Sortable for GlAccount {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "account_name" => cmp_text(&self.account_name, &other.account_name),
            "account_type" => cmp_text(&self.account_type, &other.account_type),
            _ => cmp_text(&self.account_code, &other.account_code),
        }
    }
}

#[component]
pub fn GlAccountList() -> impl IntoView {
    let state = ListState::new("account_code");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let groups = name_index(
        use_reference_list(a002_gl_account_type::api::fetch_all),
        |g| (g.id.clone(), g.name.clone()),
    );
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<String>| {
        modal_stack.open_form(move |close| {
            view! { <GlAccountDetails id=id.clone() on_saved=close on_cancel=close /> }
                .into_any()
        });
    };

    let delete = move |account: GlAccount| {
        let id = account.account_code.clone();
        mutator.feedback().confirm_delete(
            GlAccount::element_name(),
            &account.display_name(),
            move || {
                let id = id.clone();
                mutator.run(
                    async move { api::delete(&id).await },
                    OutcomeText::deleted::<GlAccount>(),
                    &[GlAccount::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<GlAccount>();
    };

    view! {
        <PageFrame page_id="a003_gl_account--list" category=PAGE_CAT_LIST>
            <PageHeader title=GlAccount::list_name() tab_key=GlAccount::full_name()>
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
                    placeholder="Search by code or name"
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
                            <SortableHeaderCell label="Account Code" sort_field="account_code" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Account Name" sort_field="account_name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Account Group" sort_field="account_type" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            let groups = groups.get();
                            page.get().rows.into_iter().map(|account| {
                                let code = account.account_code.clone();
                                let group_name = groups.name_of(&account.account_type);
                                let for_delete = account.clone();
                                let account_code_view = highlight_matches(&account.account_code, &search);
                                let account_name_view = highlight_matches(&account.account_name, &search);
                                let inactive = account.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(code.clone()));
                                                }>
                                                    {account_code_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{account_name_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{group_name}</TableCellLayout></TableCell>
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
