use crate::domain::a015_fiscal_year::api;
use crate::domain::a015_fiscal_year::ui::details::FiscalYearDetails;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::date_utils::format_date;
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{filter_inactive, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::use_collection;
use contracts::domain::a015_fiscal_year::FiscalYear;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for FiscalYear {
    fn search_fields(&self) -> Vec<String> {
        vec![self.label(), format_date(&self.begin), format_date(&self.end)]
    }
}

impl Sortable for FiscalYear {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "end" => self.end.cmp(&other.end),
            "closed" => self.closed.cmp(&other.closed),
            _ => self.begin.cmp(&other.begin),
        }
    }
}

#[component]
pub fn FiscalYearList() -> impl IntoView {
    let state = ListState::new("begin");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<i32>| {
        modal_stack.open_form(move |close| {
            view! { <FiscalYearDetails id=id on_saved=close on_cancel=close /> }.into_any()
        });
    };

    let delete = move |year: FiscalYear| {
        let id = year.id;
        mutator.feedback().confirm_delete(
            FiscalYear::element_name(),
            &year.display_name(),
            move || {
                mutator.run(
                    async move { api::delete(id).await },
                    OutcomeText::deleted::<FiscalYear>(),
                    &[FiscalYear::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<FiscalYear>();
    };

    view! {
        <PageFrame page_id="a015_fiscal_year--list" category=PAGE_CAT_LIST>
            <PageHeader title=FiscalYear::list_name() tab_key=FiscalYear::full_name()>
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
                    placeholder="Search by year or date..."
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
                            <SortableHeaderCell label="Begin" sort_field="begin" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="End" sort_field="end" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>"Year"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            page.get().rows.into_iter().map(|year| {
                                let id = year.id;
                                let for_delete = year.clone();
                                let begin_view = highlight_matches(&format_date(&year.begin), &search);
                                let end_view = highlight_matches(&format_date(&year.end), &search);
                                let label_view = highlight_matches(&year.label(), &search);
                                let closed = year.closed;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id));
                                                }>
                                                    {begin_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{end_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{label_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            {closed.then(|| view! {
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Closed"</Badge>
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
