use crate::domain::a009_item_unit::api;
use crate::domain::a009_item_unit::ui::details::ItemUnitDetails;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, filter_inactive, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::use_collection;
use contracts::domain::a009_item_unit::ItemUnit;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for ItemUnit {
    fn search_fields(&self) -> Vec<String> {
        vec![self.abbr.clone(), self.name.clone()]
    }
}

impl Sortable for ItemUnit {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "decimals" => self.decimals.cmp(&other.decimals),
            _ => cmp_text(&self.abbr, &other.abbr),
        }
    }
}

#[component]
pub fn ItemUnitList() -> impl IntoView {
    let state = ListState::new("abbr");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<String>| {
        modal_stack.open_form(move |close| {
            view! { <ItemUnitDetails id=id.clone() on_saved=close on_cancel=close /> }.into_any()
        });
    };

    let delete = move |unit: ItemUnit| {
        let id = unit.abbr.clone();
        mutator.feedback().confirm_delete(
            ItemUnit::element_name(),
            &unit.display_name(),
            move || {
                let id = id.clone();
                mutator.run(
                    async move { api::delete(&id).await },
                    OutcomeText::deleted::<ItemUnit>(),
                    &[ItemUnit::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<ItemUnit>();
    };

    view! {
        <PageFrame page_id="a009_item_unit--list" category=PAGE_CAT_LIST>
            <PageHeader title=ItemUnit::list_name() tab_key=ItemUnit::full_name()>
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
                    placeholder="Search by abbreviation or name..."
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
                            <SortableHeaderCell label="Unit" sort_field="abbr" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Name" sort_field="name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Decimals" sort_field="decimals" current_sort_field=state.sort_field sort_ascending=state.sort_ascending align_right=true />
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            page.get().rows.into_iter().map(|unit| {
                                let id = unit.abbr.clone();
                                let for_delete = unit.clone();
                                let abbr_view = highlight_matches(&unit.abbr, &search);
                                let name_view = highlight_matches(&unit.name, &search);
                                let decimals = unit.decimals;
                                let inactive = unit.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id.clone()));
                                                }>
                                                    {abbr_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{name_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">{decimals}</TableCell>
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
