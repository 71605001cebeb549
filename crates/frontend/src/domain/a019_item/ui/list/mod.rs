use crate::domain::a008_item_category;
use crate::domain::a019_item::api;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key};
use crate::shared::components::{
    ListToolbar, PageHeader, PaginationControls, SortableHeaderCell, TableCellMoney,
};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{
    cmp_f64, cmp_text, filter_inactive, highlight_matches, Searchable, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::{name_index, use_collection, use_reference_list};
use contracts::domain::a008_item_category::mb_flag_label;
use contracts::domain::a019_item::Item;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for Item {
    fn search_fields(&self) -> Vec<String> {
        vec![self.stock_id.clone(), self.description.clone(), self.long_description.clone()]
    }
}

impl Sortable for Item {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => cmp_text(&self.description, &other.description),
            "category_id" => self.category_id.cmp(&other.category_id),
            "units" => cmp_text(&self.units, &other.units),
            "mb_flag" => cmp_text(mb_flag_label(&self.mb_flag), mb_flag_label(&other.mb_flag)),
            "material_cost" => cmp_f64(self.material_cost, other.material_cost),
            _ => cmp_text(&self.stock_id, &other.stock_id),
        }
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let state = ListState::new("stock_id");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let categories = name_index(
        use_reference_list(a008_item_category::api::fetch_all),
        |c| (c.category_id.to_string(), c.description.clone()),
    );
    let tabs = use_app_context();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<String>| {
        let key = detail_tab_key::<Item>(id.as_ref());
        tabs.open_tab(&key, &tab_label_for_key(&key));
    };

    let delete = move |item: Item| {
        let id = item.stock_id.clone();
        mutator.feedback().confirm_delete(
            Item::element_name(),
            &item.display_name(),
            move || {
                let id = id.clone();
                mutator.run(
                    async move { api::delete(&id).await },
                    OutcomeText::deleted::<Item>(),
                    &[Item::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<Item>();
    };

    view! {
        <PageFrame page_id="a019_item--list" category=PAGE_CAT_LIST>
            <PageHeader title=Item::list_name() tab_key=Item::full_name()>
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
                    placeholder="Search by code or name..."
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
                            <SortableHeaderCell label="Item Code" sort_field="stock_id" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Name" sort_field="description" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Category" sort_field="category_id" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Units" sort_field="units" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Type" sort_field="mb_flag" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Standard Cost" sort_field="material_cost" current_sort_field=state.sort_field sort_ascending=state.sort_ascending align_right=true />
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            let categories = categories.get();
                            page.get().rows.into_iter().map(|item| {
                                let id = item.stock_id.clone();
                                let category = categories.name_of(&item.category_id.to_string());
                                let for_delete = item.clone();
                                let stock_id_view = highlight_matches(&item.stock_id, &search);
                                let description_view = highlight_matches(&item.description, &search);
                                let units = item.units.clone();
                                let mb_flag = mb_flag_label(&item.mb_flag);
                                let inactive = item.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id.clone()));
                                                }>
                                                    {stock_id_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{description_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{category}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{units}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{mb_flag}</TableCellLayout></TableCell>
                                        <TableCellMoney value=Signal::stored(Some(item.material_cost)) />
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
