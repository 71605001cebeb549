use crate::domain::a008_item_category::api;
use crate::domain::a008_item_category::ui::details::ItemCategoryDetails;
use crate::domain::a009_item_unit;
use crate::domain::a017_tax_group;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, filter_inactive, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::{name_index, use_collection, use_reference_list};
use contracts::domain::a008_item_category::{mb_flag_label, ItemCategory};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for ItemCategory {
    fn search_fields(&self) -> Vec<String> {
        vec![self.description.clone(), self.dflt_units.clone()]
    }
}

impl Sortable for ItemCategory {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "dflt_units" => cmp_text(&self.dflt_units, &other.dflt_units),
            "dflt_mb_flag" => cmp_text(mb_flag_label(&self.dflt_mb_flag), mb_flag_label(&other.dflt_mb_flag)),
            "dflt_tax_type" => self.dflt_tax_type.cmp(&other.dflt_tax_type),
            _ => cmp_text(&self.description, &other.description),
        }
    }
}

#[component]
pub fn ItemCategoryList() -> impl IntoView {
    let state = ListState::new("description");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let units = name_index(use_reference_list(a009_item_unit::api::fetch_all), |u| {
        (u.abbr.clone(), u.name.clone())
    });
    let tax_groups = name_index(use_reference_list(a017_tax_group::api::fetch_all), |g| {
        (g.id.to_string(), g.name.clone())
    });
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<i32>| {
        modal_stack.open_form(move |close| {
            view! { <ItemCategoryDetails id=id on_saved=close on_cancel=close /> }.into_any()
        });
    };

    let delete = move |category: ItemCategory| {
        let id = category.category_id;
        mutator.feedback().confirm_delete(
            ItemCategory::element_name(),
            &category.display_name(),
            move || {
                mutator.run(
                    async move { api::delete(id).await },
                    OutcomeText::deleted::<ItemCategory>(),
                    &[ItemCategory::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<ItemCategory>();
    };

    view! {
        <PageFrame page_id="a008_item_category--list" category=PAGE_CAT_LIST>
            <PageHeader title=ItemCategory::list_name() tab_key=ItemCategory::full_name()>
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
                    placeholder="Search by name or unit..."
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
                            <SortableHeaderCell label="Name" sort_field="description" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Tax Type" sort_field="dflt_tax_type" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Units" sort_field="dflt_units" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Item Type" sort_field="dflt_mb_flag" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>"Sales"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            let units = units.get();
                            let tax_groups = tax_groups.get();
                            page.get().rows.into_iter().map(|category| {
                                let id = category.category_id;
                                let unit_name = units.name_of(&category.dflt_units);
                                let tax_group = tax_groups.name_of(&category.dflt_tax_type.to_string());
                                let for_delete = category.clone();
                                let description_view = highlight_matches(&category.description, &search);
                                let mb_flag = mb_flag_label(&category.dflt_mb_flag);
                                let dflt_no_sale = if category.dflt_no_sale { "Excluded" } else { "" };
                                let inactive = category.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id));
                                                }>
                                                    {description_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{tax_group}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{unit_name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{mb_flag}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{dflt_no_sale}</TableCellLayout></TableCell>
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
