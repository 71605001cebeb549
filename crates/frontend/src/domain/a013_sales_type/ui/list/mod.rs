use crate::domain::a013_sales_type::api;
use crate::domain::a013_sales_type::ui::details::SalesTypeDetails;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::form::number_text;
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{
    cmp_f64, cmp_text, filter_inactive, highlight_matches, Searchable, Sortable,
};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::use_collection;
use contracts::domain::a013_sales_type::SalesType;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for SalesType {
    fn search_fields(&self) -> Vec<String> {
        vec![self.sales_type.clone()]
    }
}

impl Sortable for SalesType {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "factor" => cmp_f64(self.factor, other.factor),
            "tax_included" => self.tax_included.cmp(&other.tax_included),
            _ => cmp_text(&self.sales_type, &other.sales_type),
        }
    }
}

#[component]
pub fn SalesTypeList() -> impl IntoView {
    let state = ListState::new("sales_type");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<i32>| {
        modal_stack.open_form(move |close| {
            view! { <SalesTypeDetails id=id on_saved=close on_cancel=close /> }.into_any()
        });
    };

    let delete = move |sales_type: SalesType| {
        let id = sales_type.id;
        mutator.feedback().confirm_delete(
            SalesType::element_name(),
            &sales_type.display_name(),
            move || {
                mutator.run(
                    async move { api::delete(id).await },
                    OutcomeText::deleted::<SalesType>(),
                    &[SalesType::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<SalesType>();
    };

    view! {
        <PageFrame page_id="a013_sales_type--list" category=PAGE_CAT_LIST>
            <PageHeader title=SalesType::list_name() tab_key=SalesType::full_name()>
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
                    placeholder="Search by name..."
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
                            <SortableHeaderCell label="Type Name" sort_field="sales_type" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Factor" sort_field="factor" current_sort_field=state.sort_field sort_ascending=state.sort_ascending align_right=true />
                            <SortableHeaderCell label="Tax Incl." sort_field="tax_included" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            page.get().rows.into_iter().map(|sales_type| {
                                let id = sales_type.id;
                                let for_delete = sales_type.clone();
                                let sales_type_view = highlight_matches(&sales_type.sales_type, &search);
                                let factor = number_text(sales_type.factor);
                                let tax_included = if sales_type.tax_included { "Yes" } else { "No" };
                                let inactive = sales_type.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id));
                                                }>
                                                    {sales_type_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">{factor}</TableCell>
                                        <TableCell><TableCellLayout>{tax_included}</TableCellLayout></TableCell>
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
