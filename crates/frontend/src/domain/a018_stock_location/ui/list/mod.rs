use crate::domain::a018_stock_location::api;
use crate::domain::a018_stock_location::ui::details::StockLocationDetails;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, filter_inactive, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::use_collection;
use contracts::domain::a018_stock_location::StockLocation;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for StockLocation {
    fn search_fields(&self) -> Vec<String> {
        vec![self.loc_code.clone(), self.location_name.clone(), self.contact.clone()]
    }
}

impl Sortable for StockLocation {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "location_name" => cmp_text(&self.location_name, &other.location_name),
            "contact" => cmp_text(&self.contact, &other.contact),
            "phone" => cmp_text(&self.phone, &other.phone),
            _ => cmp_text(&self.loc_code, &other.loc_code),
        }
    }
}

#[component]
pub fn StockLocationList() -> impl IntoView {
    let state = ListState::new("loc_code");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<String>| {
        modal_stack.open_form(move |close| {
            view! { <StockLocationDetails id=id.clone() on_saved=close on_cancel=close /> }.into_any()
        });
    };

    let delete = move |location: StockLocation| {
        let id = location.loc_code.clone();
        mutator.feedback().confirm_delete(
            StockLocation::element_name(),
            &location.display_name(),
            move || {
                let id = id.clone();
                mutator.run(
                    async move { api::delete(&id).await },
                    OutcomeText::deleted::<StockLocation>(),
                    &[StockLocation::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<StockLocation>();
    };

    view! {
        <PageFrame page_id="a018_stock_location--list" category=PAGE_CAT_LIST>
            <PageHeader title=StockLocation::list_name() tab_key=StockLocation::full_name()>
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
                    placeholder="Search by code, name or contact..."
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
                            <SortableHeaderCell label="Code" sort_field="loc_code" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Name" sort_field="location_name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Contact" sort_field="contact" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Phone" sort_field="phone" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>"Address"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            page.get().rows.into_iter().map(|location| {
                                let id = location.loc_code.clone();
                                let for_delete = location.clone();
                                let loc_code_view = highlight_matches(&location.loc_code, &search);
                                let location_name_view = highlight_matches(&location.location_name, &search);
                                let contact_view = highlight_matches(&location.contact, &search);
                                let phone = location.phone.clone();
                                let delivery_address = location.delivery_address.clone();
                                let inactive = location.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id.clone()));
                                                }>
                                                    {loc_code_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{location_name_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{contact_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{phone}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{delivery_address}</TableCellLayout></TableCell>
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
