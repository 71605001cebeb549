use crate::domain::a006_customer;
use crate::domain::a007_sales_order::api;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key};
use crate::shared::components::{
    ListToolbar, PageHeader, PaginationControls, SortableHeaderCell, TableCellMoney,
    TableTotalsRow,
};
use crate::shared::components::table::number_format::format_money;
use crate::shared::date_utils::format_date;
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_f64, cmp_text, highlight_matches, Searchable, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::{name_index, use_collection, use_reference_list};
use contracts::domain::a007_sales_order::SalesOrder;
use contracts::domain::common::AggregateRoot;
use contracts::shared::money;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for SalesOrder {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.order_no.to_string(),
            self.reference.clone(),
            self.customer_ref.clone(),
            self.deliver_to.clone(),
        ]
    }
}

impl Sortable for SalesOrder {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "reference" => cmp_text(&self.reference, &other.reference),
            "customer_ref" => cmp_text(&self.customer_ref, &other.customer_ref),
            "ord_date" => self.ord_date.cmp(&other.ord_date),
            "delivery_date" => self.delivery_date.cmp(&other.delivery_date),
            "total" => cmp_f64(self.total, other.total),
            _ => self.order_no.cmp(&other.order_no),
        }
    }
}

/// Badge of an order: quote, fully delivered or paid.
fn order_status(order: &SalesOrder) -> Option<(&'static str, BadgeColor)> {
    if order.is_quote() {
        Some(("Quote", BadgeColor::Informative))
    } else if order.total > 0.0 && order.outstanding() == 0.0 {
        Some(("Paid", BadgeColor::Success))
    } else if order.is_delivered() {
        Some(("Delivered", BadgeColor::Brand))
    } else {
        None
    }
}

#[component]
pub fn SalesOrderList() -> impl IntoView {
    let state = ListState::new("order_no");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let customers = name_index(
        use_reference_list(a006_customer::api::fetch_all),
        |c| (c.debtor_no.to_string(), c.name.clone()),
    );
    let tabs = use_app_context();
    let mutator = use_mutator();

    let page = Memo::new(move |_| state.view(query.get_or(Vec::new())));
    let order_total = Memo::new(move |_| {
        page.with(|p| money::sum(p.filtered.iter().map(|o| o.total)))
    });

    let open_details = move |id: Option<i32>| {
        let key = detail_tab_key::<SalesOrder>(id.as_ref());
        tabs.open_tab(&key, &tab_label_for_key(&key));
    };

    let delete = move |order: SalesOrder| {
        let id = order.order_no;
        mutator.feedback().confirm_delete(
            SalesOrder::element_name(),
            &order.display_name(),
            move || {
                mutator.run(
                    async move { api::delete(id).await },
                    OutcomeText::deleted::<SalesOrder>(),
                    &[SalesOrder::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<SalesOrder>();
    };

    view! {
        <PageFrame page_id="a007_sales_order--list" category=PAGE_CAT_LIST>
            <PageHeader title=SalesOrder::list_name() tab_key=SalesOrder::full_name()>
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
                    placeholder="Search by number, reference or delivery name"
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
                            <SortableHeaderCell label="Order #" sort_field="order_no" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Reference" sort_field="reference" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>"Customer"</TableHeaderCell>
                            <SortableHeaderCell label="Cust Order Ref" sort_field="customer_ref" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Order Date" sort_field="ord_date" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Required By" sort_field="delivery_date" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Order Total" sort_field="total" current_sort_field=state.sort_field sort_ascending=state.sort_ascending align_right=true />
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            let customers = customers.get();
                            page.get().rows.into_iter().map(|order| {
                                let id = order.order_no;
                                let customer = customers.name_of(&order.debtor_no.to_string());
                                let status = order_status(&order);
                                let for_delete = order.clone();
                                let order_no_view = highlight_matches(&order.order_no.to_string(), &search);
                                let reference_view = highlight_matches(&order.reference, &search);
                                let customer_ref_view = highlight_matches(&order.customer_ref, &search);
                                let ord_date = format_date(&order.ord_date);
                                let delivery_date = format_date(&order.delivery_date);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id));
                                                }>
                                                    {order_no_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{reference_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{customer}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>{customer_ref_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{ord_date}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{delivery_date}</TableCellLayout></TableCell>
                                        <TableCellMoney value=Signal::stored(Some(order.total)) />
                                        <TableCell>
                                            {status.map(|(label, color)| view! {
                                                <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
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
                    <tfoot>
                        <TableTotalsRow
                            label=Signal::derive(move || format!("Orders: {}", page.with(|p| p.total_count())))
                            span=6
                        >
                            <td class="text-right">{move || format_money(order_total.get())}</td>
                            <td colspan="2"></td>
                        </TableTotalsRow>
                    </tfoot>
                </Table>

                <Show when=move || query.loading.get()>
                    <Spinner />
                </Show>
            </div>
        </PageFrame>
    }
}
