use crate::domain::a006_customer::api;
use crate::domain::a013_sales_type;
use crate::domain::a016_payment_term;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key};
use crate::shared::components::{
    ListToolbar, PageHeader, PaginationControls, SortableHeaderCell, TableCellMoney,
    TableTotalsRow,
};
use crate::shared::components::table::number_format::format_money;
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{
    cmp_f64, cmp_text, filter_inactive, highlight_matches, Searchable, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::{name_index, use_collection, use_reference_list};
use contracts::domain::a006_customer::Customer;
use contracts::domain::common::AggregateRoot;
use contracts::shared::money;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.debtor_ref.clone(),
            self.tax_id.clone(),
            self.phone.clone(),
            self.email.clone(),
        ]
    }
}

impl Sortable for Customer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "debtor_ref" => cmp_text(&self.debtor_ref, &other.debtor_ref),
            "curr_code" => cmp_text(&self.curr_code, &other.curr_code),
            "credit_limit" => cmp_f64(self.credit_limit, other.credit_limit),
            "debtor_no" => self.debtor_no.cmp(&other.debtor_no),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let state = ListState::new("name");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let sales_types = name_index(
        use_reference_list(a013_sales_type::api::fetch_all),
        |t| (t.id.to_string(), t.sales_type.clone()),
    );
    let terms = name_index(
        use_reference_list(a016_payment_term::api::fetch_all),
        |t| (t.terms_indicator.to_string(), t.terms.clone()),
    );
    let tabs = use_app_context();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });
    let credit_total = Memo::new(move |_| {
        page.with(|p| money::sum(p.filtered.iter().map(|c| c.credit_limit)))
    });

    let open_details = move |id: Option<i32>| {
        let key = detail_tab_key::<Customer>(id.as_ref());
        tabs.open_tab(&key, &tab_label_for_key(&key));
    };

    let delete = move |customer: Customer| {
        let id = customer.debtor_no;
        mutator.feedback().confirm_delete(
            Customer::element_name(),
            &customer.display_name(),
            move || {
                mutator.run(
                    async move { api::delete(id).await },
                    OutcomeText::deleted::<Customer>(),
                    &[Customer::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<Customer>();
    };

    view! {
        <PageFrame page_id="a006_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title=Customer::list_name() tab_key=Customer::full_name()>
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
                    placeholder="Search by name, short name, tax ID or contact"
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
                            <SortableHeaderCell label="Customer Name" sort_field="name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Short Name" sort_field="debtor_ref" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Currency" sort_field="curr_code" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>"Sales Type"</TableHeaderCell>
                            <TableHeaderCell>"Payment Terms"</TableHeaderCell>
                            <SortableHeaderCell label="Credit Limit" sort_field="credit_limit" current_sort_field=state.sort_field sort_ascending=state.sort_ascending align_right=true />
                            <TableHeaderCell>"Phone"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            let sales_types = sales_types.get();
                            let terms = terms.get();
                            page.get().rows.into_iter().map(|customer| {
                                let id = customer.debtor_no;
                                let sales_type = sales_types.name_of(&customer.sales_type.to_string());
                                let payment_terms = terms.name_of(&customer.payment_terms.to_string());
                                let for_delete = customer.clone();
                                let name_view = highlight_matches(&customer.name, &search);
                                let debtor_ref_view = highlight_matches(&customer.debtor_ref, &search);
                                let curr_code = customer.curr_code.clone();
                                let phone_view = highlight_matches(&customer.phone, &search);
                                let inactive = customer.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id));
                                                }>
                                                    {name_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{debtor_ref_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{curr_code}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{sales_type}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{payment_terms}</TableCellLayout></TableCell>
                                        <TableCellMoney value=Signal::stored(Some(customer.credit_limit)) />
                                        <TableCell>
                                            <TableCellLayout>{phone_view}</TableCellLayout>
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
                    <tfoot>
                        <TableTotalsRow
                            label=Signal::derive(move || format!("Customers: {}", page.with(|p| p.total_count())))
                            span=5
                        >
                            <td class="text-right">{move || format_money(credit_total.get())}</td>
                            <td colspan="3"></td>
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
