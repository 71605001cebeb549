use crate::domain::a006_customer;
use crate::domain::a011_sales_group;
use crate::domain::a014_recurrent_invoice::api;
use crate::domain::a014_recurrent_invoice::ui::details::RecurrentInvoiceDetails;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::date_utils::{format_date, format_opt_date, today};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::{name_index, use_collection, use_reference_list};
use contracts::domain::a014_recurrent_invoice::RecurrentInvoice;
use contracts::domain::common::AggregateRoot;
use contracts::shared::lookup::NameIndex;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for RecurrentInvoice {
    fn search_fields(&self) -> Vec<String> {
        vec![self.description.clone(), self.order_no.to_string()]
    }
}

impl Sortable for RecurrentInvoice {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_no" => self.order_no.cmp(&other.order_no),
            "begin" => self.begin.cmp(&other.begin),
            "end" => self.end.cmp(&other.end),
            "last_sent" => self.last_sent.cmp(&other.last_sent),
            "next_due" => self.next_due().cmp(&other.next_due()),
            _ => cmp_text(&self.description, &other.description),
        }
    }
}

/// Customer name, or the sales group the invoice is sent to.
fn charged_to(invoice: &RecurrentInvoice, customers: &NameIndex, groups: &NameIndex) -> String {
    match (invoice.debtor_no, invoice.group_no) {
        (Some(debtor_no), _) => customers.name_of(&debtor_no.to_string()),
        (None, Some(group_no)) => format!("Group: {}", groups.name_of(&group_no.to_string())),
        (None, None) => String::new(),
    }
}

#[component]
pub fn RecurrentInvoiceList() -> impl IntoView {
    let state = ListState::new("description");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let customers = name_index(
        use_reference_list(a006_customer::api::fetch_all),
        |c| (c.debtor_no.to_string(), c.name.clone()),
    );
    let groups = name_index(
        use_reference_list(a011_sales_group::api::fetch_all),
        |g| (g.id.to_string(), g.description.clone()),
    );
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| state.view(query.get_or(Vec::new())));

    let open_details = move |id: Option<i32>| {
        modal_stack.open_form(move |close| {
            view! { <RecurrentInvoiceDetails id=id on_saved=close on_cancel=close /> }.into_any()
        });
    };

    let delete = move |invoice: RecurrentInvoice| {
        let id = invoice.id;
        mutator.feedback().confirm_delete(
            RecurrentInvoice::element_name(),
            &invoice.display_name(),
            move || {
                mutator.run(
                    async move { api::delete(id).await },
                    OutcomeText::deleted::<RecurrentInvoice>(),
                    &[RecurrentInvoice::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<RecurrentInvoice>();
    };

    view! {
        <PageFrame page_id="a014_recurrent_invoice--list" category=PAGE_CAT_LIST>
            <PageHeader title=RecurrentInvoice::list_name() tab_key=RecurrentInvoice::full_name()>
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
                    placeholder="Search by description or order..."
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
                            <SortableHeaderCell label="Description" sort_field="description" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Template" sort_field="order_no" current_sort_field=state.sort_field sort_ascending=state.sort_ascending align_right=true />
                            <TableHeaderCell>"Customer / Group"</TableHeaderCell>
                            <SortableHeaderCell label="Begin" sort_field="begin" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="End" sort_field="end" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Last Sent" sort_field="last_sent" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Next Due" sort_field="next_due" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            let customers = customers.get();
                            let groups = groups.get();
                            let today = today();
                            page.get().rows.into_iter().map(|invoice| {
                                let id = invoice.id;
                                let target = charged_to(&invoice, &customers, &groups);
                                let next_due = format_opt_date(invoice.next_due().as_ref());
                                let is_due = invoice.is_due(today);
                                let for_delete = invoice.clone();
                                let description_view = highlight_matches(&invoice.description, &search);
                                let order_no = invoice.order_no;
                                let begin = format_date(&invoice.begin);
                                let end = format_date(&invoice.end);
                                let last_sent = format_opt_date(invoice.last_sent.as_ref());
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
                                        <TableCell class="text-right">{order_no}</TableCell>
                                        <TableCell><TableCellLayout>{target}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{begin}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{end}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{last_sent}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{next_due}</TableCellLayout></TableCell>
                                        <TableCell>
                                            {is_due.then(|| view! {
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Due"</Badge>
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn invoice(debtor_no: Option<i32>, group_no: Option<i32>) -> RecurrentInvoice {
        RecurrentInvoice {
            description: "Hosting".into(),
            order_no: 7,
            debtor_no,
            group_no,
            ..RecurrentInvoice::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        }
    }

    #[test]
    fn test_charged_to_prefers_customer() {
        let customers = NameIndex::from_pairs([(3, "Acme Ltd")]);
        let groups = NameIndex::from_pairs([(2, "Small")]);

        assert_eq!(charged_to(&invoice(Some(3), None), &customers, &groups), "Acme Ltd");
        assert_eq!(charged_to(&invoice(None, Some(2)), &customers, &groups), "Group: Small");
        assert_eq!(charged_to(&invoice(Some(9), None), &customers, &groups), "9");
        assert_eq!(charged_to(&invoice(None, None), &customers, &groups), "");
    }
}
