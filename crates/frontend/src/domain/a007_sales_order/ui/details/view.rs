use super::view_model::{set_line_item, LineRow, SalesOrderDetailsVm};
use crate::domain::a006_customer;
use crate::domain::a007_sales_order::api;
use crate::domain::a013_sales_type;
use crate::domain::a016_payment_term;
use crate::domain::a018_stock_location;
use crate::domain::a019_item;
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::{select_options, DateInput, DetailsShell, FieldError, FormField};
use crate::shared::date_utils::today;
use crate::shared::form::{load_failure, number_text, parse_number, FormState, OutcomeText};
use crate::shared::icons::icon;
use contracts::domain::a006_customer::Customer;
use contracts::domain::a007_sales_order::SalesOrder;
use contracts::domain::a013_sales_type::SalesType;
use contracts::domain::a016_payment_term::PaymentTerm;
use contracts::domain::a018_stock_location::StockLocation;
use contracts::domain::a019_item::Item;
use contracts::domain::common::AggregateRoot;
use contracts::shared::reference::next_after;
use futures_util::future::{try_join, try_join5};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SalesOrderDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let vm = SalesOrderDetailsVm::new();
    let form = FormState::new();
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let version = RwSignal::new(0);

    let customers = RwSignal::new(Vec::<Customer>::new());
    let items = RwSignal::new(Vec::<Item>::new());
    let locations = RwSignal::new(Vec::<StockLocation>::new());
    let sales_types = RwSignal::new(Vec::<SalesType>::new());
    let payment_terms = RwSignal::new(Vec::<PaymentTerm>::new());

    spawn_local(async move {
        let references = try_join5(
            a006_customer::api::fetch_all(false),
            a019_item::api::fetch_all(false),
            a018_stock_location::api::fetch_all(false),
            a013_sales_type::api::fetch_all(false),
            a016_payment_term::api::fetch_all(false),
        );
        let loaded = match id {
            Some(id) => try_join(api::fetch_by_id(id), references).await,
            None => try_join(api::fetch_all(false), references)
                .await
                .map(|(orders, refs)| {
                    let mut order = SalesOrder::new(today());
                    order.reference = next_after(orders.iter().map(|o| o.reference.as_str()));
                    if let Some(first) = refs.2.first() {
                        order.from_stk_loc = first.loc_code.clone();
                    }
                    (order, refs)
                }),
        };
        match loaded {
            Ok((order, (customer_list, item_list, location_list, type_list, term_list))) => {
                customers.set(customer_list);
                items.set(item_list);
                locations.set(location_list);
                sales_types.set(type_list);
                payment_terms.set(term_list);
                version.set(order.version);
                vm.apply(order);
            }
            Err(e) => load_error.set(Some(load_failure(&e, SalesOrder::element_name()))),
        }
        loading.set(false);
    });

    // picking a customer on a new order brings in its price list and contact
    Effect::new(move |prev: Option<String>| {
        let debtor = vm.debtor_no.get();
        if is_new && prev.as_ref().is_some_and(|p| *p != debtor) {
            let customer = customers.with_untracked(|list| {
                list.iter()
                    .find(|c| c.debtor_no.to_string() == debtor)
                    .cloned()
            });
            if let Some(customer) = customer {
                vm.apply_customer(&customer);
            }
        }
        debtor
    });

    let submit = Callback::new(move |_| {
        let order = vm.build();
        if !form.validate(&order) {
            return;
        }
        let request = async move {
            match id {
                None => api::create(&order).await,
                Some(id) => api::update(id, &order).await,
            }
        };
        form.submit(
            request,
            OutcomeText::saved::<SalesOrder>(is_new),
            &[SalesOrder::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", SalesOrder::element_name())
        } else {
            format!("{} {}", SalesOrder::element_name(), vm.reference.get())
        }
    });
    let errors = form.errors_signal();

    let line_view = move |row: LineRow| {
        let key = row.key;
        let line = row.line;
        let stk_code = line.stk_code.clone();
        let on_item = move |ev: leptos::ev::Event| {
            let code = event_target_value(&ev);
            let item = items.with_untracked(|list| list.iter().find(|i| i.stock_id == code).cloned());
            vm.update_line(key, |l| set_line_item(l, item.as_ref()));
        };
        view! {
            <TableRow>
                <TableCell>
                    <select class="line-input" on:change=on_item>
                        {move || {
                            let pairs = items
                                .get()
                                .into_iter()
                                .map(|i| (i.stock_id.clone(), format!("{} {}", i.stock_id, i.description)))
                                .collect();
                            select_options("— Select item —", pairs, &stk_code)
                        }}
                    </select>
                </TableCell>
                <TableCell>
                    <input
                        class="line-input"
                        prop:value=line.description.clone()
                        on:change=move |ev| {
                            let text = event_target_value(&ev);
                            vm.update_line(key, |l| l.description = text);
                        }
                    />
                </TableCell>
                <TableCell>
                    <input
                        class="line-input line-input--number"
                        prop:value=number_text(line.quantity)
                        on:change=move |ev| {
                            let value = parse_number(&event_target_value(&ev));
                            vm.update_line(key, |l| l.quantity = value);
                        }
                    />
                </TableCell>
                <TableCell>
                    <input
                        class="line-input line-input--number"
                        prop:value=number_text(line.unit_price)
                        on:change=move |ev| {
                            let value = parse_number(&event_target_value(&ev));
                            vm.update_line(key, |l| l.unit_price = value);
                        }
                    />
                </TableCell>
                <TableCell>
                    <input
                        class="line-input line-input--number"
                        prop:value=number_text(line.discount_percent)
                        on:change=move |ev| {
                            let value = parse_number(&event_target_value(&ev));
                            vm.update_line(key, |l| l.discount_percent = value);
                        }
                    />
                </TableCell>
                <TableCell class="text-right">{move || format_money(vm.line_total(key))}</TableCell>
                <TableCell>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| vm.remove_line(key)
                    >
                        {icon("x")}
                    </Button>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="details-page">
            <DetailsShell
                title=title
                form=form
                loading=loading
                load_error=load_error
                on_submit=submit
                on_cancel=on_cancel
            >
                <Show when=move || !is_new>
                    <div class="details__meta">
                        {move || format!("Order No. {} · version {}", vm.order_no(), version.get())}
                    </div>
                </Show>
                <div class="form__columns">
                    <div class="form__column">
                        <FormField label="Customer" field="debtor_no" errors=errors required=true>
                            <Select value=vm.debtor_no>
                                {move || {
                                    let pairs = customers
                                        .get()
                                        .into_iter()
                                        .map(|c| (c.debtor_no.to_string(), c.name))
                                        .collect();
                                    select_options("— Select customer —", pairs, &vm.debtor_no.get_untracked())
                                }}
                            </Select>
                        </FormField>
                        <FormField label="Reference" field="reference" errors=errors required=true>
                            <Input value=vm.reference />
                        </FormField>
                        <FormField label="Customer Reference" field="customer_ref" errors=errors>
                            <Input value=vm.customer_ref />
                        </FormField>
                        <FormField label="Order Date" field="ord_date" errors=errors required=true>
                            <DateInput value=vm.ord_date />
                        </FormField>
                        <FormField label="Required Delivery Date" field="delivery_date" errors=errors required=true>
                            <DateInput value=vm.delivery_date />
                        </FormField>
                        <FormField label="Price List" field="order_type" errors=errors>
                            <Select value=vm.order_type>
                                {move || {
                                    let pairs = sales_types
                                        .get()
                                        .into_iter()
                                        .map(|t| (t.id.to_string(), t.sales_type))
                                        .collect();
                                    select_options("— Select price list —", pairs, &vm.order_type.get_untracked())
                                }}
                            </Select>
                        </FormField>
                        <FormField label="Payment Terms" field="payment_terms" errors=errors>
                            <Select value=vm.payment_terms>
                                {move || {
                                    let pairs = payment_terms
                                        .get()
                                        .into_iter()
                                        .map(|t| (t.terms_indicator.to_string(), t.terms))
                                        .collect();
                                    select_options("— Customer default —", pairs, &vm.payment_terms.get_untracked())
                                }}
                            </Select>
                        </FormField>
                    </div>
                    <div class="form__column">
                        <FormField label="Deliver from Location" field="from_stk_loc" errors=errors required=true>
                            <Select value=vm.from_stk_loc>
                                {move || {
                                    let pairs = locations
                                        .get()
                                        .into_iter()
                                        .map(|l| (l.loc_code.clone(), l.location_name))
                                        .collect();
                                    select_options("— Select location —", pairs, &vm.from_stk_loc.get_untracked())
                                }}
                            </Select>
                        </FormField>
                        <FormField label="Deliver To" field="deliver_to" errors=errors>
                            <Input value=vm.deliver_to />
                        </FormField>
                        <FormField label="Address" field="delivery_address" errors=errors>
                            <Textarea value=vm.delivery_address />
                        </FormField>
                        <FormField label="Contact Phone" field="contact_phone" errors=errors>
                            <Input value=vm.contact_phone />
                        </FormField>
                        <FormField label="Contact E-mail" field="contact_email" errors=errors>
                            <Input value=vm.contact_email />
                        </FormField>
                        <FormField label="Shipping Charge" field="freight_cost" errors=errors>
                            <Input value=vm.freight_cost />
                        </FormField>
                        <FormField label="Comments" field="comments" errors=errors>
                            <Textarea value=vm.comments />
                        </FormField>
                    </div>
                </div>

                <div class="details__section">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h3 class="details__section-title">"Order Items"</h3>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_line()>
                            {icon("plus")}
                            " Add Line"
                        </Button>
                    </Flex>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Item"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Discount %"</TableHeaderCell>
                                <TableHeaderCell class="text-right">"Total"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For each=move || vm.lines.get() key=|row| row.key children=line_view />
                        </TableBody>
                    </Table>
                    <FieldError field="details" errors=errors />
                    <div class="details__totals">
                        <div>{move || format!("Sub-total: {}", format_money(vm.subtotal()))}</div>
                        <div>{move || format!("Shipping: {}", format_money(parse_number(&vm.freight_cost.get())))}</div>
                        <div class="details__totals-grand">
                            {move || format!("Amount Total: {}", format_money(vm.total()))}
                        </div>
                    </div>
                </div>
            </DetailsShell>
        </div>
    }
}
