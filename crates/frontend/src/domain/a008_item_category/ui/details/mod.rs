use crate::domain::a003_gl_account;
use crate::domain::a008_item_category::api;
use crate::domain::a009_item_unit;
use crate::domain::a017_tax_group;
use crate::shared::components::{select_options, DetailsShell, FormField};
use crate::shared::form::{load_failure, parse_int, FormState, OutcomeText};
use crate::shared::resource::use_reference_list;
use contracts::domain::a008_item_category::{ItemCategory, MB_FLAGS};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ItemCategoryDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let units = use_reference_list(a009_item_unit::api::fetch_all);
    let tax_groups = use_reference_list(a017_tax_group::api::fetch_all);
    let gl_accounts = use_reference_list(a003_gl_account::api::fetch_all);
    let gl_options = move |selected: RwSignal<String>| {
        let pairs = gl_accounts
            .get_or(Vec::new())
            .into_iter()
            .map(|a| (a.account_code.clone(), a.code_and_name()))
            .collect();
        select_options("— None —", pairs, &selected.get_untracked())
    };

    let defaults = ItemCategory::default();
    let description = RwSignal::new(String::new());
    let dflt_tax_type = RwSignal::new(String::new());
    let dflt_mb_flag = RwSignal::new(defaults.dflt_mb_flag);
    let dflt_units = RwSignal::new(String::new());
    let dflt_sales_act = RwSignal::new(String::new());
    let dflt_inventory_act = RwSignal::new(String::new());
    let dflt_cogs_act = RwSignal::new(String::new());
    let dflt_adjustment_act = RwSignal::new(String::new());
    let dflt_no_sale = RwSignal::new(false);
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(category) => {
                    description.set(category.description);
                    dflt_tax_type.set(category.dflt_tax_type.to_string());
                    dflt_mb_flag.set(category.dflt_mb_flag);
                    dflt_units.set(category.dflt_units);
                    dflt_sales_act.set(category.dflt_sales_act);
                    dflt_inventory_act.set(category.dflt_inventory_act);
                    dflt_cogs_act.set(category.dflt_cogs_act);
                    dflt_adjustment_act.set(category.dflt_adjustment_act);
                    dflt_no_sale.set(category.dflt_no_sale);
                    inactive.set(category.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, ItemCategory::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = ItemCategory {
            category_id: id.unwrap_or_default(),
            description: description.get_untracked().trim().to_string(),
            dflt_tax_type: parse_int(&dflt_tax_type.get_untracked()),
            dflt_mb_flag: dflt_mb_flag.get_untracked(),
            dflt_units: dflt_units.get_untracked(),
            dflt_sales_act: dflt_sales_act.get_untracked(),
            dflt_inventory_act: dflt_inventory_act.get_untracked(),
            dflt_cogs_act: dflt_cogs_act.get_untracked(),
            dflt_adjustment_act: dflt_adjustment_act.get_untracked(),
            dflt_no_sale: dflt_no_sale.get_untracked(),
            inactive: inactive.get_untracked(),
        };
        if !form.validate(&record) {
            return;
        }
        let request = async move {
            match id {
                None => api::create(&record).await,
                Some(id) => api::update(id, &record).await,
            }
        };
        form.submit(
            request,
            OutcomeText::saved::<ItemCategory>(is_new),
            &[ItemCategory::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", ItemCategory::element_name())
        } else {
            format!("{} {}", ItemCategory::element_name(), description.get())
        }
    });
    let errors = form.errors_signal();

    view! {
        <DetailsShell
            title=title
            form=form
            loading=loading
            load_error=load_error
            on_submit=submit
            on_cancel=on_cancel
        >
            <FormField label="Category Name" field="description" errors=errors required=true>
                <Input value=description />
            </FormField>
            <FormField label="Item Tax Type" field="dflt_tax_type" errors=errors>
                <Select value=dflt_tax_type>
                    {move || {
                        let pairs = tax_groups
                            .get_or(Vec::new())
                            .into_iter()
                            .map(|g| (g.id.to_string(), g.name))
                            .collect();
                        select_options("— None —", pairs, &dflt_tax_type.get_untracked())
                    }}
                </Select>
            </FormField>
            <FormField label="Item Type" field="dflt_mb_flag" errors=errors required=true>
                <Select value=dflt_mb_flag>
                    {MB_FLAGS
                        .iter()
                        .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                        .collect_view()}
                </Select>
            </FormField>
            <FormField label="Units of Measure" field="dflt_units" errors=errors required=true>
                <Select value=dflt_units>
                    {move || {
                        let pairs = units
                            .get_or(Vec::new())
                            .into_iter()
                            .map(|u| (u.abbr.clone(), format!("{} ({})", u.name, u.abbr)))
                            .collect();
                        select_options("— Select unit —", pairs, &dflt_units.get_untracked())
                    }}
                </Select>
            </FormField>
            <FormField label="Sales Account" field="dflt_sales_act" errors=errors>
                <Select value=dflt_sales_act>
                    {move || gl_options(dflt_sales_act)}
                </Select>
            </FormField>
            <FormField label="Inventory Account" field="dflt_inventory_act" errors=errors>
                <Select value=dflt_inventory_act>
                    {move || gl_options(dflt_inventory_act)}
                </Select>
            </FormField>
            <FormField label="C.O.G.S. Account" field="dflt_cogs_act" errors=errors>
                <Select value=dflt_cogs_act>
                    {move || gl_options(dflt_cogs_act)}
                </Select>
            </FormField>
            <FormField label="Inventory Adjustments Account" field="dflt_adjustment_act" errors=errors>
                <Select value=dflt_adjustment_act>
                    {move || gl_options(dflt_adjustment_act)}
                </Select>
            </FormField>
            <Checkbox checked=dflt_no_sale label="Exclude from sales" />
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
