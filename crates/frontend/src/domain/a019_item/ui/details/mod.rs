use crate::domain::a008_item_category;
use crate::domain::a009_item_unit;
use crate::domain::a017_tax_group;
use crate::domain::a019_item::api;
use crate::shared::components::{select_options, DetailsShell, FormField};
use crate::shared::form::{
    load_failure, number_text, parse_int, parse_number, FormState, OutcomeText,
};
use contracts::domain::a008_item_category::{ItemCategory, MB_FLAGS};
use contracts::domain::a009_item_unit::ItemUnit;
use contracts::domain::a017_tax_group::TaxGroup;
use contracts::domain::a019_item::Item;
use contracts::domain::common::AggregateRoot;
use futures_util::future::{try_join, try_join3};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Copies a category's defaults into the new item's fields.
fn apply_category_defaults(item: &mut Item, category: &ItemCategory) {
    item.category_id = category.category_id;
    item.units = category.dflt_units.clone();
    item.mb_flag = category.dflt_mb_flag.clone();
    item.tax_type_id = category.dflt_tax_type;
}

/// Item form, opened as a tab. Picking a category on a new item pre-fills
/// units, type and tax type from the category.
#[component]
pub fn ItemDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    let categories = RwSignal::new(Vec::<ItemCategory>::new());
    let units = RwSignal::new(Vec::<ItemUnit>::new());
    let tax_groups = RwSignal::new(Vec::<TaxGroup>::new());

    let defaults = Item::default();
    let stock_id = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let long_description = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let tax_type_id = RwSignal::new(String::new());
    let item_units = RwSignal::new(String::new());
    let mb_flag = RwSignal::new(defaults.mb_flag);
    let material_cost = RwSignal::new(number_text(defaults.material_cost));
    let inactive = RwSignal::new(false);

    spawn_local(async move {
        let references = try_join3(
            a008_item_category::api::fetch_all(false),
            a009_item_unit::api::fetch_all(false),
            a017_tax_group::api::fetch_all(false),
        );
        let loaded = match id {
            Some(id) => try_join(api::fetch_by_id(&id), references)
                .await
                .map(|(item, refs)| (Some(item), refs)),
            None => references.await.map(|refs| (None, refs)),
        };
        match loaded {
            Ok((item, (category_list, unit_list, group_list))) => {
                if let Some(item) = item {
                    stock_id.set(item.stock_id);
                    description.set(item.description);
                    long_description.set(item.long_description);
                    category_id.set(item.category_id.to_string());
                    tax_type_id.set(item.tax_type_id.to_string());
                    item_units.set(item.units);
                    mb_flag.set(item.mb_flag);
                    material_cost.set(number_text(item.material_cost));
                    inactive.set(item.inactive);
                }
                categories.set(category_list);
                units.set(unit_list);
                tax_groups.set(group_list);
            }
            Err(e) => load_error.set(Some(load_failure(&e, Item::element_name()))),
        }
        loading.set(false);
    });

    if is_new {
        Effect::new(move |prev: Option<String>| {
            let selected = category_id.get();
            if prev.as_deref() != Some(selected.as_str()) {
                let chosen = categories.with_untracked(|list| {
                    list.iter()
                        .find(|c| c.category_id.to_string() == selected)
                        .cloned()
                });
                if let Some(category) = chosen {
                    let mut item = Item::default();
                    apply_category_defaults(&mut item, &category);
                    item_units.set(item.units);
                    mb_flag.set(item.mb_flag);
                    tax_type_id.set(item.tax_type_id.to_string());
                }
            }
            selected
        });
    }

    let submit = Callback::new(move |_| {
        let record = Item {
            stock_id: stock_id.get_untracked().trim().to_uppercase(),
            description: description.get_untracked().trim().to_string(),
            long_description: long_description.get_untracked().trim().to_string(),
            category_id: parse_int(&category_id.get_untracked()),
            tax_type_id: parse_int(&tax_type_id.get_untracked()),
            units: item_units.get_untracked(),
            mb_flag: mb_flag.get_untracked(),
            material_cost: parse_number(&material_cost.get_untracked()),
            inactive: inactive.get_untracked(),
        };
        if !form.validate(&record) {
            return;
        }
        let request = async move {
            if is_new {
                api::create(&record).await
            } else {
                api::update(&record.stock_id, &record).await
            }
        };
        form.submit(
            request,
            OutcomeText::saved::<Item>(is_new),
            &[Item::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", Item::element_name())
        } else {
            format!("{} {}", Item::element_name(), stock_id.get())
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
            <div class="form__columns">
                <div class="form__column">
                    <FormField label="Item Code" field="stock_id" errors=errors required=true>
                        <Input value=stock_id disabled=!is_new />
                    </FormField>
                    <FormField label="Name" field="description" errors=errors required=true>
                        <Input value=description />
                    </FormField>
                    <FormField label="Description" field="long_description" errors=errors>
                        <Textarea value=long_description />
                    </FormField>
                    <FormField label="Category" field="category_id" errors=errors required=true>
                        <Select value=category_id>
                            {move || {
                                let pairs = categories
                                    .get()
                                    .into_iter()
                                    .map(|c| (c.category_id.to_string(), c.description))
                                    .collect();
                                select_options("— Select category —", pairs, &category_id.get_untracked())
                            }}
                        </Select>
                    </FormField>
                </div>
                <div class="form__column">
                    <FormField label="Item Tax Type" field="tax_type_id" errors=errors>
                        <Select value=tax_type_id>
                            {move || {
                                let pairs = tax_groups
                                    .get()
                                    .into_iter()
                                    .map(|g| (g.id.to_string(), g.name))
                                    .collect();
                                select_options("— None —", pairs, &tax_type_id.get_untracked())
                            }}
                        </Select>
                    </FormField>
                    <FormField label="Item Type" field="mb_flag" errors=errors required=true>
                        <Select value=mb_flag>
                            {MB_FLAGS
                                .iter()
                                .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                                .collect_view()}
                        </Select>
                    </FormField>
                    <FormField label="Units of Measure" field="units" errors=errors required=true>
                        <Select value=item_units>
                            {move || {
                                let pairs = units
                                    .get()
                                    .into_iter()
                                    .map(|u| (u.abbr.clone(), format!("{} ({})", u.name, u.abbr)))
                                    .collect();
                                select_options("— Select unit —", pairs, &item_units.get_untracked())
                            }}
                        </Select>
                    </FormField>
                    <FormField label="Standard Cost" field="material_cost" errors=errors>
                        <Input value=material_cost />
                    </FormField>
                    <Checkbox checked=inactive label="Inactive" />
                </div>
            </div>
        </DetailsShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults_fill_new_item() {
        let category = ItemCategory {
            category_id: 4,
            description: "Services".into(),
            dflt_units: "hr".into(),
            dflt_mb_flag: "D".into(),
            dflt_tax_type: 2,
            ..ItemCategory::default()
        };
        let mut item = Item {
            stock_id: "CONSULT".into(),
            ..Item::default()
        };
        apply_category_defaults(&mut item, &category);

        assert_eq!(item.category_id, 4);
        assert_eq!(item.units, "hr");
        assert_eq!(item.mb_flag, "D");
        assert_eq!(item.tax_type_id, 2);
        assert_eq!(item.stock_id, "CONSULT");
        assert!(!item.is_stocked());
    }
}
