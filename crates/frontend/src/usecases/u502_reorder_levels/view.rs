use crate::domain::a018_stock_location;
use crate::domain::a019_item;
use crate::shared::components::{select_options, PageHeader};
use crate::shared::form::{number_text, parse_number};
use crate::shared::icons::icon;
use crate::shared::modal::use_feedback;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::query_cache::RequestSeq;
use crate::shared::resource::use_reference_list;
use contracts::domain::a018_stock_location::{LocStock, StockLocation};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_reorder_levels::{changed_levels, FanOutReport, ReorderLevels};
use futures_util::future::{join_all, try_join};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// One row per location, in location order; locations without a stored level start at zero.
fn level_rows(locations: &[StockLocation], levels: &[LocStock], stock_id: &str) -> Vec<LocStock> {
    locations
        .iter()
        .map(|location| {
            levels
                .iter()
                .find(|l| l.loc_code == location.loc_code)
                .cloned()
                .unwrap_or_else(|| LocStock {
                    loc_code: location.loc_code.clone(),
                    stock_id: stock_id.to_string(),
                    reorder_level: 0.0,
                })
        })
        .collect()
}

/// Baseline after a partial save: rows that went through count as stored,
/// failed ones keep their old value so the next save retries them.
fn merge_saved(original: &[LocStock], changed: &[LocStock], updated: &[String]) -> Vec<LocStock> {
    let mut merged = original.to_vec();
    for row in changed.iter().filter(|r| updated.contains(&r.loc_code)) {
        match merged.iter_mut().find(|o| o.loc_code == row.loc_code) {
            Some(existing) => existing.reorder_level = row.reorder_level,
            None => merged.push(row.clone()),
        }
    }
    merged
}

fn set_level(rows: &mut [LocStock], loc_code: &str, level: f64) {
    if let Some(row) = rows.iter_mut().find(|r| r.loc_code == loc_code) {
        row.reorder_level = level;
    }
}

#[component]
pub fn ReorderLevelsPage() -> impl IntoView {
    let feedback = use_feedback();
    let items = use_reference_list(a019_item::api::fetch_all);

    let stock_id = RwSignal::new(String::new());
    let locations = RwSignal::new(Vec::<StockLocation>::new());
    let original = StoredValue::new(Vec::<LocStock>::new());
    let rows = RwSignal::new(Vec::<LocStock>::new());
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let requests = StoredValue::new(RequestSeq::default());

    Effect::new(move |_| {
        let item = stock_id.get();
        requests.update_value(|seq| {
            seq.advance();
        });
        let ticket = requests.get_value();
        if item.is_empty() {
            rows.set(Vec::new());
            loading.set(false);
            return;
        }
        loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            let loaded = try_join(
                a018_stock_location::api::fetch_levels(&item),
                a018_stock_location::api::fetch_all(false),
            )
            .await;
            if !ticket.is_latest(requests.get_value()) {
                log::debug!("reorder levels of {} superseded", item);
                return;
            }
            match loaded {
                Ok((levels, location_list)) => {
                    original.set_value(levels.clone());
                    rows.set(level_rows(&location_list, &levels, &item));
                    locations.set(location_list);
                }
                Err(e) => {
                    log::warn!("reorder levels of {} failed to load: {}", item, e);
                    load_error.set(Some(e.user_message("Failed to load reorder levels")));
                }
            }
            loading.set(false);
        });
    });

    let save = move |_: leptos::ev::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        let edited = rows.get_untracked();
        let changed = original.with_value(|o| changed_levels(o, &edited));
        if changed.is_empty() {
            feedback.success("No reorder levels were changed.");
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let results = join_all(changed.iter().map(|row| async move {
                let result = a018_stock_location::api::update_level(row).await;
                (row.loc_code.clone(), result)
            }))
            .await;
            let report = FanOutReport::from_results(results);
            log::info!("reorder levels saved: {}", report.summary());
            original.update_value(|o| *o = merge_saved(o, &changed, &report.updated));
            if report.is_success() {
                feedback.success(format!("Reorder levels: {}.", report.summary()));
            } else {
                feedback.error(format!("Reorder levels: {}.", report.summary()));
            }
            saving.set(false);
        });
    };

    let location_name = move |loc_code: &str| {
        locations.with(|list| {
            list.iter()
                .find(|l| l.loc_code == loc_code)
                .map(|l| l.location_name.clone())
                .unwrap_or_else(|| loc_code.to_string())
        })
    };

    let row_view = move |row: LocStock| {
        let loc_code = row.loc_code.clone();
        let for_edit = loc_code.clone();
        let for_value = loc_code.clone();
        let loc_label = loc_code.clone();
        view! {
            <TableRow>
                <TableCell><TableCellLayout>{loc_label}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{move || location_name(&loc_code)}</TableCellLayout></TableCell>
                <TableCell>
                    <input
                        class="line-input line-input--number"
                        prop:value=move || {
                            rows.with(|rs| {
                                rs.iter()
                                    .find(|r| r.loc_code == for_value)
                                    .map(|r| number_text(r.reorder_level))
                                    .unwrap_or_default()
                            })
                        }
                        on:change=move |ev| {
                            let value = parse_number(&event_target_value(&ev));
                            rows.update(|rs| set_level(rs, &for_edit, value));
                        }
                    />
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="u502_reorder_levels--usecase" category=PAGE_CAT_USECASE>
            <PageHeader
                title=ReorderLevels::display_name()
                tab_key=ReorderLevels::full_name()
                subtitle=ReorderLevels::description().to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get() || rows.with(|r| r.is_empty()))
                    loading=saving
                    on_click=save
                >
                    {icon("check")}
                    " Save"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="form__group">
                    <Label>"Item"</Label>
                    <Select value=stock_id>
                        {move || {
                            let pairs = items
                                .get_or(Vec::new())
                                .into_iter()
                                .filter(|i| i.is_stocked() && !i.inactive)
                                .map(|i| (i.stock_id.clone(), format!("{} {}", i.stock_id, i.description)))
                                .collect();
                            select_options("— Select item —", pairs, &stock_id.get_untracked())
                        }}
                    </Select>
                </div>

                {move || load_error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Location"</TableHeaderCell>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Reorder Level"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For each=move || rows.get() key=|row| row.loc_code.clone() children=row_view />
                    </TableBody>
                </Table>

                <Show when=move || loading.get()>
                    <Spinner />
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(code: &str) -> StockLocation {
        StockLocation {
            loc_code: code.to_string(),
            location_name: format!("Location {}", code),
            ..Default::default()
        }
    }

    fn level(loc: &str, value: f64) -> LocStock {
        LocStock {
            loc_code: loc.to_string(),
            stock_id: "101".to_string(),
            reorder_level: value,
        }
    }

    #[test]
    fn test_rows_cover_every_location() {
        let rows = level_rows(
            &[location("DEF"), location("WH2")],
            &[level("WH2", 7.0)],
            "101",
        );
        assert_eq!(rows, vec![level("DEF", 0.0), level("WH2", 7.0)]);
    }

    #[test]
    fn test_failed_rows_stay_changed_after_save() {
        let original = vec![level("DEF", 5.0), level("WH2", 0.0)];
        let mut edited = original.clone();
        set_level(&mut edited, "DEF", 8.0);
        set_level(&mut edited, "WH2", 3.0);
        let changed = changed_levels(&original, &edited);
        assert_eq!(changed.len(), 2);

        let baseline = merge_saved(&original, &changed, &["DEF".to_string()]);
        let retry = changed_levels(&baseline, &edited);
        assert_eq!(retry, vec![level("WH2", 3.0)]);
    }

    #[test]
    fn test_new_rows_join_the_baseline() {
        let changed = vec![level("WH3", 2.0)];
        let baseline = merge_saved(&[], &changed, &["WH3".to_string()]);
        assert_eq!(baseline, changed);
    }
}
