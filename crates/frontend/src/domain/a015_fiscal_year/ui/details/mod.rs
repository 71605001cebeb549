use crate::domain::a015_fiscal_year::api;
use crate::shared::components::{DateInput, DetailsShell, FormField};
use crate::shared::date_utils::today;
use crate::shared::form::{load_failure, FormState, OutcomeText};
use crate::shared::resource::use_reference_list;
use contracts::domain::a015_fiscal_year::FiscalYear;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Fiscal year editor. Overlaps are checked against the years already on the
/// server, so a new year starts out as the one following the latest.
#[component]
pub fn FiscalYearDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let years = use_reference_list(api::fetch_all);

    let suggested = FiscalYear::suggest_next(&[], today());
    let begin = RwSignal::new(suggested.begin);
    let end = RwSignal::new(suggested.end);
    let closed = RwSignal::new(false);
    let edited = RwSignal::new(false);

    if is_new {
        Effect::new(move |_| {
            let existing = years.get_or(Vec::new());
            if existing.is_empty() || edited.get_untracked() {
                return;
            }
            let next = FiscalYear::suggest_next(&existing, today());
            begin.set(next.begin);
            end.set(next.end);
        });
    }

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(year) => {
                    begin.set(year.begin);
                    end.set(year.end);
                    closed.set(year.closed);
                }
                Err(e) => load_error.set(Some(load_failure(&e, FiscalYear::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = FiscalYear::new(
            id.unwrap_or_default(),
            begin.get_untracked(),
            end.get_untracked(),
            closed.get_untracked(),
        );
        let existing = years.get_or(Vec::new());
        let errors = record.validate_against(&existing).err().unwrap_or_default();
        if !form.publish(errors) {
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
            OutcomeText::saved::<FiscalYear>(is_new),
            &[FiscalYear::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        let label = FiscalYear::new(0, begin.get(), end.get(), false).label();
        if is_new {
            format!("New {} {}", FiscalYear::element_name(), label)
        } else {
            format!("{} {}", FiscalYear::element_name(), label)
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
            <FormField label="Fiscal Year Begin" field="begin" errors=errors required=true>
                <span on:change=move |_| edited.set(true)>
                    <DateInput value=begin disabled=!is_new />
                </span>
            </FormField>
            <FormField label="Fiscal Year End" field="end" errors=errors required=true>
                <span on:change=move |_| edited.set(true)>
                    <DateInput value=end disabled=!is_new />
                </span>
            </FormField>
            <Checkbox checked=closed label="Is Closed" />
        </DetailsShell>
    }
}
