use crate::domain::a018_stock_location::api;
use crate::shared::components::{DetailsShell, FormField};
use crate::shared::form::{load_failure, FormState, OutcomeText};
use contracts::domain::a018_stock_location::StockLocation;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn StockLocationDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let loc_code = RwSignal::new(String::new());
    let location_name = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let delivery_address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let phone2 = RwSignal::new(String::new());
    let fax = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let fixed_asset = RwSignal::new(false);
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(location) => {
                    loc_code.set(location.loc_code);
                    location_name.set(location.location_name);
                    contact.set(location.contact);
                    delivery_address.set(location.delivery_address);
                    phone.set(location.phone);
                    phone2.set(location.phone2);
                    fax.set(location.fax);
                    email.set(location.email);
                    fixed_asset.set(location.fixed_asset);
                    inactive.set(location.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, StockLocation::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let record = StockLocation {
            loc_code: loc_code.get_untracked().trim().to_string(),
            location_name: location_name.get_untracked().trim().to_string(),
            contact: contact.get_untracked().trim().to_string(),
            delivery_address: delivery_address.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            phone2: phone2.get_untracked().trim().to_string(),
            fax: fax.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            fixed_asset: fixed_asset.get_untracked(),
            inactive: inactive.get_untracked(),
        };
        if !form.validate(&record) {
            return;
        }
        let request = async move {
            if is_new {
                api::create(&record).await
            } else {
                api::update(&record.loc_code, &record).await
            }
        };
        form.submit(
            request,
            OutcomeText::saved::<StockLocation>(is_new),
            &[StockLocation::collection_name()],
            move |_| on_saved.run(()),
        );
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", StockLocation::element_name())
        } else {
            format!("{} {}", StockLocation::element_name(), loc_code.get())
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
            <FormField label="Location Code" field="loc_code" errors=errors required=true>
                <Input value=loc_code disabled=!is_new placeholder="Up to 5 characters" />
            </FormField>
            <FormField label="Location Name" field="location_name" errors=errors required=true>
                <Input value=location_name />
            </FormField>
            <FormField label="Contact for deliveries" field="contact" errors=errors>
                <Input value=contact />
            </FormField>
            <FormField label="Address" field="delivery_address" errors=errors>
                <Textarea value=delivery_address />
            </FormField>
            <FormField label="Telephone No" field="phone" errors=errors>
                <Input value=phone />
            </FormField>
            <FormField label="Secondary Phone Number" field="phone2" errors=errors>
                <Input value=phone2 />
            </FormField>
            <FormField label="Facsimile No" field="fax" errors=errors>
                <Input value=fax />
            </FormField>
            <FormField label="E-mail" field="email" errors=errors>
                <Input value=email />
            </FormField>
            <Checkbox checked=fixed_asset label="Fixed asset location" />
            <Checkbox checked=inactive label="Inactive" />
        </DetailsShell>
    }
}
