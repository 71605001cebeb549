use crate::shared::form::FormState;
use crate::shared::modal::ModalHeader;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
enum Body {
    Failed(String),
    Loading,
    Fields,
}

/// A load failure wins over the spinner; fields show only once loaded.
fn body(loading: bool, load_error: Option<String>) -> Body {
    match load_error {
        Some(message) => Body::Failed(message),
        None if loading => Body::Loading,
        None => Body::Fields,
    }
}

/// Frame of every details form: title, load state, fields and Save / Cancel.
///
/// Fields are only rendered once the record has loaded; a load failure replaces
/// them with the message.
#[component]
pub fn DetailsShell(
    #[prop(into)]
    title: Signal<String>,
    form: FormState,
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into)]
    load_error: Signal<Option<String>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let saving = form.saving;
    let fields = StoredValue::new(children);
    let blocked = move || loading.get() || saving.get() || load_error.with(|e| e.is_some());

    view! {
        <div class="details">
            <ModalHeader title=title on_close=on_cancel />
            <div class="details__body">
                {move || match body(loading.get(), load_error.get()) {
                    Body::Failed(message) => view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{message}</span>
                        </div>
                    }
                    .into_any(),
                    Body::Loading => view! { <Spinner /> }.into_any(),
                    Body::Fields => view! {
                        <Flex vertical=true gap=FlexGap::Medium>
                            {fields.with_value(|f| f())}
                        </Flex>
                    }
                    .into_any(),
                }}
            </div>
            <div class="details__actions">
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(blocked)
                        loading=saving
                        on_click=move |_| on_submit.run(())
                    >
                        "Save"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_only_after_load() {
        assert_eq!(body(true, None), Body::Loading);
        assert_eq!(body(false, None), Body::Fields);
        assert_eq!(
            body(true, Some("Customer not found".into())),
            Body::Failed("Customer not found".into())
        );
    }
}
