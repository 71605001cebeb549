use crate::shared::components::{DetailsShell, FormField};
use crate::shared::form::{load_failure, parse_int, FormState, OutcomeText};
use crate::system::users::api;
use contracts::domain::common::AggregateRoot;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User, ROLES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

const DEFAULT_LANGUAGE: &str = "en_US";

/// Empty input keeps the stored password.
fn password_change(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// New users go through `CreateUserDto` (login and password required);
/// existing ones through `UpdateUserDto`, where the login is fixed.
#[component]
pub fn UserDetails(
    id: Option<Uuid>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = id.is_none();
    let form = FormState::new();
    let loading = RwSignal::new(!is_new);
    let load_error = RwSignal::new(None::<String>);

    let user_id = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let real_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role_id = RwSignal::new(String::new());
    let language = RwSignal::new(DEFAULT_LANGUAGE.to_string());
    let inactive = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(user) => {
                    user_id.set(user.user_id);
                    real_name.set(user.real_name);
                    phone.set(user.phone);
                    email.set(user.email);
                    role_id.set(user.role_id.to_string());
                    language.set(user.language);
                    inactive.set(user.inactive);
                }
                Err(e) => load_error.set(Some(load_failure(&e, User::element_name()))),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new(move |_| {
        let outcome = OutcomeText::saved::<User>(is_new);
        let collections = [User::collection_name()];
        let done = move |_: ()| on_saved.run(());
        match id {
            None => {
                let dto = CreateUserDto {
                    user_id: user_id.get_untracked().trim().to_string(),
                    password: password.get_untracked(),
                    real_name: real_name.get_untracked().trim().to_string(),
                    phone: phone.get_untracked().trim().to_string(),
                    email: email.get_untracked().trim().to_string(),
                    role_id: parse_int(&role_id.get_untracked()),
                    language: language.get_untracked(),
                };
                if form.validate(&dto) {
                    form.submit(async move { api::create(&dto).await }, outcome, &collections, done);
                }
            }
            Some(id) => {
                let dto = UpdateUserDto {
                    id,
                    real_name: real_name.get_untracked().trim().to_string(),
                    phone: phone.get_untracked().trim().to_string(),
                    email: email.get_untracked().trim().to_string(),
                    role_id: parse_int(&role_id.get_untracked()),
                    language: language.get_untracked(),
                    password: password_change(&password.get_untracked()),
                    inactive: inactive.get_untracked(),
                };
                if form.validate(&dto) {
                    form.submit(async move { api::update(&dto).await }, outcome, &collections, done);
                }
            }
        }
    });

    let title = Signal::derive(move || {
        if is_new {
            format!("New {}", User::element_name())
        } else {
            format!("{} {}", User::element_name(), user_id.get())
        }
    });
    let password_label = if is_new { "Password" } else { "New Password" };
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
            <FormField label="User Login" field="user_id" errors=errors required=is_new>
                <Input value=user_id disabled=!is_new />
            </FormField>
            <FormField label=password_label field="password" errors=errors required=is_new>
                <Input
                    value=password
                    input_type=InputType::Password
                    placeholder=if is_new { "" } else { "Leave empty to keep the current one" }
                />
            </FormField>
            <FormField label="Full Name" field="real_name" errors=errors>
                <Input value=real_name />
            </FormField>
            <FormField label="Telephone No." field="phone" errors=errors>
                <Input value=phone />
            </FormField>
            <FormField label="Email Address" field="email" errors=errors>
                <Input value=email />
            </FormField>
            <FormField label="Access Level" field="role_id" errors=errors required=true>
                <Select value=role_id>
                    <option value="">"— Select role —"</option>
                    {ROLES
                        .iter()
                        .map(|(id, name)| view! { <option value=id.to_string()>{*name}</option> })
                        .collect_view()}
                </Select>
            </FormField>
            <FormField label="Language" field="language" errors=errors>
                <Input value=language />
            </FormField>
            <Show when=move || !is_new>
                <Checkbox checked=inactive label="Inactive" />
            </Show>
        </DetailsShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_change_only_when_entered() {
        assert_eq!(password_change(""), None);
        assert_eq!(password_change("s3cret"), Some("s3cret".to_string()));
    }
}
