use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, filter_inactive, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::resource::use_collection;
use crate::system::users::api;
use crate::system::users::ui::details::UserDetails;
use contracts::domain::common::AggregateRoot;
use contracts::system::users::{role_name, User};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;
use uuid::Uuid;

impl Searchable for User {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.real_name.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "real_name" => cmp_text(&self.real_name, &other.real_name),
            "email" => cmp_text(&self.email, &other.email),
            "role_id" => cmp_text(role_name(self.role_id), role_name(other.role_id)),
            "last_visit_date" => self.last_visit_date.cmp(&other.last_visit_date),
            _ => cmp_text(&self.user_id, &other.user_id),
        }
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let state = ListState::new("user_id");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<Uuid>| {
        modal_stack.open_form(move |close| {
            view! { <UserDetails id=id on_saved=close on_cancel=close /> }.into_any()
        });
    };

    let delete = move |user: User| {
        let id = user.id;
        mutator.feedback().confirm_delete(
            User::element_name(),
            &user.display_name(),
            move || {
                mutator.run(
                    async move { api::delete(id).await },
                    OutcomeText::deleted::<User>(),
                    &[User::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<User>();
    };

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title=User::list_name() tab_key=User::full_name()>
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
                    placeholder="Search by login, name, email or phone..."
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
                            <SortableHeaderCell label="User login" sort_field="user_id" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Full Name" sort_field="real_name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>"Phone"</TableHeaderCell>
                            <SortableHeaderCell label="E-mail" sort_field="email" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Access Level" sort_field="role_id" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Last Visit" sort_field="last_visit_date" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            page.get().rows.into_iter().map(|user| {
                                let id = user.id;
                                let for_delete = user.clone();
                                let user_id_view = highlight_matches(&user.user_id, &search);
                                let real_name_view = highlight_matches(&user.real_name, &search);
                                let phone_view = highlight_matches(&user.phone, &search);
                                let email_view = highlight_matches(&user.email, &search);
                                let role = role_name(user.role_id);
                                let last_visit_date = user.last_visit_date.clone().unwrap_or_default();
                                let inactive = user.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id));
                                                }>
                                                    {user_id_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{real_name_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{phone_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{email_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{role}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{last_visit_date}</TableCellLayout></TableCell>
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
                </Table>

                <Show when=move || query.loading.get()>
                    <Spinner />
                </Show>
            </div>
        </PageFrame>
    }
}
