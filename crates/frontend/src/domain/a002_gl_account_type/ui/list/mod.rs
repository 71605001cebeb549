use crate::domain::a001_gl_class;
use crate::domain::a002_gl_account_type::api;
use crate::domain::a002_gl_account_type::ui::details::GlAccountTypeDetails;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, filter_inactive, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::{name_index, use_collection, use_reference_list};
use contracts::domain::a002_gl_account_type::GlAccountType;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for GlAccountType {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone()]
    }
}

impl Sortable for GlAccountType {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "class_id" => cmp_text(&self.class_id, &other.class_id),
            "parent" => cmp_text(&self.parent, &other.parent),
            _ => cmp_text(&self.id, &other.id),
        }
    }
}

#[component]
pub fn GlAccountTypeList() -> impl IntoView {
    let state = ListState::new("id");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let classes = name_index(
        use_reference_list(a001_gl_class::api::fetch_all),
        |c| (c.cid.clone(), c.class_name.clone()),
    );
    // parents may be inactive, so they resolve against the full list
    let parents = name_index(use_reference_list(api::fetch_all), |g| {
        (g.id.clone(), g.name.clone())
    });
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<String>| {
        modal_stack.open_form(move |close| {
            view! { <GlAccountTypeDetails id=id.clone() on_saved=close on_cancel=close /> }
                .into_any()
        });
    };

    let delete = move |group: GlAccountType| {
        let id = group.id.clone();
        mutator.feedback().confirm_delete(
            GlAccountType::element_name(),
            &group.display_name(),
            move || {
                let id = id.clone();
                mutator.run(
                    async move { api::delete(&id).await },
                    OutcomeText::deleted::<GlAccountType>(),
                    &[GlAccountType::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<GlAccountType>();
    };

    view! {
        <PageFrame page_id="a002_gl_account_type--list" category=PAGE_CAT_LIST>
            <PageHeader title=GlAccountType::list_name() tab_key=GlAccountType::full_name()>
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
                    placeholder="Search by ID or name"
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
                            <SortableHeaderCell label="ID" sort_field="id" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Name" sort_field="name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Subgroup Of" sort_field="parent" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Class" sort_field="class_id" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            let classes = classes.get();
                            let parents = parents.get();
                            page.get().rows.into_iter().map(|group| {
                                let id = group.id.clone();
                                let parent_name = if group.is_top_level() {
                                    String::new()
                                } else {
                                    parents.name_of(&group.parent)
                                };
                                let class_name = classes.name_of(&group.class_id);
                                let for_delete = group.clone();
                                let id_view = highlight_matches(&group.id, &search);
                                let name_view = highlight_matches(&group.name, &search);
                                let inactive = group.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(id.clone()));
                                                }>
                                                    {id_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{name_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{parent_name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{class_name}</TableCellLayout></TableCell>
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
