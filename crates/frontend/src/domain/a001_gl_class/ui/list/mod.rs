use crate::domain::a001_gl_class::api;
use crate::domain::a001_gl_class::ui::details::GlClassDetails;
use crate::shared::components::{ListToolbar, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::form::{use_mutator, OutcomeText};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, filter_inactive, highlight_matches, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::use_collection;
use contracts::domain::a001_gl_class::GlClass;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for GlClass {
    fn search_fields(&self) -> Vec<String> {
        vec![self.cid.clone(), self.class_name.clone()]
    }
}

impl Sortable for GlClass {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "class_name" => cmp_text(&self.class_name, &other.class_name),
            "ctype" => self.ctype.cmp(&other.ctype),
            _ => cmp_text(&self.cid, &other.cid),
        }
    }
}

#[component]
pub fn GlClassList() -> impl IntoView {
    let state = ListState::new("cid");
    let query = use_collection(state.show_inactive_signal(), api::fetch_all);
    let modal_stack = use_modal_stack();
    let mutator = use_mutator();

    let page = Memo::new(move |_| {
        let rows = filter_inactive(query.get_or(Vec::new()), state.show_inactive.get());
        state.view(rows)
    });

    let open_details = move |id: Option<String>| {
        modal_stack.open_form(move |close| {
            view! { <GlClassDetails id=id.clone() on_saved=close on_cancel=close /> }.into_any()
        });
    };

    let delete = move |class: GlClass| {
        let cid = class.cid.clone();
        mutator.feedback().confirm_delete(
            GlClass::element_name(),
            &class.display_name(),
            move || {
                let cid = cid.clone();
                mutator.run(
                    async move { api::delete(&cid).await },
                    OutcomeText::deleted::<GlClass>(),
                    &[GlClass::collection_name()],
                    |_| {},
                );
            },
        );
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        mutator.client().invalidate_collection::<GlClass>();
    };

    view! {
        <PageFrame page_id="a001_gl_class--list" category=PAGE_CAT_LIST>
            <PageHeader title=GlClass::list_name() tab_key=GlClass::full_name()>
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
                            <SortableHeaderCell label="Class ID" sort_field="cid" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Class Name" sort_field="class_name" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <SortableHeaderCell label="Class Type" sort_field="ctype" current_sort_field=state.sort_field sort_ascending=state.sort_ascending />
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let search = state.search.get();
                            page.get().rows.into_iter().map(|class| {
                                let cid = class.cid.clone();
                                let for_delete = class.clone();
                                let cid_view = highlight_matches(&class.cid, &search);
                                let class_name_view = highlight_matches(&class.class_name, &search);
                                let class_type_label = class.class_type_label();
                                let statement = class.statement();
                                let inactive = class.inactive;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href="#" class="table__link" on:click=move |e| {
                                                    e.prevent_default();
                                                    open_details(Some(cid.clone()));
                                                }>
                                                    {cid_view}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{class_name_view}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {class_type_label}
                                                {statement.map(|s| view! { <span class="table__cell-note">{s}</span> })}
                                            </TableCellLayout>
                                        </TableCell>
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
