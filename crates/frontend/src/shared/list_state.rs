//! UI state shared by every list view.

use crate::shared::config::{AppConfig, DEFAULT_PAGE_SIZE};
use crate::shared::list_utils::{filter_list, paginate, sort_list, total_pages, PageSize, Searchable, Sortable};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ListState {
    pub search: RwSignal<String>,
    pub show_inactive: RwSignal<bool>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<PageSize>,
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
}

impl ListState {
    pub fn new(sort_field: &str) -> Self {
        let page_size = use_context::<AppConfig>()
            .map(|c| c.default_page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let state = Self {
            search: RwSignal::new(String::new()),
            show_inactive: RwSignal::new(false),
            page: RwSignal::new(0),
            page_size: RwSignal::new(page_size),
            sort_field: RwSignal::new(sort_field.to_string()),
            sort_ascending: RwSignal::new(true),
        };

        // any filter change starts again from the first page
        Effect::new(move |prev: Option<()>| {
            state.search.track();
            state.show_inactive.track();
            state.page_size.track();
            if prev.is_some() {
                state.page.set(0);
            }
        });

        state
    }

    pub fn show_inactive_signal(&self) -> Signal<bool> {
        self.show_inactive.into()
    }

    pub fn on_search(&self) -> Callback<String> {
        let search = self.search;
        Callback::new(move |value: String| search.set(value))
    }

    pub fn on_page_change(&self) -> Callback<usize> {
        let page = self.page;
        Callback::new(move |p: usize| page.set(p))
    }

    pub fn on_page_size_change(&self) -> Callback<PageSize> {
        let page_size = self.page_size;
        Callback::new(move |size: PageSize| page_size.set(size))
    }

    /// Filters, sorts and pages `rows` with the current state (tracked).
    pub fn view<T: Searchable + Sortable + Clone>(&self, rows: Vec<T>) -> ListView<T> {
        list_view(
            rows,
            &self.search.get(),
            &self.sort_field.get(),
            self.sort_ascending.get(),
            self.page.get(),
            self.page_size.get(),
        )
    }
}

/// One rendered page of a list plus the numbers the pagination bar needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    /// All rows that passed the search (the "N" of the pager)
    pub filtered: Vec<T>,
    pub total_pages: usize,
    pub page: usize,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filtered: Vec::new(),
            total_pages: 1,
            page: 0,
        }
    }
}

impl<T> ListView<T> {
    pub fn total_count(&self) -> usize {
        self.filtered.len()
    }
}

pub fn list_view<T: Searchable + Sortable + Clone>(
    rows: Vec<T>,
    search: &str,
    sort_field: &str,
    ascending: bool,
    page: usize,
    size: PageSize,
) -> ListView<T> {
    let mut filtered = filter_list(rows, search);
    sort_list(&mut filtered, sort_field, ascending);
    let pages = total_pages(filtered.len(), size);
    // deleting the last row of the last page must not strand the user on an empty page
    let page = page.min(pages - 1);
    ListView {
        rows: paginate(&filtered, page, size),
        filtered,
        total_pages: pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::cmp_text;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Unit(String);

    impl Searchable for Unit {
        fn search_fields(&self) -> Vec<String> {
            vec![self.0.clone()]
        }
    }

    impl Sortable for Unit {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            cmp_text(&self.0, &other.0)
        }
    }

    fn units(n: usize) -> Vec<Unit> {
        (0..n).map(|i| Unit(format!("unit {:03}", i))).collect()
    }

    #[test]
    fn test_page_lengths() {
        let view = list_view(units(53), "", "name", true, 5, PageSize::Rows(25));
        // clamped to the last page
        assert_eq!(view.page, 2);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.total_count(), 53);

        let all = list_view(units(53), "", "name", true, 0, PageSize::All);
        assert_eq!(all.rows.len(), 53);
    }

    #[test]
    fn test_search_then_sort() {
        let view = list_view(units(30), "UNIT 02", "name", false, 0, PageSize::Rows(10));
        assert_eq!(view.total_count(), 10);
        assert_eq!(view.rows[0], Unit("unit 029".into()));
    }

    #[test]
    fn test_empty() {
        let view = list_view(Vec::<Unit>::new(), "", "name", true, 3, PageSize::Rows(10));
        assert_eq!(view.page, 0);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 1);
    }
}
