//! List helpers shared by every table view: search, sort, inactive filter and paging.
use contracts::domain::common::AggregateRoot;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Row types that can be searched from the list header.
pub trait Searchable {
    /// Texts of the designated display fields; only these are searched.
    fn search_fields(&self) -> Vec<String>;

    /// Case-insensitive substring match on any designated field.
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Row types sortable by clicking a column header.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive text ordering for `compare_by_field` implementations.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Byte ranges of `text` that match `filter` char by char, ignoring case.
/// Ranges do not overlap and always fall on char boundaries of `text`.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = filter.trim().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let same = |a: char, b: char| a.to_lowercase().eq(b.to_lowercase());

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let window = &chars[i..i + needle.len()];
        if window.iter().zip(&needle).all(|(&(_, c), &f)| same(c, f)) {
            let end = chars.get(i + needle.len()).map_or(text.len(), |&(pos, _)| pos);
            ranges.push((chars[i].0, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Highlights matches of `filter` in `text` (case-insensitive).
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Drops inactive rows unless `show_inactive` is set.
pub fn filter_inactive<T: AggregateRoot>(items: Vec<T>, show_inactive: bool) -> Vec<T> {
    if show_inactive {
        return items;
    }
    items.into_iter().filter(|item| !item.is_inactive()).collect()
}

/// Page size of a list; `All` shows every filtered row on a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Rows(usize),
    All,
}

pub const PAGE_SIZE_OPTIONS: [PageSize; 5] = [
    PageSize::Rows(10),
    PageSize::Rows(25),
    PageSize::Rows(50),
    PageSize::Rows(100),
    PageSize::All,
];

impl PageSize {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Some(PageSize::All);
        }
        match value.parse::<usize>() {
            Ok(n) if n > 0 => Some(PageSize::Rows(n)),
            _ => None,
        }
    }

    pub fn as_value(&self) -> String {
        match self {
            PageSize::Rows(n) => n.to_string(),
            PageSize::All => "all".to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            PageSize::Rows(n) => n.to_string(),
            PageSize::All => "All".to_string(),
        }
    }
}

pub fn total_pages(count: usize, size: PageSize) -> usize {
    match size {
        PageSize::All => 1,
        PageSize::Rows(n) => count.div_ceil(n.max(1)).max(1),
    }
}

/// 1-based `(first, last)` row numbers shown on `page`; `(0, 0)` when nothing is.
pub fn page_range(count: usize, page: usize, size: PageSize) -> (usize, usize) {
    let (start, len) = match size {
        PageSize::All => (0, count),
        PageSize::Rows(n) => {
            let start = page.saturating_mul(n);
            (start, n.min(count.saturating_sub(start)))
        }
    };
    if len == 0 {
        (0, 0)
    } else {
        (start + 1, start + len)
    }
}

/// Rows of page `page` (0-based). Out-of-range pages are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, size: PageSize) -> Vec<T> {
    match size {
        PageSize::All => items.to_vec(),
        PageSize::Rows(n) => items
            .iter()
            .skip(page.saturating_mul(n))
            .take(n)
            .cloned()
            .collect(),
    }
}

/// Search input with a 300 ms debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current applied filter
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // dropping a gloo Timeout cancels it
        pending.set_value(Some(Timeout::new(300, move || {
            on_change.run(new_value);
        })));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sortable-header table__sortable-header--active"
    } else {
        "table__sortable-header"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: String,
        name: String,
        note: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.code.clone(), self.name.clone()]
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(&self.name, &other.name),
                _ => cmp_text(&self.code, &other.code),
            }
        }
    }

    fn row(code: &str, name: &str, note: &str) -> Row {
        Row {
            code: code.into(),
            name: name.into(),
            note: note.into(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive_on_designated_fields() {
        let rows = vec![
            row("CASH", "Petty Cash", "main office"),
            row("BNK", "Bank of Springfield", "cash desk"),
        ];
        let found = filter_list(rows.clone(), "cash");
        assert_eq!(found, vec![rows[0].clone()]);
        assert_eq!(filter_list(rows.clone(), "SPRING").len(), 1);
        // `note` is not a designated field
        assert!(filter_list(rows.clone(), "office").is_empty());
        assert_eq!(filter_list(rows, "  ").len(), 2);
    }

    #[test]
    fn test_sort() {
        let mut rows = vec![row("b", "beta", ""), row("A", "alpha", ""), row("c", "Gamma", "")];
        sort_list(&mut rows, "code", true);
        assert_eq!(rows[0].code, "A");
        sort_list(&mut rows, "name", false);
        assert_eq!(rows[0].name, "Gamma");
    }

    #[test]
    fn test_page_row_counts() {
        let items: Vec<usize> = (0..23).collect();
        let size = PageSize::Rows(10);
        assert_eq!(total_pages(items.len(), size), 3);
        for page in 0..3 {
            let expected = 10.min(items.len() - page * 10);
            assert_eq!(paginate(&items, page, size).len(), expected);
        }
        assert_eq!(paginate(&items, 2, size), vec![20, 21, 22]);
        assert!(paginate(&items, 5, size).is_empty());
    }

    #[test]
    fn test_all_shows_every_row() {
        let items: Vec<usize> = (0..137).collect();
        assert_eq!(paginate(&items, 0, PageSize::All).len(), 137);
        assert_eq!(total_pages(items.len(), PageSize::All), 1);
        assert_eq!(total_pages(0, PageSize::Rows(25)), 1);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(23, 0, PageSize::Rows(10)), (1, 10));
        assert_eq!(page_range(23, 2, PageSize::Rows(10)), (21, 23));
        assert_eq!(page_range(23, 3, PageSize::Rows(10)), (0, 0));
        assert_eq!(page_range(23, 0, PageSize::All), (1, 23));
        assert_eq!(page_range(0, 0, PageSize::All), (0, 0));
    }

    #[test]
    fn test_page_size_parse() {
        assert_eq!(PageSize::parse("ALL"), Some(PageSize::All));
        assert_eq!(PageSize::parse("50"), Some(PageSize::Rows(50)));
        assert_eq!(PageSize::parse("0"), None);
        assert_eq!(PageSize::Rows(25).as_value(), "25");
        assert_eq!(PageSize::All.label(), "All");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "code", true), " ⇅");
    }

    #[test]
    fn test_match_ranges_ignore_case() {
        assert_eq!(match_ranges("Petty Cash cash", "CASH"), vec![(6, 10), (11, 15)]);
        assert_eq!(match_ranges("Petty Cash", " "), Vec::<(usize, usize)>::new());
        assert_eq!(match_ranges("Petty", "bank"), Vec::<(usize, usize)>::new());
    }

    /// Kelvin sign and dotted capital I lowercase to a different byte length.
    #[test]
    fn test_match_ranges_on_char_boundaries() {
        let text = "\u{212A}\u{130}\u{130}ab";
        assert_eq!(match_ranges(text, "ab"), vec![(7, 9)]);
        assert_eq!(match_ranges(text, "k"), vec![(0, 3)]);
        let dotted = match_ranges(text, "\u{130}");
        assert_eq!(dotted, vec![(3, 5), (5, 7)]);
        for (start, end) in dotted {
            assert_eq!(&text[start..end], "\u{130}");
        }
    }
}
