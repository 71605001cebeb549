//! Stroke icons (24x24 grid) used by the sidebar, toolbars and pagination.

use leptos::prelude::*;

/// Path data per icon; shapes are written as paths so one renderer covers all.
fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "banking" => &["M3 21h18", "M3 10h18", "M12 3l9 5H3z", "M6 10v8", "M10 10v8", "M14 10v8", "M18 10v8"],
        "sales" => &["M14 2H6a2 2 0 0 0-2 2v16l4-2 4 2 4-2 4 2V8z", "M14 2v6h6", "M8 13h8", "M8 17h5"],
        "inventory" => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12l8.73-5.04",
            "M12 22V12",
        ],
        "ledger" => &["M4 19.5A2.5 2.5 0 0 1 6.5 17H20", "M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z", "M9 7h7", "M9 11h5"],
        "setup" => &["M4 21v-7", "M4 10V3", "M12 21v-9", "M12 8V3", "M20 21v-5", "M20 12V3", "M1 14h6", "M9 8h6", "M17 16h6"],
        "users" => &["M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z"],
        "menu" => &["M3 6h18", "M3 12h18", "M3 18h18"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "refresh" => &["M23 4v6h-6", "M1 20v-6h6", "M3.51 9a9 9 0 0 1 14.85-3.36L23 10", "M1 14l4.64 4.36A9 9 0 0 0 20.49 15"],
        "edit" => &["M12 20h9", "M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"],
        "delete" => &["M3 6h18", "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6", "M10 11v6", "M14 11v6", "M9 6V4h6v2"],
        "check" => &["M20 6 9 17l-5-5"],
        "alert" => &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z", "M12 8v4", "M12 16h.01"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevron-down" => &["M6 9l6 6 6-6"],
        "chevrons-left" => &["M11 17l-5-5 5-5", "M18 17l-5-5 5-5"],
        "chevrons-right" => &["M13 17l5-5-5-5", "M6 17l5-5-5-5"],
        _ => &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z"],
    }
}

/// Sidebar group icons are larger than inline ones.
fn size(name: &str) -> u32 {
    match name {
        "banking" | "sales" | "inventory" | "ledger" | "setup" | "users" => 20,
        _ => 16,
    }
}

pub fn icon(name: &str) -> AnyView {
    let size = size(name);
    let paths = paths(name);
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
