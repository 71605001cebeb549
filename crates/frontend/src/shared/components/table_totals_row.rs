use leptos::prelude::*;

/// Footer row of a list: a label cell spanning the leading columns, then the
/// caller's amount cells.
///
/// ```rust,ignore
/// <TableTotalsRow label=Signal::derive(move || format!("Orders: {}", count.get())) span=6>
///     <td class="text-right">{format_money(total)}</td>
/// </TableTotalsRow>
/// ```
#[component]
pub fn TableTotalsRow(
    #[prop(into)]
    label: Signal<String>,
    /// Columns covered by the label cell
    span: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <tr class="table__totals-row">
            <td colspan=span.to_string() class="table__totals-label">{move || label.get()}</td>
            {children()}
        </tr>
    }
}
