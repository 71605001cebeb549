use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Amount cell of a list; an absent value renders empty.
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// Negative amounts (payments, overdrafts) in red
    #[prop(optional)]
    color_by_sign: bool,
) -> impl IntoView {
    let class = move || {
        if color_by_sign && value.get().is_some_and(|v| v < 0.0) {
            "money money--negative"
        } else {
            "money"
        }
    };

    view! {
        <TableCell class="text-right">
            <span class=class>{move || value.get().map(format_money).unwrap_or_default()}</span>
        </TableCell>
    }
}
