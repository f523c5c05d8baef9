use leptos::prelude::*;

/// Grand-total `<tr>` at the bottom of a summary table.
///
/// ```rust,ignore
/// <TableTotalsRow>
///     <td>"Grand Total"</td>
///     <td class="table__cell--right">{format_grouped(totals.revenue)}</td>
/// </TableTotalsRow>
/// ```
#[component]
pub fn TableTotalsRow(children: Children) -> impl IntoView {
    view! {
        <tr class="table__totals-row">
            {children()}
        </tr>
    }
}
