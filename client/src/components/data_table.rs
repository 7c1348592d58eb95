//! Table building blocks shared by the admin list views.
//!
//! DESIGN
//! ======
//! Each view declares its column headings once; the header and the empty
//! row both derive from that list so the "no results" cell always spans
//! the full width.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

/// `check_in → check_out` as shown in the "dates" column.
pub fn date_range(check_in: &str, check_out: &str) -> String {
    format!("{check_in} → {check_out}")
}

/// Column count the empty row must span.
pub fn empty_row_span(columns: &[&str]) -> usize {
    columns.len().max(1)
}

#[component]
pub fn TableHead(columns: &'static [&'static str]) -> impl IntoView {
    view! {
        <thead>
            <tr>
                {columns.iter().map(|name| view! { <th class="data-table__th">{*name}</th> }).collect::<Vec<_>>()}
            </tr>
        </thead>
    }
}

/// The single row shown when a loaded list has no rows.
#[component]
pub fn EmptyRow(columns: &'static [&'static str], message: &'static str) -> impl IntoView {
    view! {
        <tr class="data-table__empty">
            <td colspan=empty_row_span(columns).to_string()>{message}</td>
        </tr>
    }
}
