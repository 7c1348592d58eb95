//! Status `<select>` used by the request and booking filters.

use leptos::prelude::*;

use crate::net::query::parse_status_option;
use crate::net::types::BookingStatus;

/// Select with an "all statuses" option followed by one option per status.
#[component]
pub fn StatusFilter(
    #[prop(into)] value: Signal<Option<BookingStatus>>,
    on_change: Callback<Option<BookingStatus>>,
) -> impl IntoView {
    view! {
        <select
            class="filter-bar__input"
            prop:value=move || value.get().map_or("", BookingStatus::as_str)
            on:change=move |ev| on_change.run(parse_status_option(&event_target_value(&ev)))
        >
            <option value="">"Все статусы"</option>
            {BookingStatus::ALL
                .into_iter()
                .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}
