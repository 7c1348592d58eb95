//! Row-level status buttons.
//!
//! One button per status; the row's current status is rendered dimmed but
//! stays clickable, matching the backend's idempotent PATCH.

use leptos::prelude::*;

use crate::net::types::{BookingStatus, RowStatus};

#[component]
pub fn StatusActions(id: i64, current: RowStatus, on_select: Callback<(i64, BookingStatus)>) -> impl IntoView {
    view! {
        <div class="status-actions">
            {BookingStatus::ALL
                .into_iter()
                .map(|status| {
                    let class = if current.is(status) {
                        "status-actions__btn status-actions__btn--current"
                    } else {
                        "status-actions__btn"
                    };
                    view! {
                        <button
                            class=class
                            on:click=move |_| on_select.run((id, status))
                        >
                            {status.as_str()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
