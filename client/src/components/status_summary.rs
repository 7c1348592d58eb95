//! Per-status count cards above the request and booking tables.

use leptos::prelude::*;

use crate::net::types::BookingStatus;
use crate::state::list_view::StatusCounts;

#[component]
pub fn StatusSummary(#[prop(into)] counts: Signal<StatusCounts>) -> impl IntoView {
    view! {
        <div class="status-summary">
            {BookingStatus::ALL
                .into_iter()
                .map(|status| {
                    view! {
                        <div class="stat-card">
                            <div class="stat-card__label">{status.summary_label()}</div>
                            <div class="stat-card__value">{move || counts.get().get(status)}</div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
