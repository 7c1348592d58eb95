//! Admin bookings list with status and date-range filters.

#[cfg(test)]
#[path = "admin_bookings_test.rs"]
mod admin_bookings_test;

use leptos::prelude::*;

use crate::components::admin_nav::AdminShell;
use crate::components::data_table::{EmptyRow, TableHead, date_range};
use crate::components::list_feedback::ListFeedback;
use crate::components::status_actions::StatusActions;
use crate::components::status_filter::StatusFilter;
use crate::components::status_summary::StatusSummary;
use crate::config::ApiConfig;
use crate::net::query::BookingFilter;
use crate::net::types::{Booking, BookingStatus};
use crate::state::list_view::ListState;
use crate::state::sources::BookingSource;
use crate::util::tasks::{spawn_reload, spawn_set_status};

pub(crate) const BOOKING_COLUMNS: &[&str] = &["ID", "Гость", "Телефон", "Даты", "Статус", "Действия"];
pub(crate) const NO_BOOKINGS: &str = "Нет бронирований по фильтру";

/// `/admin/bookings`.
#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    let source = BookingSource(expect_context::<ApiConfig>().client());
    let list = RwSignal::new(ListState::<Booking>::default());
    let filter = RwSignal::new(BookingFilter::default());

    let reload = {
        let source = source.clone();
        move || spawn_reload(source.clone(), filter.get_untracked(), list)
    };
    Effect::new({
        let reload = reload.clone();
        move || reload()
    });

    let on_status = Callback::new(move |(id, status): (i64, BookingStatus)| {
        spawn_set_status(source.clone(), filter.get_untracked(), list, id, status);
    });

    view! {
        <AdminShell title="Admin · Bookings">
            <StatusSummary counts=Signal::derive(move || list.with(ListState::status_counts))/>

            <div class="filter-bar">
                <StatusFilter
                    value=Signal::derive(move || filter.with(|f| f.status))
                    on_change=Callback::new(move |status| filter.update(|f| f.status = status))
                />
                <input
                    class="filter-bar__input"
                    type="date"
                    prop:value=move || filter.with(|f| f.date_from.clone())
                    on:input=move |ev| filter.update(|f| f.date_from = event_target_value(&ev))
                />
                <input
                    class="filter-bar__input"
                    type="date"
                    prop:value=move || filter.with(|f| f.date_to.clone())
                    on:input=move |ev| filter.update(|f| f.date_to = event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| reload()>
                    "Фильтровать"
                </button>
            </div>

            <ListFeedback
                loading=Signal::derive(move || list.with(ListState::is_loading))
                error=Signal::derive(move || list.with(|s| s.error().map(str::to_owned)))
                notice=Signal::derive(move || list.with(|s| s.notice.clone()))
            />

            <table class="data-table">
                <TableHead columns=BOOKING_COLUMNS/>
                <tbody>
                    {move || {
                        list.with(|s| s.rows.clone())
                            .into_iter()
                            .map(|row| view! { <BookingRow row=row on_status=on_status/> })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || list.with(ListState::shows_empty_row)>
                        <EmptyRow columns=BOOKING_COLUMNS message=NO_BOOKINGS/>
                    </Show>
                </tbody>
            </table>
        </AdminShell>
    }
}

#[component]
fn BookingRow(row: Booking, on_status: Callback<(i64, BookingStatus)>) -> impl IntoView {
    let dates = date_range(&row.check_in, &row.check_out);
    view! {
        <tr class="data-table__row">
            <td>{row.id}</td>
            <td>{row.guest_name}</td>
            <td>{row.guest_phone}</td>
            <td>{dates}</td>
            <td>{row.status.to_string()}</td>
            <td>
                <StatusActions id=row.id current=row.status on_select=on_status/>
            </td>
        </tr>
    }
}
