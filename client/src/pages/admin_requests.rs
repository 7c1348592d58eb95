//! Admin booking-request list with status/search filters and status actions.

#[cfg(test)]
#[path = "admin_requests_test.rs"]
mod admin_requests_test;

use leptos::prelude::*;

use crate::components::admin_nav::AdminShell;
use crate::components::data_table::{EmptyRow, TableHead, date_range};
use crate::components::list_feedback::ListFeedback;
use crate::components::status_actions::StatusActions;
use crate::components::status_filter::StatusFilter;
use crate::components::status_summary::StatusSummary;
use crate::config::ApiConfig;
use crate::net::query::RequestFilter;
use crate::net::types::{BookingRequest, BookingStatus};
use crate::state::list_view::ListState;
use crate::state::sources::BookingRequestSource;
use crate::util::tasks::{spawn_reload, spawn_set_status};

pub(crate) const REQUEST_COLUMNS: &[&str] = &["ID", "Имя", "Телефон", "Даты", "Статус", "Действия"];
pub(crate) const NO_REQUESTS: &str = "Нет заявок по фильтру";

/// `/admin`: incoming booking requests.
#[component]
pub fn AdminRequestsPage() -> impl IntoView {
    let source = BookingRequestSource(expect_context::<ApiConfig>().client());
    let list = RwSignal::new(ListState::<BookingRequest>::default());
    let filter = RwSignal::new(RequestFilter::default());

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
        <AdminShell title="Admin · Booking Requests">
            <StatusSummary counts=Signal::derive(move || list.with(ListState::status_counts))/>

            <div class="filter-bar">
                <input
                    class="filter-bar__input"
                    placeholder="Поиск: имя или телефон"
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <StatusFilter
                    value=Signal::derive(move || filter.with(|f| f.status))
                    on_change=Callback::new(move |status| filter.update(|f| f.status = status))
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
                <TableHead columns=REQUEST_COLUMNS/>
                <tbody>
                    {move || {
                        list.with(|s| s.rows.clone())
                            .into_iter()
                            .map(|row| view! { <RequestRow row=row on_status=on_status/> })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || list.with(ListState::shows_empty_row)>
                        <EmptyRow columns=REQUEST_COLUMNS message=NO_REQUESTS/>
                    </Show>
                </tbody>
            </table>
        </AdminShell>
    }
}

#[component]
fn RequestRow(row: BookingRequest, on_status: Callback<(i64, BookingStatus)>) -> impl IntoView {
    let dates = date_range(&row.check_in, &row.check_out);
    view! {
        <tr class="data-table__row">
            <td>{row.id}</td>
            <td>{row.guest_name}</td>
            <td>{row.guest_phone}</td>
            <td>{dates}</td>
            <td><b>{row.status.to_string()}</b></td>
            <td>
                <StatusActions id=row.id current=row.status on_select=on_status/>
            </td>
        </tr>
    }
}
