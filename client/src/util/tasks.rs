//! Browser task helpers that run list loads and status changes into signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from effects and click handlers. On the server they only
//! flip the list into `Loading`; the hydrated client does the actual fetch.
//! Overlapping calls are not coordinated: whichever finishes last wins.

use leptos::prelude::*;

use crate::net::types::BookingStatus;
use crate::state::list_view::{ListSource, ListState, StatusSource};
#[cfg(feature = "hydrate")]
use crate::state::list_view::set_status_and_reload;

/// Load `source` with `filter` into `list`.
pub fn spawn_reload<S>(source: S, filter: S::Filter, list: RwSignal<ListState<S::Row>>)
where
    S: ListSource + 'static,
    S::Row: Send + Sync + 'static,
    S::Filter: 'static,
{
    list.update(ListState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = source.fetch(&filter).await;
        let _ = list.try_update(|s| s.finish_load(result));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (source, filter);
    }
}

/// PATCH one row's status, then reload `list` with `filter`.
pub fn spawn_set_status<S>(
    source: S,
    filter: S::Filter,
    list: RwSignal<ListState<S::Row>>,
    id: i64,
    status: BookingStatus,
) where
    S: StatusSource + 'static,
    S::Row: Send + Sync + 'static,
    S::Filter: 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = set_status_and_reload(&source, &filter, id, status).await;
        let _ = list.try_update(|s| s.apply_mutation(outcome));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (source, filter, list, id, status);
    }
}
