//! List-filter-mutate state shared by the admin tables.
//!
//! DESIGN
//! ======
//! A view holds the rows of its latest query and a load phase. Loads replace
//! the rows wholesale; a status change is one PATCH followed by one full
//! reload, never an optimistic local edit. Failures are kept as text so the
//! view can show them instead of hanging in `Loading`.

#[cfg(test)]
#[path = "list_view_test.rs"]
mod list_view_test;

use crate::net::error::ApiError;
use crate::net::types::{BookingStatus, HasStatus};

/// Where the latest load of a list stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Rows of the latest query plus load and mutation feedback.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub phase: LoadPhase,
    /// Failure of the last status change, shown above the table.
    pub notice: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), phase: LoadPhase::Loading, notice: None }
    }
}

impl<T> ListState<T> {
    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Store a load result. A failed load keeps the previous rows visible.
    pub fn finish_load(&mut self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                leptos::logging::warn!("list load failed: {e}");
                self.phase = LoadPhase::Failed(load_failed_message(&e));
            }
        }
    }

    /// Store the outcome of a status change and the reload that followed it.
    pub fn apply_mutation(&mut self, outcome: MutationOutcome<T>) {
        self.notice = outcome.patch.err().map(|e| {
            leptos::logging::warn!("status update failed: {e}");
            update_failed_message(&e)
        });
        self.finish_load(outcome.reload);
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the table should render its single "no results" row.
    pub fn shows_empty_row(&self) -> bool {
        self.phase == LoadPhase::Loaded && self.rows.is_empty()
    }
}

impl<T: HasStatus> ListState<T> {
    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.rows)
    }
}

fn load_failed_message(err: &ApiError) -> String {
    format!("Не удалось загрузить данные: {err}")
}

fn update_failed_message(err: &ApiError) -> String {
    format!("Не удалось обновить статус: {err}")
}

// =============================================================================
// STATUS COUNTS
// =============================================================================

/// Number of loaded rows per status. Unknown statuses are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub new: usize,
    pub in_progress: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn tally<T: HasStatus>(rows: &[T]) -> Self {
        let mut counts = Self::default();
        for status in rows.iter().filter_map(|row| row.status().known()) {
            *counts.slot(status) += 1;
        }
        counts
    }

    pub fn get(&self, status: BookingStatus) -> usize {
        match status {
            BookingStatus::New => self.new,
            BookingStatus::InProgress => self.in_progress,
            BookingStatus::Confirmed => self.confirmed,
            BookingStatus::Cancelled => self.cancelled,
        }
    }

    fn slot(&mut self, status: BookingStatus) -> &mut usize {
        match status {
            BookingStatus::New => &mut self.new,
            BookingStatus::InProgress => &mut self.in_progress,
            BookingStatus::Confirmed => &mut self.confirmed,
            BookingStatus::Cancelled => &mut self.cancelled,
        }
    }
}

// =============================================================================
// SOURCES
// =============================================================================

/// Something a list view can load rows from.
#[allow(async_fn_in_trait)]
pub trait ListSource {
    type Row;
    type Filter;

    async fn fetch(&self, filter: &Self::Filter) -> Result<Vec<Self::Row>, ApiError>;
}

/// A list whose rows accept status changes.
#[allow(async_fn_in_trait)]
pub trait StatusSource: ListSource {
    async fn update_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError>;
}

/// Result of a status change and of the reload issued after it.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationOutcome<T> {
    pub patch: Result<(), ApiError>,
    pub reload: Result<Vec<T>, ApiError>,
}

/// Change one row's status, then reload the whole list with `filter`.
///
/// The reload runs whether or not the PATCH succeeded.
pub async fn set_status_and_reload<S: StatusSource>(
    source: &S,
    filter: &S::Filter,
    id: i64,
    status: BookingStatus,
) -> MutationOutcome<S::Row> {
    let patch = source.update_status(id, status).await;
    let reload = source.fetch(filter).await;
    MutationOutcome { patch, reload }
}
