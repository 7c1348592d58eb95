//! Public booking-request form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page loads the house catalog once, pre-selects the first
//! house, and on submit posts a `NewBookingRequest`. The outcome is shown as
//! one line of text prefixed with ✅ or ❌; there is no retry.

#[cfg(test)]
#[path = "booking_form_test.rs"]
mod booking_form_test;

use crate::net::error::ApiError;
use crate::net::types::{Created, House, NewBookingRequest};

use super::forms::{FormError, bounded_int, optional_id, required};
use super::list_view::LoadPhase;

pub const DEFAULT_GUESTS: u32 = 2;
pub const MIN_GUESTS: i64 = 1;
pub const MAX_GUESTS: i64 = 20;

const FALLBACK_FAILURE: &str = "Ошибка отправки";

/// Raw input values, one per form control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingForm {
    pub house_id: String,
    pub guest_name: String,
    pub guest_phone: String,
    pub guest_comment: String,
    pub check_in: String,
    pub check_out: String,
    pub guests_count: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            house_id: String::new(),
            guest_name: String::new(),
            guest_phone: String::new(),
            guest_comment: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests_count: DEFAULT_GUESTS.to_string(),
        }
    }
}

impl BookingForm {
    /// Select the first catalog house, if there is one.
    pub fn preselect_first_house(&mut self, houses: &[House]) {
        if let Some(first) = houses.first() {
            self.house_id = first.id.to_string();
        }
    }

    /// Validate required fields and coerce numeric ones.
    ///
    /// # Errors
    ///
    /// Returns the first field that is blank, non-numeric or out of range.
    pub fn to_payload(&self) -> Result<NewBookingRequest, FormError> {
        let house_id = optional_id("Домик", &self.house_id)?;
        let guest_name = required("Имя", &self.guest_name)?;
        let guest_phone = required("Телефон", &self.guest_phone)?;
        let check_in = required("Заезд", &self.check_in)?;
        let check_out = required("Выезд", &self.check_out)?;
        let guests = bounded_int("Гостей", &self.guests_count, MIN_GUESTS, MAX_GUESTS)?;
        let guests_count = u32::try_from(guests).map_err(|_| FormError::InvalidNumber("Гостей"))?;
        Ok(NewBookingRequest {
            house_id,
            guest_name,
            guest_phone,
            guest_comment: self.guest_comment.trim().to_owned(),
            check_in,
            check_out,
            guests_count,
        })
    }
}

/// Inline result text for a finished submission.
pub fn submission_message(result: &Result<Created, ApiError>) -> String {
    match result {
        Ok(created) => format!("✅ Заявка отправлена! Номер: #{}", created.id),
        Err(err) => format!("❌ {}", failure_text(err)),
    }
}

fn failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Status { detail: Some(detail), .. } => detail.clone(),
        ApiError::Status { detail: None, .. } => FALLBACK_FAILURE.to_owned(),
        other => other.to_string(),
    }
}

/// Everything the landing page tracks: catalog, inputs and submit feedback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFormState {
    pub houses: Vec<House>,
    pub catalog: LoadPhase,
    pub form: BookingForm,
    pub submitting: bool,
    /// Last submission result, empty until the first submit.
    pub result: String,
}

impl BookingFormState {
    /// Store the catalog and pre-select its first house.
    pub fn catalog_loaded(&mut self, result: Result<Vec<House>, ApiError>) {
        match result {
            Ok(houses) => {
                self.form.preselect_first_house(&houses);
                self.houses = houses;
                self.catalog = LoadPhase::Loaded;
            }
            Err(e) => {
                leptos::logging::warn!("house catalog load failed: {e}");
                self.catalog = LoadPhase::Failed(format!("Не удалось загрузить домики: {e}"));
            }
        }
    }

    /// Start a submission: clears the previous result and builds the payload.
    ///
    /// Returns `None` when a submission is already running or the form is
    /// invalid; the latter is reported through `result`.
    pub fn begin_submit(&mut self) -> Option<NewBookingRequest> {
        if self.submitting {
            return None;
        }
        self.result.clear();
        match self.form.to_payload() {
            Ok(payload) => {
                self.submitting = true;
                Some(payload)
            }
            Err(e) => {
                self.result = format!("❌ {e}");
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: &Result<Created, ApiError>) {
        self.submitting = false;
        self.result = submission_message(result);
    }
}
