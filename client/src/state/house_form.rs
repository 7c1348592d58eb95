//! Admin "add house" form state.

#[cfg(test)]
#[path = "house_form_test.rs"]
mod house_form_test;

use crate::net::error::ApiError;
use crate::net::types::NewHouse;

use super::forms::{FormError, bounded_int, required};

pub const DEFAULT_CAPACITY: u32 = 4;
pub const MIN_CAPACITY: i64 = 1;
pub const MAX_CAPACITY: i64 = 20;
pub const MIN_PRICE: i64 = 0;
pub const MAX_PRICE: i64 = 10_000_000;

/// Raw input values of the house form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HouseForm {
    pub name: String,
    pub slug: String,
    pub capacity: String,
    pub base_price: String,
    pub short_description: String,
}

impl Default for HouseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            capacity: DEFAULT_CAPACITY.to_string(),
            base_price: "0".to_owned(),
            short_description: String::new(),
        }
    }
}

impl HouseForm {
    /// # Errors
    ///
    /// Returns the first blank required field or malformed number.
    pub fn to_payload(&self) -> Result<NewHouse, FormError> {
        let name = required("Название", &self.name)?;
        let slug = required("Slug", &self.slug)?;
        let capacity = bounded_int("Вместимость", &self.capacity, MIN_CAPACITY, MAX_CAPACITY)?;
        let capacity = u32::try_from(capacity).map_err(|_| FormError::InvalidNumber("Вместимость"))?;
        let base_price = bounded_int("Цена", &self.base_price, MIN_PRICE, MAX_PRICE)?;
        Ok(NewHouse {
            name,
            slug,
            capacity,
            base_price,
            short_description: self.short_description.trim().to_owned(),
        })
    }
}

/// Inputs plus submit feedback for the houses page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HouseFormState {
    pub form: HouseForm,
    pub submitting: bool,
    pub error: Option<String>,
}

impl HouseFormState {
    /// Start a submission, or record why the form cannot be sent.
    pub fn begin_submit(&mut self) -> Option<NewHouse> {
        if self.submitting {
            return None;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.submitting = true;
                self.error = None;
                Some(payload)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Reset the inputs after a successful create; keep them on failure.
    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form = HouseForm::default();
                self.error = None;
            }
            Err(e) => {
                leptos::logging::warn!("house create failed: {e}");
                self.error = Some(e.detail().map_or_else(|| e.to_string(), str::to_owned));
            }
        }
    }
}
