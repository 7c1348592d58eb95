//! Field checks shared by the booking and house forms.
//!
//! Inputs keep raw strings, exactly what the DOM hands back; these helpers
//! run once at submit time to turn them into a typed payload.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// A form value that cannot be sent. Field names are the visible labels.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("заполните поле «{0}»")]
    Missing(&'static str),
    #[error("некорректное число в поле «{0}»")]
    InvalidNumber(&'static str),
    #[error("значение поля «{field}» должно быть от {min} до {max}")]
    OutOfRange { field: &'static str, min: i64, max: i64 },
}

/// Trimmed `value`, or `Missing(label)` when blank.
pub fn required(label: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(FormError::Missing(label)) } else { Ok(trimmed.to_owned()) }
}

/// Parse an integer input, enforcing the same bounds as its `min`/`max` attributes.
pub fn bounded_int(label: &'static str, value: &str, min: i64, max: i64) -> Result<i64, FormError> {
    let parsed: i64 = value.trim().parse().map_err(|_| FormError::InvalidNumber(label))?;
    if (min..=max).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(FormError::OutOfRange { field: label, min, max })
    }
}

/// Parse an optional integer id; blank means "none selected".
pub fn optional_id(label: &'static str, value: &str) -> Result<Option<i64>, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some).map_err(|_| FormError::InvalidNumber(label))
}
