//! Wire records exchanged with the booking REST backend.
//!
//! DESIGN
//! ======
//! Records are passive: dates and timestamps stay as the strings the backend
//! sends, and optional text fields default to empty so a sparse row still
//! decodes. Status is the only closed vocabulary the client writes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// STATUS
// =============================================================================

/// Workflow status of a booking request or booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    New,
    InProgress,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Every status, in the order action buttons and filters list them.
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::Confirmed, Self::Cancelled];

    /// Wire value, also used as the query-string and select-option value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Heading of the summary card counting rows in this status.
    pub fn summary_label(self) -> &'static str {
        match self {
            Self::New => "Новые",
            Self::InProgress => "В работе",
            Self::Confirmed => "Подтверждено",
            Self::Cancelled => "Отменено",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four status values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

/// Status as received on a row.
///
/// The backend stores status as free text, so a row may carry a value the
/// client has no button for. Such rows still render; they are only left out
/// of the per-status counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowStatus {
    Known(BookingStatus),
    Other(String),
}

impl RowStatus {
    pub fn known(&self) -> Option<BookingStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Other(raw) => raw,
        }
    }

    pub fn is(&self, status: BookingStatus) -> bool {
        self.known() == Some(status)
    }
}

impl From<BookingStatus> for RowStatus {
    fn from(status: BookingStatus) -> Self {
        Self::Known(status)
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RowStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RowStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse::<BookingStatus>().map_or(Self::Other(raw), Self::Known))
    }
}

/// Rows that carry a workflow status.
pub trait HasStatus {
    fn id(&self) -> i64;
    fn status(&self) -> &RowStatus;
}

// =============================================================================
// RECORDS
// =============================================================================

/// A rentable house as listed in the public catalog and the admin table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub capacity: u32,
    pub base_price: i64,
    #[serde(default)]
    pub short_description: String,
}

/// A guest-submitted inquiry pending staff review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: i64,
    #[serde(default)]
    pub house_id: Option<i64>,
    pub guest_name: String,
    pub guest_phone: String,
    #[serde(default)]
    pub guest_comment: String,
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub guests_count: u32,
    pub status: RowStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A tracked stay, listed on the admin bookings page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub guest_name: String,
    #[serde(default)]
    pub guest_phone: String,
    pub check_in: String,
    pub check_out: String,
    pub status: RowStatus,
}

impl HasStatus for BookingRequest {
    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> &RowStatus {
        &self.status
    }
}

impl HasStatus for Booking {
    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> &RowStatus {
        &self.status
    }
}

/// One immutable record of an administrative action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub entity: String,
    #[serde(default)]
    pub entity_id: Option<i64>,
    pub action: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub payload: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AuditEntry {
    /// `entity:id`, with `-` standing in for a missing id.
    pub fn subject(&self) -> String {
        match self.entity_id {
            Some(id) => format!("{}:{id}", self.entity),
            None => format!("{}:-", self.entity),
        }
    }
}

fn deserialize_nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Body of `POST /booking-requests`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewBookingRequest {
    pub house_id: Option<i64>,
    pub guest_name: String,
    pub guest_phone: String,
    pub guest_comment: String,
    pub check_in: String,
    pub check_out: String,
    pub guests_count: u32,
}

/// Body of `POST /admin/houses`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewHouse {
    pub name: String,
    pub slug: String,
    pub capacity: u32,
    pub base_price: i64,
    pub short_description: String,
}

/// Body of the status `PATCH` endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

/// Identifier assigned by the backend to a newly created record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Created {
    pub id: i64,
}
