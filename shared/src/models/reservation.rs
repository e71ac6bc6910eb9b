//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation entity (预订)
///
/// `table_id` is a soft reference: the store enforces no foreign key,
/// so a reservation pointing at a deleted table simply belongs to no
/// visible table view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub table_id: String,
    pub customer_name: String,
    pub phone: String,
    pub guest_count: i32,
    /// Reservation instant, Unix millis
    pub reservation_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Creation instant, Unix millis. Only used for newest-first
    /// listing order, never for conflict logic.
    pub created_at: i64,
}

/// Raw reservation input as submitted by a client
///
/// `reservation_time` is the untouched client string
/// (`YYYY-MM-DDTHH:MM[:SS]` from a datetime-local input, or RFC 3339);
/// parsing happens inside validation and fails closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    #[serde(default)]
    pub table_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub guest_count: i32,
    #[serde(default)]
    pub reservation_time: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Why a draft was rejected, and which field to re-prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub field: String,
    pub reason: String,
}

impl Rejection {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
