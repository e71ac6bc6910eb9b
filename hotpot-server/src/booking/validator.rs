//! Availability validator
//!
//! Decides whether a proposed reservation is accepted against the
//! table's existing reservations. Checks run in a fixed order and
//! short-circuit on the first failure, so the reported field is
//! deterministic for the UI.
//!
//! A reservation occupies a point in time, not an interval: the only
//! temporal rule is a minimum gap (strict `<`) to every other
//! reservation on the same table. Exactly the minimum gap apart is
//! allowed. Reservations on other tables never conflict.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::utils::time::{hours_between, is_past, parse_reservation_time};
use crate::utils::validation::is_valid_phone;
use shared::models::{Rejection, Reservation, ReservationDraft};

/// A draft that passed validation, with its reservation time parsed
/// to Unix millis so the caller does not re-parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptedDraft {
    pub reservation_time: i64,
}

fn format_instant(millis: i64, tz: Tz) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Validate a reservation draft against the same table's existing
/// reservations.
///
/// `existing` must already be scoped to the draft's table; the
/// candidate itself is never part of it. Field checks run first
/// (name, phone, guest count, time), then the spacing scan walks
/// `existing` first-to-last and reports the first entry closer than
/// `min_gap_hours`.
pub fn validate(
    draft: &ReservationDraft,
    existing: &[Reservation],
    now_millis: i64,
    tz: Tz,
    min_gap_hours: f64,
) -> Result<AcceptedDraft, Rejection> {
    // 1. customer name
    if draft.customer_name.trim().is_empty() {
        return Err(Rejection::new(
            "customerName",
            "customer name must not be empty",
        ));
    }

    // 2. phone
    if !is_valid_phone(&draft.phone) {
        return Err(Rejection::new(
            "phone",
            "phone must be 10 digits starting with 0",
        ));
    }

    // 3. guest count
    if draft.guest_count < 1 {
        return Err(Rejection::new(
            "guestCount",
            "guest count must be at least 1",
        ));
    }

    // 4. reservation time: parseable, not in the past
    let Some(reservation_time) = parse_reservation_time(&draft.reservation_time, tz) else {
        return Err(Rejection::new(
            "reservationTime",
            "reservation time is not a valid date and time",
        ));
    };
    if is_past(reservation_time, now_millis) {
        return Err(Rejection::new(
            "reservationTime",
            "reservation time is in the past",
        ));
    }

    // 5. spacing rule: strict < gap to any reservation on this table
    for other in existing {
        if hours_between(reservation_time, other.reservation_time) < min_gap_hours {
            return Err(Rejection::new(
                "reservationTime",
                format!(
                    "slot conflict: within {} hours of the reservation at {}",
                    min_gap_hours,
                    format_instant(other.reservation_time, tz)
                ),
            ));
        }
    }

    Ok(AcceptedDraft { reservation_time })
}
