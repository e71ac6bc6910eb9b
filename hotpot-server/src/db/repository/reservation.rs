//! Reservation Repository

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{RepoError, RepoResult};
use crate::db::{Document, DocumentStore, RESERVATIONS};
use crate::utils::time::to_calendar_date;
use shared::models::Reservation;

/// At-rest record shape (id lives on the document). Field names are
/// the storage contract.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReservationRecord {
    table_id: String,
    customer_name: String,
    phone: String,
    guest_count: i32,
    reservation_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    created_at: i64,
}

/// Payload for a new reservation; id and created_at are assigned here
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub table_id: String,
    pub customer_name: String,
    pub phone: String,
    pub guest_count: i32,
    pub reservation_time: i64,
    pub note: Option<String>,
}

#[derive(Clone)]
pub struct ReservationRepository {
    store: Arc<dyn DocumentStore>,
}

impl ReservationRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn decode(doc: Document) -> RepoResult<Reservation> {
        let record: ReservationRecord = serde_json::from_value(doc.data)
            .map_err(|e| RepoError::Database(format!("Corrupt reservation record: {e}")))?;
        Ok(Reservation {
            id: doc.id,
            table_id: record.table_id,
            customer_name: record.customer_name,
            phone: record.phone,
            guest_count: record.guest_count,
            reservation_time: record.reservation_time,
            note: record.note,
            created_at: record.created_at,
        })
    }

    /// Find all reservations, newest first (`created_at` descending)
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let docs = self.store.list(RESERVATIONS).await?;
        let mut reservations = docs
            .into_iter()
            .map(Self::decode)
            .collect::<RepoResult<Vec<_>>>()?;
        reservations.sort_by_key(|r| std::cmp::Reverse(r.created_at));
        Ok(reservations)
    }

    /// Find the reservations of one table, insertion order
    pub async fn find_by_table(&self, table_id: &str) -> RepoResult<Vec<Reservation>> {
        let docs = self.store.list(RESERVATIONS).await?;
        let mut matched = Vec::new();
        for doc in docs {
            let reservation = Self::decode(doc)?;
            if reservation.table_id == table_id {
                matched.push(reservation);
            }
        }
        Ok(matched)
    }

    /// Persist a new reservation, returning it with the generated id
    pub async fn create(&self, data: NewReservation, created_at: i64) -> RepoResult<Reservation> {
        let record = ReservationRecord {
            table_id: data.table_id,
            customer_name: data.customer_name,
            phone: data.phone,
            guest_count: data.guest_count,
            reservation_time: data.reservation_time,
            note: data.note,
            created_at,
        };
        let value = serde_json::to_value(&record)
            .map_err(|e| RepoError::Database(format!("Serialize reservation record: {e}")))?;
        let id = self.store.insert(RESERVATIONS, value).await?;
        Ok(Reservation {
            id,
            table_id: record.table_id,
            customer_name: record.customer_name,
            phone: record.phone,
            guest_count: record.guest_count,
            reservation_time: record.reservation_time,
            note: record.note,
            created_at: record.created_at,
        })
    }

    /// Delete one reservation; `false` if it did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        Ok(self.store.delete_by_id(RESERVATIONS, id).await?)
    }

    /// Delete every reservation whose calendar date (in the business
    /// timezone) matches, returning the number actually removed.
    ///
    /// Records with a missing or unparseable `reservationTime` match
    /// no date and are left alone.
    pub async fn delete_by_date(&self, date: NaiveDate, tz: Tz) -> RepoResult<u64> {
        let removed = self
            .store
            .delete_many(RESERVATIONS, &|doc: &Document| {
                doc.data
                    .get("reservationTime")
                    .and_then(|v| v.as_i64())
                    .and_then(|millis| to_calendar_date(millis, tz))
                    .is_some_and(|d| d == date)
            })
            .await?;
        Ok(removed)
    }
}
