//! Reservation lifecycle service
//!
//! Orchestrates create/cancel and the date-scoped sweep around the
//! validator and the repositories. Holds one lock per table so that a
//! create is read-validate-insert atomic per table: without it, two
//! concurrent creates could both snapshot the table before the other's
//! insert and both pass the spacing check.

use chrono::NaiveDate;
use chrono_tz::Tz;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use super::validator::validate;
use super::views::build_table_views;
use crate::db::DocumentStore;
use crate::db::repository::reservation::NewReservation;
use crate::db::repository::{RepoError, RepoResult, ReservationRepository, TableRepository};
use crate::utils::time::now_millis;
use shared::models::{Rejection, Reservation, ReservationDraft, TableView};

/// Why a create did not produce a reservation
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    /// The draft failed a validation rule; nothing was persisted.
    #[error("Reservation rejected ({}): {}", .0.field, .0.reason)]
    Rejected(Rejection),

    /// The store collaborator failed; nothing was persisted.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub struct BookingService {
    tables: TableRepository,
    reservations: ReservationRepository,
    tz: Tz,
    min_gap_hours: f64,
    // One mutex per table id with a create in flight. Entries are
    // evicted as soon as no task holds or awaits them, so the map is
    // bounded by concurrent creates, not by every id ever submitted.
    table_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl BookingService {
    pub fn new(store: Arc<dyn DocumentStore>, tz: Tz, min_gap_hours: f64) -> Self {
        Self {
            tables: TableRepository::new(store.clone()),
            reservations: ReservationRepository::new(store),
            tz,
            min_gap_hours,
            table_locks: DashMap::new(),
        }
    }

    /// Current table views: every table joined with its reservations.
    ///
    /// Recomputed from the backing sets on every call, so the result
    /// is always fresh. Reservations are newest-first overall.
    pub async fn table_views(&self) -> RepoResult<Vec<TableView>> {
        let tables = self.tables.find_all().await?;
        let reservations = self.reservations.find_all().await?;
        Ok(build_table_views(&tables, &reservations))
    }

    /// All reservations, newest first
    pub async fn list_reservations(&self) -> RepoResult<Vec<Reservation>> {
        self.reservations.find_all().await
    }

    /// Validate and persist a new reservation.
    ///
    /// Holds the table's lock across the read-validate-insert sequence,
    /// so two creates for the same table are serialized and cannot
    /// both slip under the spacing rule. On rejection nothing is
    /// persisted and the rejection is returned untouched.
    pub async fn create(&self, draft: ReservationDraft) -> Result<Reservation, CreateError> {
        if draft.table_id.trim().is_empty() {
            return Err(CreateError::Rejected(Rejection::new(
                "tableId",
                "a table must be selected",
            )));
        }

        let table_key = draft.table_id.clone();
        let lock = self
            .table_locks
            .entry(table_key.clone())
            .or_default()
            .clone();
        let result = self.create_locked(draft, &lock).await;

        // Evict the entry unless another create still holds a clone.
        // Cloning out of the map and remove_if both go through the
        // shard lock, so a waiter's clone is never invalidated.
        drop(lock);
        self.table_locks
            .remove_if(&table_key, |_, l| Arc::strong_count(l) == 1);
        result
    }

    async fn create_locked(
        &self,
        draft: ReservationDraft,
        lock: &Mutex<()>,
    ) -> Result<Reservation, CreateError> {
        let _guard = lock.lock().await;

        let existing = self.reservations.find_by_table(&draft.table_id).await?;
        let accepted = validate(&draft, &existing, now_millis(), self.tz, self.min_gap_hours)
            .map_err(CreateError::Rejected)?;

        let reservation = self
            .reservations
            .create(
                NewReservation {
                    table_id: draft.table_id,
                    customer_name: draft.customer_name,
                    phone: draft.phone,
                    guest_count: draft.guest_count,
                    reservation_time: accepted.reservation_time,
                    note: draft.note,
                },
                now_millis(),
            )
            .await?;

        info!(
            reservation_id = %reservation.id,
            table_id = %reservation.table_id,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Cancel one reservation by id.
    ///
    /// A missing id is NotFound, never a silent no-op: callers can
    /// tell "already gone" apart from "succeeded".
    pub async fn cancel(&self, id: &str) -> RepoResult<()> {
        let removed = self.reservations.delete(id).await?;
        if !removed {
            return Err(RepoError::NotFound(format!("Reservation {id} not found")));
        }
        info!(reservation_id = %id, "Reservation cancelled");
        Ok(())
    }

    /// Delete every reservation falling on `date` in the business
    /// timezone; returns the number actually removed.
    pub async fn sweep_by_date(&self, date: NaiveDate) -> RepoResult<u64> {
        let removed = self.reservations.delete_by_date(date, self.tz).await?;
        info!(%date, removed, "Reservation sweep completed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, RESERVATIONS};
    use crate::utils::time::parse_date;

    fn service() -> (Arc<MemoryStore>, BookingService) {
        let store = Arc::new(MemoryStore::new());
        let service = BookingService::new(store.clone(), chrono_tz::UTC, 3.0);
        (store, service)
    }

    fn draft(table_id: &str, time: &str) -> ReservationDraft {
        ReservationDraft {
            table_id: table_id.into(),
            customer_name: "Nguyen Van A".into(),
            phone: "0912345678".into(),
            guest_count: 4,
            reservation_time: time.into(),
            note: None,
        }
    }

    #[tokio::test]
    async fn create_persists_and_returns_the_reservation() {
        let (store, service) = service();
        let created = service.create(draft("t1", "2030-06-01T19:00")).await.unwrap();
        assert!(!created.id.is_empty());

        let docs = store.list(RESERVATIONS).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, created.id);
        assert_eq!(docs[0].data["customerName"], "Nguyen Van A");
    }

    #[tokio::test]
    async fn rejected_draft_persists_nothing() {
        let (store, service) = service();
        let mut bad = draft("t1", "2030-06-01T19:00");
        bad.phone = "12345".into();

        match service.create(bad).await {
            Err(CreateError::Rejected(rej)) => assert_eq!(rej.field, "phone"),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(store.list(RESERVATIONS).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_table_id_is_rejected() {
        let (_, service) = service();
        match service.create(draft("  ", "2030-06-01T19:00")).await {
            Err(CreateError::Rejected(rej)) => assert_eq!(rej.field, "tableId"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn spacing_is_enforced_per_table_only() {
        let (_, service) = service();
        service.create(draft("t1", "2030-06-01T19:00")).await.unwrap();

        // 2.5h later on the same table: conflict
        match service.create(draft("t1", "2030-06-01T21:30")).await {
            Err(CreateError::Rejected(rej)) => assert_eq!(rej.field, "reservationTime"),
            other => panic!("expected conflict, got {other:?}"),
        }

        // exactly 3h later on the same table: allowed
        service.create(draft("t1", "2030-06-01T22:00")).await.unwrap();

        // 2h gap but on a different table: allowed
        service.create(draft("t2", "2030-06-01T21:00")).await.unwrap();
    }

    #[tokio::test]
    async fn lock_map_does_not_grow_with_distinct_table_ids() {
        let (_, service) = service();
        for i in 0..20 {
            service
                .create(draft(&format!("t{i}"), "2030-06-01T19:00"))
                .await
                .unwrap();
        }

        // rejected drafts leave nothing behind either
        let mut bad = draft("t-rejected", "2030-06-01T19:00");
        bad.phone = "12345".into();
        let _ = service.create(bad).await;

        assert!(service.table_locks.is_empty());
    }

    #[tokio::test]
    async fn cancel_unknown_id_is_not_found_and_touches_nothing() {
        let (store, service) = service();
        service.create(draft("t1", "2030-06-01T19:00")).await.unwrap();

        match service.cancel("no-such-id").await {
            Err(RepoError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(store.list(RESERVATIONS).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cancel_removes_the_reservation() {
        let (store, service) = service();
        let created = service.create(draft("t1", "2030-06-01T19:00")).await.unwrap();
        service.cancel(&created.id).await.unwrap();
        assert!(store.list(RESERVATIONS).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sweep_deletes_exactly_the_matching_date() {
        let (_, service) = service();
        service.create(draft("t1", "2030-05-01T12:00")).await.unwrap();
        service.create(draft("t1", "2030-05-01T19:00")).await.unwrap();
        service.create(draft("t2", "2030-05-02T19:00")).await.unwrap();

        let removed = service
            .sweep_by_date(parse_date("2030-05-01").unwrap())
            .await
            .unwrap();
        assert_eq!(removed, 2);

        let remaining = service.list_reservations().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].table_id, "t2");

        // sweeping again removes nothing
        let removed = service
            .sweep_by_date(parse_date("2030-05-01").unwrap())
            .await
            .unwrap();
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn table_views_join_fresh_data() {
        let (store, service) = service();
        let tables = TableRepository::new(store.clone());
        tables
            .create(shared::models::TableCreate {
                name: "Table 1".into(),
                capacity: None,
            })
            .await
            .unwrap();

        let views = service.table_views().await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].reservation_count, 0);

        let table_id = views[0].id.clone();
        service
            .create(draft(&table_id, "2030-06-01T19:00"))
            .await
            .unwrap();

        let views = service.table_views().await.unwrap();
        assert_eq!(views[0].reservation_count, 1);
        assert_eq!(views[0].reservations[0].guest_count, 4);
    }
}
