//! Table Model

use serde::{Deserialize, Serialize};

use super::Reservation;

/// Dining table entity (桌台)
///
/// Created in bulk by the inventory reset, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub capacity: i32,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub name: String,
    pub capacity: Option<i32>,
}

/// A table joined with its current reservations (derived, never persisted)
///
/// Recomputed from the table and reservation sets on every read, so it
/// is always fresh relative to the backing data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub id: String,
    pub name: String,
    pub capacity: i32,
    pub reservation_count: usize,
    pub reservations: Vec<Reservation>,
}
