//! Shared types for the Hotpot reservation system
//!
//! Wire and domain model types used by the server and any API client:
//! tables, reservations, derived table views and the validation
//! rejection shape.

pub mod models;

// Re-exports
pub use models::{
    Rejection, Reservation, ReservationDraft, Table, TableCreate, TableView,
};
pub use serde::{Deserialize, Serialize};
