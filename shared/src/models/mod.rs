//! Data models
//!
//! Shared between hotpot-server and frontend (via API).
//! All timestamps are `i64` Unix millis; conversion to the business
//! timezone happens at the API handler layer, never here.

pub mod reservation;
pub mod table;

// Re-exports
pub use reservation::*;
pub use table::*;
