//! Booking engine (预订引擎)
//!
//! The only non-CRUD logic in the system:
//!
//! - [`views`] - joins the reservation set against the table set
//! - [`validator`] - accept/reject rules for a proposed reservation
//! - [`service`] - create/cancel/sweep orchestration around the two

pub mod service;
pub mod validator;
pub mod views;

pub use service::{BookingService, CreateError};
pub use validator::{AcceptedDraft, validate};
pub use views::build_table_views;
