//! Database Module
//!
//! The engine never touches a concrete database: it consumes a generic
//! document-store collaborator ([`DocumentStore`]) injected as a trait
//! object. [`MemoryStore`](memory::MemoryStore) is the built-in
//! backend and doubles as the test fake; a persistent backend only has
//! to implement the same four operations.

pub mod memory;
pub mod repository;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use memory::MemoryStore;

/// Collection holding table records (`{name, capacity}`)
pub const TABLES: &str = "tables";
/// Collection holding reservation records
pub const RESERVATIONS: &str = "reservations";

/// A stored record: store-assigned id plus the JSON body
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Predicate used by bulk deletion
pub type DocPredicate<'a> = &'a (dyn Fn(&Document) -> bool + Sync);

/// Minimal document-store contract the engine depends on.
///
/// Insertion order within a collection is preserved by `list`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Full-scan enumeration of a collection
    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Insert a record, returning the generated id
    async fn insert(&self, collection: &str, data: Value) -> StoreResult<String>;

    /// Delete one record by id; `false` if no such record existed
    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<bool>;

    /// Delete every record matching the predicate, returning the
    /// number actually removed
    async fn delete_many(&self, collection: &str, predicate: DocPredicate<'_>)
    -> StoreResult<u64>;
}
