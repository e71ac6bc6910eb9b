//! Table Repository

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{RepoError, RepoResult};
use crate::db::{DocumentStore, TABLES};
use shared::models::{Table, TableCreate};

/// Default seat count when a create payload omits capacity
const DEFAULT_CAPACITY: i32 = 4;

/// At-rest record shape: `{name, capacity}` (id lives on the document)
#[derive(Debug, Serialize, Deserialize)]
struct TableRecord {
    name: String,
    capacity: i32,
}

#[derive(Clone)]
pub struct TableRepository {
    store: Arc<dyn DocumentStore>,
}

impl TableRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find all tables, insertion (seeding) order
    pub async fn find_all(&self) -> RepoResult<Vec<Table>> {
        let docs = self.store.list(TABLES).await?;
        let mut tables = Vec::with_capacity(docs.len());
        for doc in docs {
            let record: TableRecord = serde_json::from_value(doc.data)
                .map_err(|e| RepoError::Database(format!("Corrupt table record: {e}")))?;
            tables.push(Table {
                id: doc.id,
                name: record.name,
                capacity: record.capacity,
            });
        }
        Ok(tables)
    }

    /// Create a single table
    pub async fn create(&self, data: TableCreate) -> RepoResult<Table> {
        let record = TableRecord {
            name: data.name,
            capacity: data.capacity.unwrap_or(DEFAULT_CAPACITY),
        };
        let value = serde_json::to_value(&record)
            .map_err(|e| RepoError::Database(format!("Serialize table record: {e}")))?;
        let id = self.store.insert(TABLES, value).await?;
        Ok(Table {
            id,
            name: record.name,
            capacity: record.capacity,
        })
    }

    /// Inventory reset: drop every table, then seed `count` fresh ones.
    ///
    /// Seat tiering matches the floor layout: tables 1–10 seat 2,
    /// 11–30 seat 4, the rest seat 6. Returns the number seeded.
    pub async fn reset_and_seed(&self, count: u32) -> RepoResult<u32> {
        self.store.delete_many(TABLES, &|_| true).await?;
        for i in 1..=count {
            let capacity = match i {
                1..=10 => 2,
                11..=30 => 4,
                _ => 6,
            };
            let record = TableRecord {
                name: format!("Table {i}"),
                capacity,
            };
            let value = serde_json::to_value(&record)
                .map_err(|e| RepoError::Database(format!("Serialize table record: {e}")))?;
            self.store.insert(TABLES, value).await?;
        }
        Ok(count)
    }
}
