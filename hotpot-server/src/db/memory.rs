//! In-memory document store
//!
//! DashMap of collection name → record vector. Insertion order is
//! preserved, ids are UUID v4. This is the default backend for a
//! single-restaurant deployment and the substitute store for tests.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

use super::{DocPredicate, Document, DocumentStore, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.clone())
            .unwrap_or_default())
    }

    async fn insert(&self, collection: &str, data: Value) -> StoreResult<String> {
        let id = Uuid::new_v4().to_string();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                data,
            });
        Ok(id)
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok(docs.len() < before)
    }

    async fn delete_many(
        &self,
        collection: &str,
        predicate: DocPredicate<'_>,
    ) -> StoreResult<u64> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|d| !predicate(d));
        Ok((before - docs.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_then_list_preserves_order() {
        let store = MemoryStore::new();
        let a = store.insert("c", json!({"n": 1})).await.unwrap();
        let b = store.insert("c", json!({"n": 2})).await.unwrap();
        assert_ne!(a, b);

        let docs = store.list("c").await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, a);
        assert_eq!(docs[1].id, b);
        assert_eq!(docs[1].data["n"], 2);
    }

    #[tokio::test]
    async fn list_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.list("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_by_id_reports_whether_it_removed() {
        let store = MemoryStore::new();
        let id = store.insert("c", json!({})).await.unwrap();
        assert!(store.delete_by_id("c", &id).await.unwrap());
        assert!(!store.delete_by_id("c", &id).await.unwrap());
        assert!(!store.delete_by_id("other", "x").await.unwrap());
    }

    #[tokio::test]
    async fn delete_many_counts_actual_removals() {
        let store = MemoryStore::new();
        for n in 0..5 {
            store.insert("c", json!({"n": n})).await.unwrap();
        }
        let removed = store
            .delete_many("c", &|d| d.data["n"].as_i64().unwrap_or(0) % 2 == 0)
            .await
            .unwrap();
        assert_eq!(removed, 3);
        assert_eq!(store.list("c").await.unwrap().len(), 2);
    }
}
