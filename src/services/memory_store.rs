use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::services::storage::{Document, DocumentStore, Filter, StorageError, StoredDocument};

/// In-process document store. Collections keep insertion order.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &StoredDocument, filter: &Filter) -> bool {
    filter
        .iter()
        .all(|(field, expected)| document.body.get(field) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, collection: &str, body: Document) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, body });
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, StorageError> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(documents
            .iter()
            .filter(|doc| matches(doc, filter))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        let mut names: Vec<String> = self
            .collections
            .read()
            .await
            .iter()
            .filter(|(_, documents)| !documents.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let store = MemoryDocumentStore::new();
        let a = store.insert("item", doc(json!({"name": "a"}))).await.unwrap();
        let b = store.insert("item", doc(json!({"name": "a"}))).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_find_exact_match_and_limit() {
        let store = MemoryDocumentStore::new();
        for (name, category) in [("a", "top"), ("b", "shoes"), ("c", "top"), ("d", "top")] {
            store
                .insert("item", doc(json!({"name": name, "category": category})))
                .await
                .unwrap();
        }

        let filter = doc(json!({"category": "top"}));
        let found = store.find("item", &filter, 2).await.unwrap();
        let names: Vec<_> = found.iter().map(|d| d.body["name"].clone()).collect();
        assert_eq!(names, vec![json!("a"), json!("c")]);

        let all = store.find("item", &Filter::new(), 100).await.unwrap();
        assert_eq!(all.len(), 4);

        assert!(store.find("item", &filter, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filter_does_not_match_missing_field() {
        let store = MemoryDocumentStore::new();
        store.insert("item", doc(json!({"name": "a"}))).await.unwrap();

        let filter = doc(json!({"color": "red"}));
        assert!(store.find("item", &filter, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryDocumentStore::new();
        store.insert("item", doc(json!({"name": "a"}))).await.unwrap();
        store.insert("lookjob", doc(json!({"status": "queued"}))).await.unwrap();

        assert_eq!(store.find("item", &Filter::new(), 10).await.unwrap().len(), 1);
        assert!(store.find("unknown", &Filter::new(), 10).await.unwrap().is_empty());
        assert_eq!(
            store.collection_names().await.unwrap(),
            vec!["item".to_string(), "lookjob".to_string()]
        );
    }
}
