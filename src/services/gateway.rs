use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::services::storage::{DocumentStore, Filter, StorageError, StoredDocument};

/// Field carrying the public identifier on every returned record.
pub const PUBLIC_ID: &str = "id";

/// A record as exposed across the API boundary.
pub type Record = Map<String, Value>;

/// Persists validated records into named collections and hands them back
/// with a public string id in place of the store's internal identifier.
#[derive(Clone)]
pub struct DocumentGateway {
    store: Arc<dyn DocumentStore>,
}

impl DocumentGateway {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// Insert `record` into `collection` and return its public id.
    ///
    /// Fields without a value are dropped; `created_at` and `updated_at`
    /// are stamped on the stored document. No deduplication: identical
    /// records get distinct ids.
    pub async fn create<R>(&self, collection: &str, record: &R) -> Result<String, StorageError>
    where
        R: Serialize + ?Sized,
    {
        let mut body = match serde_json::to_value(record)? {
            Value::Object(body) => body,
            _ => return Err(StorageError::NotAnObject),
        };
        body.retain(|_, value| !value.is_null());

        let now = Value::String(Utc::now().to_rfc3339());
        body.insert("created_at".to_string(), now.clone());
        body.insert("updated_at".to_string(), now);

        let id = self.store.insert(collection, body).await?;
        debug!(collection, %id, "document inserted");

        Ok(id.to_string())
    }

    /// Query `collection` with an exact-match filter, returning at most
    /// `limit` records in store order.
    pub async fn list(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Record>, StorageError> {
        let documents = self.store.find(collection, filter, limit).await?;
        debug!(collection, count = documents.len(), "documents fetched");

        Ok(documents.into_iter().map(public_record).collect())
    }
}

/// Replace the store's internal identifier with the public `id` string.
pub fn public_record(document: StoredDocument) -> Record {
    let StoredDocument { id, mut body } = document;
    body.insert(PUBLIC_ID.to_string(), Value::String(id.to_string()));
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory_store::MemoryDocumentStore;
    use serde_json::json;
    use uuid::Uuid;

    fn gateway() -> DocumentGateway {
        DocumentGateway::new(Arc::new(MemoryDocumentStore::new()))
    }

    #[test]
    fn test_public_record_renames_id() {
        let id = Uuid::new_v4();
        let mut body = Map::new();
        body.insert("name".to_string(), json!("Blue Tee"));

        let record = public_record(StoredDocument { id, body });
        assert_eq!(record[PUBLIC_ID], json!(id.to_string()));
        assert_eq!(record["name"], json!("Blue Tee"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_public_record_overrides_body_id() {
        let id = Uuid::new_v4();
        let mut body = Map::new();
        body.insert(PUBLIC_ID.to_string(), json!("spoofed"));

        let record = public_record(StoredDocument { id, body });
        assert_eq!(record[PUBLIC_ID], json!(id.to_string()));
    }

    #[tokio::test]
    async fn test_create_drops_nulls_and_stamps_times() {
        let gateway = gateway();
        let id = gateway
            .create("item", &json!({"name": "Blue Tee", "price": null}))
            .await
            .unwrap();

        let records = gateway.list("item", &Filter::new(), 10).await.unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record[PUBLIC_ID], json!(id));
        assert!(!record.contains_key("price"));
        assert!(record.contains_key("created_at"));
        assert_eq!(record["created_at"], record["updated_at"]);
    }

    #[tokio::test]
    async fn test_create_rejects_non_object() {
        let err = gateway().create("item", &json!([1, 2])).await.unwrap_err();
        assert!(matches!(err, StorageError::NotAnObject));
    }

    #[tokio::test]
    async fn test_create_is_not_idempotent() {
        let gateway = gateway();
        let record = json!({"name": "Blue Tee"});
        let a = gateway.create("item", &record).await.unwrap();
        let b = gateway.create("item", &record).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(gateway.list("item", &Filter::new(), 10).await.unwrap().len(), 2);
    }
}
