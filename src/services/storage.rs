use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::queries;

/// Body of a persisted document, without its identifier.
pub type Document = Map<String, Value>;

/// Exact-match filter: field name to required value. Empty matches all.
pub type Filter = Map<String, Value>;

/// A document as returned by the store, carrying the store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub body: Document,
}

/// Schema-less document store holding named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend label used in diagnostics.
    fn backend(&self) -> &'static str;

    /// Insert `body` into `collection` and return the assigned id.
    async fn insert(&self, collection: &str, body: Document) -> Result<Uuid, StorageError>;

    /// Return at most `limit` documents of `collection` matching `filter`,
    /// in whatever order the backend yields them.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, StorageError>;

    /// Names of collections holding at least one document.
    async fn collection_names(&self) -> Result<Vec<String>, StorageError>;

    /// Check connectivity (for health checks).
    async fn ping(&self) -> Result<(), StorageError>;
}

/// PostgreSQL-backed document store. Every collection lives in the shared
/// `documents` table as a JSONB body.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, collection: &str, body: Document) -> Result<Uuid, StorageError> {
        let id = queries::insert_document(&self.pool, collection, &Value::Object(body)).await?;
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, StorageError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = queries::find_documents(&self.pool, collection, filter, limit).await?;

        rows.into_iter()
            .map(|(id, body)| match body {
                Value::Object(body) => Ok(StoredDocument { id, body }),
                _ => Err(StorageError::Malformed {
                    collection: collection.to_string(),
                    id,
                }),
            })
            .collect()
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(queries::collection_names(&self.pool).await?)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database operation failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Record does not serialize to a JSON object")]
    NotAnObject,

    #[error("Document {id} in collection `{collection}` is not a JSON object")]
    Malformed { collection: String, id: Uuid },

    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}
