use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::services::storage::Filter;

/// Insert a document into a collection, returning its generated id
pub async fn insert_document(
    pool: &PgPool,
    collection: &str,
    body: &Value,
) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO documents (collection, body)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(collection)
    .bind(body)
    .fetch_one(pool)
    .await?;

    row.try_get("id")
}

/// Find documents in a collection whose top-level fields equal the filter values
pub async fn find_documents(
    pool: &PgPool,
    collection: &str,
    filter: &Filter,
    limit: i64,
) -> Result<Vec<(Uuid, Value)>, sqlx::Error> {
    let mut query =
        QueryBuilder::<Postgres>::new("SELECT id, body FROM documents WHERE collection = ");
    query.push_bind(collection);

    for (field, value) in filter {
        query
            .push(" AND body -> ")
            .push_bind(field.as_str())
            .push(" = ")
            .push_bind(value)
            .push("::jsonb");
    }

    query.push(" LIMIT ").push_bind(limit);

    let rows = query.build().fetch_all(pool).await?;

    rows.into_iter()
        .map(|r| Ok((r.try_get("id")?, r.try_get("body")?)))
        .collect()
}

/// Distinct collection names currently holding documents
pub async fn collection_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection")
        .fetch_all(pool)
        .await
}
