use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::item::{Category, Item, ItemCreated};
use crate::services::gateway::Record;
use crate::services::storage::Filter;
use crate::services::validation;

const DEFAULT_ITEM_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub category: Option<Category>,

    #[serde(default = "default_item_limit")]
    pub limit: usize,
}

fn default_item_limit() -> usize {
    DEFAULT_ITEM_LIMIT
}

/// POST /api/items — validate and store a catalog item.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ItemCreated>, ApiError> {
    let item: Item = validation::validate(payload?.0)?;
    let id = state.gateway.create(Item::COLLECTION, &item).await?;

    metrics::counter!("items_created_total").increment(1);
    tracing::info!(%id, category = %item.category, "catalog item created");

    Ok(Json(ItemCreated { id }))
}

/// GET /api/items — list catalog items, optionally restricted to one category.
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let mut filter = Filter::new();
    if let Some(category) = query.category {
        filter.insert("category".to_string(), Value::String(category.to_string()));
    }

    let items = state
        .gateway
        .list(Item::COLLECTION, &filter, query.limit)
        .await?;

    Ok(Json(items))
}
