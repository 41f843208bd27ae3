//! Test helper utilities for E2E testing

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response from POST /api/items
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemCreated {
    pub id: String,
}

/// Response from POST /api/looks/start
#[derive(Debug, Serialize, Deserialize)]
pub struct LookStarted {
    pub job_id: String,
    pub status: String,
}

/// Error body returned for rejected requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub fields: Value,
}

/// POST a JSON payload and decode the success body
pub async fn post_json<T: for<'de> Deserialize<'de>>(
    client: &reqwest::Client,
    url: &str,
    payload: &Value,
) -> Result<T, Box<dyn std::error::Error>> {
    let response = client.post(url).json(payload).send().await?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await?;
        return Err(format!("POST {} failed with status {}: {}", url, status, error_text).into());
    }

    Ok(response.json::<T>().await?)
}

/// GET a list endpoint and decode the records
pub async fn get_records(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await?;
        return Err(format!("GET {} failed with status {}: {}", url, status, error_text).into());
    }

    Ok(response.json::<Vec<Value>>().await?)
}

/// Find a record by its public id
pub fn find_by_id<'a>(records: &'a [Value], id: &str) -> Option<&'a Value> {
    records.iter().find(|r| r["id"] == id)
}
