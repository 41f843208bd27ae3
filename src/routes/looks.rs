use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::look::{LookJob, LookRequest, LookStartResponse};
use crate::services::gateway::Record;
use crate::services::storage::Filter;
use crate::services::validation;

const DEFAULT_LOOK_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ListLooksQuery {
    #[serde(default = "default_look_limit")]
    pub limit: usize,
}

fn default_look_limit() -> usize {
    DEFAULT_LOOK_LIMIT
}

/// POST /api/looks/start — record a queued look generation job.
///
/// The job is only persisted; no generation happens and nothing advances
/// its status.
pub async fn start_look(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<LookStartResponse>, ApiError> {
    let request: LookRequest = validation::validate(payload?.0)?;
    let job = LookJob::from(request);
    validation::check(&job)?;

    let job_id = state.gateway.create(LookJob::COLLECTION, &job).await?;

    metrics::counter!("look_jobs_created_total").increment(1);
    tracing::info!(%job_id, status = %job.status, animate = job.selections.animate, "look job created");

    Ok(Json(LookStartResponse {
        job_id,
        status: job.status,
    }))
}

/// GET /api/looks — list look generation jobs.
pub async fn list_looks(
    State(state): State<AppState>,
    Query(query): Query<ListLooksQuery>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let jobs = state
        .gateway
        .list(LookJob::COLLECTION, &Filter::new(), query.limit)
        .await?;

    Ok(Json(jobs))
}
