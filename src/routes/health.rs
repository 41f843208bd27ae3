use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

/// Number of collection names reported by the diagnostics endpoint.
const DIAGNOSTIC_COLLECTIONS: usize = 10;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// GET / — liveness banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "LookLab Backend Running".to_string(),
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub database: ComponentHealth,
}

#[derive(Serialize)]
pub struct ComponentHealth {
    pub status: String,
    pub latency_ms: Option<u64>,
}

/// GET /health — health check with document store status.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let start = std::time::Instant::now();

    let db_check = match state.gateway.store().ping().await {
        Ok(_) => ComponentHealth {
            status: "ok".to_string(),
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::warn!(error = %e, "document store health check failed");
            ComponentHealth {
                status: "error".to_string(),
                latency_ms: None,
            }
        }
    };

    let healthy = db_check.status == "ok";
    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
    };

    (status_code, Json(response))
}

#[derive(Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_backend: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// GET /test — human-oriented database diagnostics. Always answers 200.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let store = state.gateway.store();

    let mut response = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_backend: store.backend().to_string(),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if let Err(e) = store.ping().await {
        response.database = format!("error: {e}");
        return Json(response);
    }
    response.connection_status = "connected".to_string();

    match store.collection_names().await {
        Ok(mut names) => {
            names.truncate(DIAGNOSTIC_COLLECTIONS);
            response.collections = names;
            response.database = "connected and working".to_string();
        }
        Err(e) => {
            response.database = format!("connected but error: {e}");
        }
    }

    Json(response)
}
