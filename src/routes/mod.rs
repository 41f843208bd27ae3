pub mod health;
pub mod items;
pub mod looks;
pub mod metrics;

use axum::routing::{get, post};
use axum::Router;

use crate::app_state::AppState;

/// API routes sharing [`AppState`]. The metrics endpoint is mounted separately.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/test", get(health::diagnostics))
        .route(
            "/api/items",
            get(items::list_items).post(items::create_item),
        )
        .route("/api/looks", get(looks::list_looks))
        .route("/api/looks/start", post(looks::start_look))
        .with_state(state)
}
