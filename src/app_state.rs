use std::sync::Arc;

use crate::services::gateway::DocumentGateway;
use crate::services::storage::DocumentStore;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: DocumentGateway,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            gateway: DocumentGateway::new(store),
        }
    }
}
