use std::sync::Arc;

use crate::store::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Result persistence behind a trait object so tests can swap backends.
    pub store: Arc<dyn ResultStore>,
}
