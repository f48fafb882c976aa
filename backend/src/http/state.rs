//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::Dataset;
use crate::reactive::Dashboard;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dashboard over the dataset loaded at startup; read-only
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    /// Create a new application state with the given dashboard.
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self { dashboard }
    }

    /// Build the dashboard around a freshly loaded dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(Arc::new(Dashboard::new(Arc::new(dataset))))
    }
}
