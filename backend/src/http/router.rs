//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::pie::SUCCESS_PIE_CHART;
use crate::routes::scatter::SUCCESS_PAYLOAD_SCATTER_CHART;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive, the page may be served from elsewhere during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/layout", get(handlers::get_layout))
        .route("/options", get(handlers::get_site_options))
        .route("/dataset/summary", get(handlers::get_dataset_summary))
        .route(
            &format!("/charts/{}", SUCCESS_PIE_CHART),
            get(handlers::get_success_pie_chart),
        )
        .route(
            &format!("/charts/{}", SUCCESS_PAYLOAD_SCATTER_CHART),
            get(handlers::get_payload_scatter_chart),
        )
        .route("/update", post(handlers::update_outputs));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
