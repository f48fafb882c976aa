//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! dashboard for the actual work. All of them are synchronous in-memory
//! computations over the shared dataset.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

use super::dto::{
    DashboardLayout, DatasetSummary, DropdownOption, HealthResponse, PieQuery, RenderedChart,
    ScatterQuery, UpdateRequest, UpdateResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{ControlState, PayloadRange, SiteSelection};
use crate::routes::pie::SUCCESS_PIE_CHART;
use crate::routes::scatter::SUCCESS_PAYLOAD_SCATTER_CHART;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const INDEX_HTML: &str = include_str!("../../static/index.html");

// =============================================================================
// Page & Health
// =============================================================================

/// GET /
///
/// The dashboard page. It fetches the layout and chart figures from the API.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dashboard.dataset().len(),
    }))
}

// =============================================================================
// Layout & Dataset
// =============================================================================

/// GET /v1/layout
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<DashboardLayout> {
    Ok(Json(state.dashboard.layout().clone()))
}

/// GET /v1/options
///
/// Dropdown entries: "All Sites" followed by each launch site.
pub async fn get_site_options(
    State(state): State<AppState>,
) -> HandlerResult<Vec<DropdownOption>> {
    Ok(Json(state.dashboard.site_options()))
}

/// GET /v1/dataset/summary
pub async fn get_dataset_summary(State(state): State<AppState>) -> HandlerResult<DatasetSummary> {
    Ok(Json(state.dashboard.dataset().summary()))
}

// =============================================================================
// Charts
// =============================================================================

/// GET /v1/charts/success-pie-chart?site=
pub async fn get_success_pie_chart(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> HandlerResult<RenderedChart> {
    let mut controls = state.dashboard.initial_state();
    if let Some(site) = query.site {
        controls.site = SiteSelection::from(site);
    }

    let chart = state.dashboard.render(SUCCESS_PIE_CHART, &controls)?;
    Ok(Json(chart.into()))
}

/// GET /v1/charts/success-payload-scatter-chart?site=&payload_min=&payload_max=
pub async fn get_payload_scatter_chart(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> HandlerResult<RenderedChart> {
    let initial = state.dashboard.initial_state();
    let controls = ControlState {
        site: query.site.map(SiteSelection::from).unwrap_or(initial.site),
        payload_range: PayloadRange::new(
            query.payload_min.unwrap_or(initial.payload_range.lo),
            query.payload_max.unwrap_or(initial.payload_range.hi),
        ),
    };

    let chart = state
        .dashboard
        .render(SUCCESS_PAYLOAD_SCATTER_CHART, &controls)?;
    Ok(Json(chart.into()))
}

// =============================================================================
// Reactive Updates
// =============================================================================

/// POST /v1/update
///
/// Recompute every output bound to the changed controls.
pub async fn update_outputs(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> HandlerResult<UpdateResponse> {
    let response = state.dashboard.update(&request)?;
    Ok(Json(response))
}
