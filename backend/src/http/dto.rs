//! Data Transfer Objects for the HTTP API.
//!
//! Chart and layout DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::models::DatasetSummary;
pub use crate::reactive::{UpdateRequest, UpdateResponse};
pub use crate::routes::chart::{ChartSpec, RenderedChart};
pub use crate::routes::layout::{Component, DashboardLayout, DropdownOption};

/// Query parameters for the pie chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Selected site, `ALL` when omitted
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the scatter chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Selected site, `ALL` when omitted
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg (default: dataset minimum)
    #[serde(default)]
    pub payload_min: Option<f64>,
    /// Upper payload bound in kg (default: dataset maximum)
    #[serde(default)]
    pub payload_max: Option<f64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
}
