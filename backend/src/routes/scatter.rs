use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{LaunchRecord, OutcomeClass};

// =========================================================
// Scatter chart types
// =========================================================

/// A launch plotted as payload against outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass: qtty::Kilograms,
    pub class: OutcomeClass,
    pub booster_version_category: String,
    pub launch_site: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass: record.payload_mass,
            class: record.class,
            booster_version_category: record.booster_version_category.clone(),
            launch_site: record.launch_site.clone(),
            flight_number: record.flight_number,
            booster_version: record.booster_version.clone(),
        }
    }
}

/// Scatter chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x: String,
    pub y: String,
    /// Column encoded as point color
    pub color: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    /// Color categories in first-occurrence order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.points
            .iter()
            .map(|p| p.booster_version_category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

/// Output id of the payload/success scatter chart.
pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";
