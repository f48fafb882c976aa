use crate::models::{Dataset, ALL_SITES};
use crate::routes::layout::{
    Component, DashboardLayout, TitleStyle, PAYLOAD_SLIDER, SITE_DROPDOWN,
};
use crate::routes::pie::SUCCESS_PIE_CHART;
use crate::routes::scatter::SUCCESS_PAYLOAD_SCATTER_CHART;

use super::options::site_options;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Fixed bounds of the payload slider, independent of the data.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;
const SLIDER_MARK_EVERY: f64 = 2500.0;

/// Build the page description. The dropdown options and the slider's initial
/// value come from the dataset; everything else is static.
pub fn build_layout(dataset: &Dataset) -> DashboardLayout {
    let marks = (0..)
        .map(|i| SLIDER_MIN + i as f64 * SLIDER_MARK_EVERY)
        .take_while(|m| *m <= SLIDER_MAX)
        .collect();

    DashboardLayout {
        title: DASHBOARD_TITLE.to_string(),
        title_style: TitleStyle {
            text_align: "center".to_string(),
            color: "#503D36".to_string(),
            font_size: 40,
        },
        components: vec![
            Component::Dropdown {
                id: SITE_DROPDOWN.to_string(),
                options: site_options(dataset),
                value: ALL_SITES.to_string(),
                placeholder: "Select Launch Site".to_string(),
                searchable: true,
            },
            Component::Graph {
                id: SUCCESS_PIE_CHART.to_string(),
            },
            Component::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider {
                id: PAYLOAD_SLIDER.to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks,
                value: [dataset.min_payload().value(), dataset.max_payload().value()],
            },
            Component::Graph {
                id: SUCCESS_PAYLOAD_SCATTER_CHART.to_string(),
            },
        ],
    }
}
