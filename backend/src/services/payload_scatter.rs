//! Payload vs. outcome scatter chart.

use crate::io::columns;
use crate::models::{Dataset, PayloadRange, SiteSelection};
use crate::routes::scatter::{ScatterChart, ScatterPoint};

pub const ALL_SITES_TITLE: &str = "Correlation between Payload and Success for all Sites";

/// Build the scatter chart for launches whose payload lies in `range`
/// (inclusive) and, unless every site is selected, that launched from `site`.
///
/// A reversed range or an unknown site yields an empty chart.
pub fn payload_scatter_chart(
    dataset: &Dataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let points = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_kg()))
        .filter(|r| site.matches(&r.launch_site))
        .map(ScatterPoint::from)
        .collect();

    let title = match site {
        SiteSelection::All => ALL_SITES_TITLE.to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for Site {}", name)
        }
    };

    ScatterChart {
        title,
        x: columns::PAYLOAD_MASS.to_string(),
        y: columns::CLASS.to_string(),
        color: columns::BOOSTER_VERSION_CATEGORY.to_string(),
        points,
    }
}

#[cfg(test)]
#[path = "payload_scatter_tests.rs"]
mod payload_scatter_tests;
