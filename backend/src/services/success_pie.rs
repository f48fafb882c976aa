//! Success pie chart.
//!
//! For every site the slices are the per-site sums of the outcome class, i.e.
//! the number of successful launches at each site (failures contribute 0, so
//! total launches are not shown). For a single site the slices are the
//! counts of each outcome class among that site's launches.

use std::collections::BTreeMap;

use crate::io::columns;
use crate::models::{Dataset, OutcomeClass, SiteSelection};
use crate::routes::pie::{PieChart, PieSlice};

pub const ALL_SITES_TITLE: &str = "Total Success Launches by Site";

/// Build the pie chart for the selected site. Unknown sites yield an empty chart.
pub fn success_pie_chart(dataset: &Dataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => successes_by_site(dataset),
        SiteSelection::Site(name) => outcomes_for_site(dataset, name),
    }
}

/// Sum of the outcome class per site, ordered by site name.
fn successes_by_site(dataset: &Dataset) -> PieChart {
    let mut sums: BTreeMap<&str, u64> = BTreeMap::new();
    for record in dataset.records() {
        *sums.entry(record.launch_site.as_str()).or_insert(0) += u64::from(record.class.value());
    }

    PieChart {
        title: ALL_SITES_TITLE.to_string(),
        names: columns::LAUNCH_SITE.to_string(),
        values: columns::CLASS.to_string(),
        slices: sums
            .into_iter()
            .map(|(site, value)| PieSlice {
                label: site.to_string(),
                value,
            })
            .collect(),
    }
}

/// Count of each outcome class at one site, most frequent first.
fn outcomes_for_site(dataset: &Dataset, site: &str) -> PieChart {
    let mut counts: Vec<(OutcomeClass, u64)> = Vec::with_capacity(2);
    for record in dataset.records().iter().filter(|r| r.launch_site == site) {
        match counts.iter_mut().find(|(class, _)| *class == record.class) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.class, 1)),
        }
    }
    // Stable sort keeps first-occurrence order on ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    PieChart {
        title: format!("Total Success Launches for Site {}", site),
        names: columns::CLASS.to_string(),
        values: "count".to_string(),
        slices: counts
            .into_iter()
            .map(|(class, value)| PieSlice {
                label: class.to_string(),
                value,
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "success_pie_tests.rs"]
mod success_pie_tests;
