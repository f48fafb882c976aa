//! Control state snapshots read by the chart handlers.

use serde::{Deserialize, Serialize};

use super::launch::Dataset;

/// Wire value of the synthetic "every site" dropdown entry.
pub const ALL_SITES: &str = "ALL";

/// Current value of the site dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed payload interval `[lo, hi]` in kilograms.
///
/// No ordering is enforced: a reversed range simply matches nothing.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Full extent of the dataset's payloads.
    pub fn of_dataset(dataset: &Dataset) -> Self {
        Self::new(dataset.min_payload().value(), dataset.max_payload().value())
    }

    pub fn contains(&self, payload_kg: f64) -> bool {
        self.lo <= payload_kg && payload_kg <= self.hi
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self::new(lo, hi)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.lo, range.hi]
    }
}

/// Snapshot of both controls for one handler invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// Values the controls start with: every site, full payload extent.
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::of_dataset(dataset),
        }
    }
}
