//! Launch records and the immutable dataset built from them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome class of a launch: 1 for success, 0 for failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    pub fn value(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.value()
    }
}

impl TryFrom<i64> for OutcomeClass {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("outcome class must be 0 or 1, got {}", other)),
        }
    }
}

impl std::fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A single row of the launch table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass: qtty::Kilograms,
    pub class: OutcomeClass,
    pub booster_version_category: String,
    /// Present when the source table has a `Flight Number` column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<i64>,
    /// Present when the source table has a `Booster Version` column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_kg: f64,
        class: OutcomeClass,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass: qtty::Kilograms::new(payload_kg),
            class,
            booster_version_category: booster_version_category.into(),
            flight_number: None,
            booster_version: None,
        }
    }

    pub fn payload_kg(&self) -> f64 {
        self.payload_mass.value()
    }
}

/// The full launch table, loaded once and never mutated.
///
/// Min/max payload are derived at construction time and stay constant for
/// the lifetime of the value.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: qtty::Kilograms,
    max_payload: qtty::Kilograms,
}

impl Dataset {
    /// Build a dataset from its rows. Returns `None` for an empty table since
    /// the payload bounds would be undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        let first = records.first()?.payload_kg();
        let (min, max) = records.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.payload_kg()), hi.max(r.payload_kg()))
        });

        Some(Self {
            records,
            min_payload: qtty::Kilograms::new(min),
            max_payload: qtty::Kilograms::new(max),
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> qtty::Kilograms {
        self.min_payload
    }

    pub fn max_payload(&self) -> qtty::Kilograms {
        self.max_payload
    }

    /// Distinct launch sites in first-occurrence order.
    pub fn distinct_sites(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .filter(|site| seen.insert(*site))
            .collect()
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            records: self.len(),
            min_payload: self.min_payload,
            max_payload: self.max_payload,
            sites: self
                .distinct_sites()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Lightweight description of a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub min_payload: qtty::Kilograms,
    pub max_payload: qtty::Kilograms,
    pub sites: Vec<String>,
}
