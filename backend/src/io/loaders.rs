use polars::prelude::*;
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;
use tracing::{debug, info};

use super::error::{LoadError, LoadResult};
use crate::models::{Dataset, LaunchRecord, OutcomeClass};

/// Column names of the launch CSV.
pub mod columns {
    pub const LAUNCH_SITE: &str = "Launch Site";
    pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
    pub const CLASS: &str = "class";
    pub const BOOSTER_VERSION_CATEGORY: &str = "Booster Version Category";
    pub const FLIGHT_NUMBER: &str = "Flight Number";
    pub const BOOSTER_VERSION: &str = "Booster Version";

    /// Columns every launch table must provide.
    pub const REQUIRED: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_VERSION_CATEGORY];
}

/// Where the launch table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::Path(PathBuf::from(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Url(_))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch the raw CSV bytes from the source. Performs exactly one request or read.
pub async fn fetch_bytes(source: &DataSource) -> LoadResult<Vec<u8>> {
    match source {
        DataSource::Url(url) => {
            let fetch_err = |source| LoadError::Fetch {
                url: url.clone(),
                source,
            };
            let response = reqwest::get(url)
                .await
                .and_then(|r| r.error_for_status())
                .map_err(fetch_err)?;
            let body = response.bytes().await.map_err(fetch_err)?;
            Ok(body.to_vec())
        }
        DataSource::Path(path) => tokio::fs::read(path).await.map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        }),
    }
}

/// Load the launch table and derive its payload bounds.
pub async fn load_dataset(source: &DataSource) -> LoadResult<Dataset> {
    debug!(%source, "fetching launch data");
    let bytes = fetch_bytes(source).await?;
    let dataset = parse_dataset(bytes)?;
    info!(
        %source,
        records = dataset.len(),
        min_payload_kg = dataset.min_payload().value(),
        max_payload_kg = dataset.max_payload().value(),
        "launch dataset loaded"
    );
    Ok(dataset)
}

/// Parse CSV bytes all the way into a [`Dataset`].
pub fn parse_dataset(bytes: Vec<u8>) -> LoadResult<Dataset> {
    let df = parse_launch_csv(bytes)?;
    let records = dataframe_to_records(&df)?;
    Dataset::from_records(records).ok_or(LoadError::Empty)
}

/// Parse CSV bytes into a Polars DataFrame with the launch columns typed.
pub fn parse_launch_csv(bytes: Vec<u8>) -> LoadResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if let Some(missing) = columns::REQUIRED
        .into_iter()
        .find(|name| !column_names.iter().any(|c| c.as_str() == *name))
    {
        return Err(LoadError::MissingColumn(missing.to_string()));
    }

    // Inference may pick integers for payload or floats for class
    let mut lazy_df = df
        .lazy()
        .with_column(col(columns::LAUNCH_SITE).cast(DataType::String))
        .with_column(col(columns::PAYLOAD_MASS).cast(DataType::Float64))
        .with_column(col(columns::CLASS).cast(DataType::Int64))
        .with_column(col(columns::BOOSTER_VERSION_CATEGORY).cast(DataType::String));

    if column_names.iter().any(|c| c == columns::FLIGHT_NUMBER) {
        lazy_df = lazy_df.with_column(col(columns::FLIGHT_NUMBER).cast(DataType::Int64));
    }
    if column_names.iter().any(|c| c == columns::BOOSTER_VERSION) {
        lazy_df = lazy_df.with_column(col(columns::BOOSTER_VERSION).cast(DataType::String));
    }

    Ok(lazy_df.collect()?)
}

/// Convert a typed DataFrame into launch records, row by row.
pub fn dataframe_to_records(df: &DataFrame) -> LoadResult<Vec<LaunchRecord>> {
    let sites = df.column(columns::LAUNCH_SITE)?.str()?;
    let payloads = df.column(columns::PAYLOAD_MASS)?.f64()?;
    let classes = df.column(columns::CLASS)?.i64()?;
    let categories = df.column(columns::BOOSTER_VERSION_CATEGORY)?.str()?;

    let flight_numbers = df
        .column(columns::FLIGHT_NUMBER)
        .ok()
        .and_then(|c| c.i64().ok());
    let booster_versions = df
        .column(columns::BOOSTER_VERSION)
        .ok()
        .and_then(|c| c.str().ok());

    let height = df.height();
    let mut records = Vec::with_capacity(height);

    for i in 0..height {
        let site = sites
            .get(i)
            .ok_or_else(|| LoadError::invalid_value(columns::LAUNCH_SITE, i, "missing value"))?;

        let payload = payloads
            .get(i)
            .filter(|p| p.is_finite())
            .ok_or_else(|| {
                LoadError::invalid_value(columns::PAYLOAD_MASS, i, "missing or non-numeric value")
            })?;

        let class = classes
            .get(i)
            .ok_or_else(|| {
                LoadError::invalid_value(columns::CLASS, i, "missing or non-numeric value")
            })
            .and_then(|c| {
                OutcomeClass::try_from(c)
                    .map_err(|reason| LoadError::invalid_value(columns::CLASS, i, reason))
            })?;

        let category = categories.get(i).ok_or_else(|| {
            LoadError::invalid_value(columns::BOOSTER_VERSION_CATEGORY, i, "missing value")
        })?;

        let mut record = LaunchRecord::new(site, payload, class, category);
        record.flight_number = flight_numbers.and_then(|c| c.get(i));
        record.booster_version = booster_versions
            .and_then(|c| c.get(i))
            .map(|s| s.to_string());
        records.push(record);
    }

    Ok(records)
}
