//! Launch dataset loading.
//!
//! The launch table is fetched once (over HTTP or from disk), parsed with
//! Polars, validated against the required columns and converted into an
//! immutable [`Dataset`](crate::models::Dataset).
//!
//! # Example
//!
//! ```no_run
//! use spacex_dash::io::{load_dataset, DataSource};
//!
//! # async fn run() -> Result<(), spacex_dash::io::LoadError> {
//! let source = DataSource::parse("spacex_launch_dash.csv");
//! let dataset = load_dataset(&source).await?;
//! println!("Loaded {} launches", dataset.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loaders;


pub use error::{LoadError, LoadResult};
pub use loaders::{
    columns, dataframe_to_records, fetch_bytes, load_dataset, parse_dataset, parse_launch_csv,
    DataSource,
};
