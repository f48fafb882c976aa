//! # SpaceX Launch Dashboard
//!
//! Interactive dashboard over the SpaceX launch records.
//!
//! The launch table is loaded once at startup; a site dropdown and a payload
//! range slider drive a success pie chart and a payload/outcome scatter chart.
//! The crate hosts the page itself through an Axum HTTP server.
//!
//! ## Architecture
//!
//! - [`models`]: Launch records, the immutable dataset and control snapshots
//! - [`io`]: Dataset loading (HTTP or file, parsed with Polars)
//! - [`services`]: Option builder, layout builder and the two chart handlers
//! - [`routes`]: Serializable chart and layout types
//! - [`reactive`]: Binding table and update cycle
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`api`]: Flat re-exports of the public DTOs
//!
//! ## Data flow
//!
//! ```text
//! load_dataset ─► Dashboard { dataset, layout, bindings } ─► POST /v1/update ─► chart specs
//! ```

pub mod api;
pub mod config;
pub mod io;
pub mod models;
pub mod reactive;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
