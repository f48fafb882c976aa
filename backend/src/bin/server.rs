//! Dashboard HTTP Server Binary
//!
//! Loads the launch table, builds the dashboard and serves it.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin spacex-dash-server
//!
//! # Serve a local copy of the data on another port
//! DATA_SOURCE=./spacex_launch_dash.csv PORT=9000 cargo run --bin spacex-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_SOURCE`: URL or path of the launch CSV
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use spacex_dash::config::DashboardConfig;
use spacex_dash::http::{create_router, AppState};
use spacex_dash::io::load_dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting SpaceX launch dashboard");

    let config = DashboardConfig::load()?;
    let source = config.data_source();

    // The dataset is loaded exactly once; failure is fatal
    let dataset = load_dataset(&source).await.map_err(|e| {
        error!(%source, "failed to load launch data: {}", e);
        e
    })?;
    info!(
        "Payload range {} kg .. {} kg",
        dataset.min_payload().value(),
        dataset.max_payload().value()
    );

    let app = create_router(AppState::from_dataset(dataset));

    let addr = config.bind_address()?;
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
