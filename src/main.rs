//! Regiondash API Server
//!
//! Run with: cargo run --bin regiondash
//!
//! # Configuration
//!
//! Loaded from config.toml with environment overrides:
//! - `REGIONDASH_REGION_NAME`: Region display name (default: Tula Oblast)
//! - `REGIONDASH_REGION_CODE`: Statistical region code (default: 71)
//! - `REGIONDASH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `REGIONDASH_PORT`: Port to listen on (default: 8050)
//! - `REGIONDASH_LOG_LEVEL`: Log level (default: info)
//! - `REGIONDASH_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely when set

use regiondash::api::{serve, ApiConfig, AppState};
use regiondash::config::Config;
use regiondash::dataset::sample;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config must load before the subscriber exists so its log settings
    // can shape the filter; the loader's own trace lines are dropped
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting Regiondash API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        region = %config.region.name,
        code = %config.region.code,
        "Dashboard region"
    );

    // Build the dataset once; every composer and handler reads this
    // immutable snapshot
    let (span_start, span_end) = config.dataset.span();
    let dataset = Arc::new(sample::dataset_for_span(span_start, span_end));
    tracing::info!(rows = dataset.len(), "Dataset constructed");

    let region = config.region.to_region_info();
    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_ms: config.api.request_timeout_secs * 1000,
    };

    let state = AppState::new(dataset, region, api_config.clone());

    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    serve(state, &api_config).await?;

    tracing::info!("Regiondash API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("regiondash={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
