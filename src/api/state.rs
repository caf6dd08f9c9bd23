//! Application State
//!
//! Shared state accessible by all API handlers. The dataset is built once
//! by the process entry point and shared read-only behind an Arc; no
//! handler mutates it, so concurrent requests need no locking. A real
//! data feed would swap in a fresh snapshot atomically instead.

use crate::dataset::Dataset;
use crate::pages::RegionInfo;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The immutable indicator dataset
    pub dataset: Arc<Dataset>,
    /// Region identity for titles and comparisons
    pub region: RegionInfo,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around a prepared dataset
    pub fn new(dataset: Arc<Dataset>, region: RegionInfo, config: ApiConfig) -> Self {
        Self {
            dataset,
            region,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
            request_timeout_ms: 30_000,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
