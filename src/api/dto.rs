//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON. Chart specs and
//! documents cross the wire as-is: the core's types are the serialization
//! contract with the rendering collaborator.

use crate::chart::ChartSpec;
use crate::dataset::{ColumnStats, IndicatorRow, Municipality};
use crate::document::Document;
use crate::router::Topic;
use serde::{Deserialize, Serialize};

// ============================================
// PAGE DTOs
// ============================================

/// Page query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    /// Navigation path; unrecognized values silently resolve to the
    /// overview page
    #[serde(default)]
    pub path: Option<String>,
}

/// Page response
#[derive(Debug, Serialize)]
pub struct PageResponse {
    /// The topic the path resolved to
    pub topic: Topic,
    /// Canonical path of that topic
    pub path: String,
    /// The composed page document
    pub document: Document,
}

// ============================================
// FILTER DTOs
// ============================================

/// Filter-update request
#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    /// Range start, ISO 8601 date (inclusive)
    pub start: String,
    /// Range end, ISO 8601 date (inclusive)
    pub end: String,
    /// Municipality selector, defaults to "all"
    #[serde(default)]
    pub municipality: Municipality,
}

/// Filter-update response: both charts refresh together
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    /// Date-filtered trend chart
    pub trend: ChartSpec,
    /// Sector-structure chart (filter-independent, always included)
    pub sectors: ChartSpec,
    /// Number of dataset rows inside the range
    pub row_count: usize,
}

// ============================================
// DATASET DTOs
// ============================================

/// Dataset query parameters
#[derive(Debug, Deserialize)]
pub struct DatasetParams {
    /// Optional range start, ISO 8601 date (inclusive)
    #[serde(default)]
    pub start: Option<String>,
    /// Optional range end, ISO 8601 date (inclusive)
    #[serde(default)]
    pub end: Option<String>,
}

/// Dataset rows plus per-column statistics
#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    /// Rows in date order
    pub rows: Vec<IndicatorRow>,
    /// Per-column summary statistics
    pub stats: Vec<ColumnStats>,
    /// Number of rows returned
    pub row_count: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
