//! # Regiondash
//!
//! Regional Socio-Economic Dashboard Core - a Rust service producing
//! declarative page and chart descriptions for regional indicator
//! dashboards.
//!
//! ## Features
//!
//! - **Typed documents**: pages are trees of typed nodes (cards, chart
//!   panels, tables), never markup
//! - **Declarative charts**: serializable chart specs for an opaque
//!   rendering collaborator
//! - **Pure composition**: every page render and filter update is a
//!   deterministic function of the immutable dataset
//! - **Graceful navigation**: unknown paths fall back to the overview
//!   page by policy
//!
//! ## Modules
//!
//! - [`dataset`]: the indicator table and its synthetic generator
//! - [`stats`]: trend fits, means, differences, correlations, rankings
//! - [`chart`]: declarative chart specifications
//! - [`document`]: typed page-document tree
//! - [`pages`]: one composer per dashboard topic
//! - [`router`]: navigation path to topic resolution
//! - [`filter`]: the filter-update handler
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use regiondash::dataset::sample;
//! use regiondash::filter::{filter_update, FilterSelection};
//! use regiondash::pages::RegionInfo;
//! use regiondash::router::render_path;
//!
//! // Build the dataset once at startup
//! let dataset = sample::dataset();
//! let region = RegionInfo::default();
//!
//! // Route a navigation path to its page document
//! let document = render_path("/labor", &dataset, &region);
//! assert_eq!(document.title, "Labor Market");
//!
//! // Recompute the filtered overview charts
//! let selection = FilterSelection::parse("2021-01-01", "2022-12-31", Default::default())
//!     .expect("valid dates");
//! let update = filter_update(&dataset, &selection).expect("valid range");
//! assert!(!update.trend.is_empty());
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod document;
pub mod filter;
pub mod pages;
pub mod router;
pub mod stats;

// Re-export top-level types for convenience
pub use chart::{AxisSide, BarMode, ChartKind, ChartSpec, Mark, Series, SeriesPoint};

pub use dataset::{ColumnStats, Dataset, Indicator, IndicatorRow, Municipality, TrendDirection};

pub use document::{ChangeDirection, ChangeIndicator, Document, Node};

pub use filter::{FilterError, FilterSelection, FilterUpdate};

pub use pages::RegionInfo;

pub use router::Topic;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, RegionConfig};
