//! Page Composers
//!
//! One composer per dashboard topic. Each is a pure, deterministic
//! function from the dataset (or embedded reference constants) to a
//! [`Document`](crate::document::Document): a fixed arrangement of KPI
//! cards, chart panels and tables. Composers perform no I/O and hold no
//! state; the chart builders they call live alongside them so each
//! topic's data and layout stay in one place.
//!
//! - [`overview`]: headline indicators, trend, structure, correlations
//! - [`labor`]: employment, unemployment and wages
//! - [`demographics`]: population, vital rates, migration
//! - [`economy`]: output, investment, industry

pub mod demographics;
pub mod economy;
pub mod labor;
pub mod overview;

use serde::{Deserialize, Serialize};

/// The region the dashboard describes
///
/// Supplied by process configuration; only affects titles and the
/// comparison-chart highlight, never chart semantics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionInfo {
    /// Display name, e.g. "Tula Oblast"
    pub name: String,
    /// Statistical region code, e.g. "71"
    pub code: String,
    /// Short name used as a category in comparison charts, e.g. "Tula"
    pub short_name: String,
}

impl RegionInfo {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        short_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            short_name: short_name.into(),
        }
    }
}

impl Default for RegionInfo {
    fn default() -> Self {
        Self::new("Tula Oblast", "71", "Tula")
    }
}
