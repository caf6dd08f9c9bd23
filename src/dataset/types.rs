//! Core data types for the indicator dataset
//!
//! This module defines the fundamental types the composers and handlers
//! work against:
//! - `IndicatorRow`: one month of indicator values
//! - `Dataset`: the ordered, immutable row sequence
//! - `Indicator` and `Municipality`: classification enums
//! - `ColumnStats`: per-column summary statistics

use crate::stats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A numeric indicator column of the dataset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Unemployment rate, percent
    Unemployment,
    /// Average monthly salary, rubles
    Salary,
    /// Resident population, persons
    Population,
    /// Fixed capital investment, rubles
    Investment,
    /// Gross regional product, rubles
    Gdp,
}

impl Indicator {
    /// Get all indicators for iteration, in dataset column order
    pub fn all() -> &'static [Indicator] {
        &[
            Indicator::Unemployment,
            Indicator::Salary,
            Indicator::Population,
            Indicator::Investment,
            Indicator::Gdp,
        ]
    }

    /// Human-readable column label
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Unemployment => "Unemployment",
            Indicator::Salary => "Salary",
            Indicator::Population => "Population",
            Indicator::Investment => "Investment",
            Indicator::Gdp => "GRP",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indicator::Unemployment => write!(f, "unemployment"),
            Indicator::Salary => write!(f, "salary"),
            Indicator::Population => write!(f, "population"),
            Indicator::Investment => write!(f, "investment"),
            Indicator::Gdp => write!(f, "gdp"),
        }
    }
}

/// Municipality selector for the filter surface
///
/// A fixed enumeration with an `All` sentinel. Per-municipality indicator
/// series do not exist in the data source; a concrete municipality only
/// annotates chart titles (see the filter module).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Municipality {
    #[default]
    All,
    Tula,
    Novomoskovsk,
    Aleksin,
    Shchekino,
}

impl Municipality {
    /// Get all selectable values for iteration
    pub fn all() -> &'static [Municipality] {
        &[
            Municipality::All,
            Municipality::Tula,
            Municipality::Novomoskovsk,
            Municipality::Aleksin,
            Municipality::Shchekino,
        ]
    }

    /// True for the sentinel that disables municipality annotation
    pub fn is_all(&self) -> bool {
        matches!(self, Municipality::All)
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Municipality::All => "All municipalities",
            Municipality::Tula => "Tula",
            Municipality::Novomoskovsk => "Novomoskovsk",
            Municipality::Aleksin => "Aleksin",
            Municipality::Shchekino => "Shchekino",
        }
    }
}

impl std::fmt::Display for Municipality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One month of indicator values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndicatorRow {
    /// Observation date (month end)
    pub date: NaiveDate,
    /// Unemployment rate, percent
    pub unemployment: f64,
    /// Average monthly salary, rubles
    pub salary: f64,
    /// Resident population, persons
    pub population: f64,
    /// Fixed capital investment, rubles
    pub investment: f64,
    /// Gross regional product, rubles
    pub gdp: f64,
}

impl IndicatorRow {
    /// Read a column by indicator
    pub fn value(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Unemployment => self.unemployment,
            Indicator::Salary => self.salary,
            Indicator::Population => self.population,
            Indicator::Investment => self.investment,
            Indicator::Gdp => self.gdp,
        }
    }
}

/// First-to-last movement of a column over the dataset span
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

/// Summary statistics for one dataset column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnStats {
    pub indicator: Indicator,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub trend: TrendDirection,
}

/// The ordered, immutable indicator table
///
/// Invariant: row dates are strictly increasing. The sequence is monthly
/// with no gaps in practice, but gaps are tolerated, not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    rows: Vec<IndicatorRow>,
}

impl Dataset {
    /// Create a dataset from rows already ordered by date
    pub fn new(rows: Vec<IndicatorRow>) -> Self {
        debug_assert!(
            rows.windows(2).all(|w| w[0].date < w[1].date),
            "dataset rows must be strictly increasing by date"
        );
        Self { rows }
    }

    /// All rows in date order
    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The most recent row, if any
    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }

    /// First and last observation dates
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Rows with date in `[start, end]` inclusive, as a new dataset
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Dataset {
        let rows = self
            .rows
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect();
        Dataset { rows }
    }

    /// One column as an ordered value vector
    pub fn column(&self, indicator: Indicator) -> Vec<f64> {
        self.rows.iter().map(|r| r.value(indicator)).collect()
    }

    /// Summary statistics for every column, in column order
    ///
    /// Empty dataset yields an empty vector rather than degenerate stats.
    pub fn column_stats(&self) -> Vec<ColumnStats> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        Indicator::all()
            .iter()
            .map(|&indicator| {
                let values = self.column(indicator);
                let mean = stats::mean(&values).unwrap_or(0.0);
                let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let trend = if values.last().unwrap() - values.first().unwrap() > 0.0 {
                    TrendDirection::Up
                } else {
                    TrendDirection::Down
                };
                ColumnStats {
                    indicator,
                    mean,
                    min,
                    max,
                    trend,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: NaiveDate, salary: f64) -> IndicatorRow {
        IndicatorRow {
            date,
            unemployment: 4.0,
            salary,
            population: 1_450_000.0,
            investment: 90e9,
            gdp: 520e9,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_between_is_inclusive() {
        let ds = Dataset::new(vec![
            row(day(2021, 1, 31), 45000.0),
            row(day(2021, 2, 28), 45100.0),
            row(day(2021, 3, 31), 45200.0),
        ]);

        let filtered = ds.between(day(2021, 1, 31), day(2021, 2, 28));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.rows()[0].date, day(2021, 1, 31));
        assert_eq!(filtered.rows()[1].date, day(2021, 2, 28));
    }

    #[test]
    fn test_between_empty_result() {
        let ds = Dataset::new(vec![row(day(2021, 1, 31), 45000.0)]);
        let filtered = ds.between(day(2030, 1, 1), day(2030, 12, 31));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_column_extraction_order() {
        let ds = Dataset::new(vec![
            row(day(2021, 1, 31), 45000.0),
            row(day(2021, 2, 28), 46000.0),
        ]);
        assert_eq!(ds.column(Indicator::Salary), vec![45000.0, 46000.0]);
    }

    #[test]
    fn test_column_stats_trend_direction() {
        let ds = Dataset::new(vec![
            row(day(2021, 1, 31), 45000.0),
            row(day(2021, 2, 28), 46000.0),
        ]);
        let stats = ds.column_stats();
        let salary = stats
            .iter()
            .find(|s| s.indicator == Indicator::Salary)
            .unwrap();
        assert_eq!(salary.trend, TrendDirection::Up);
        assert_eq!(salary.min, 45000.0);
        assert_eq!(salary.max, 46000.0);
        assert_eq!(salary.mean, 45500.0);
    }

    #[test]
    fn test_column_stats_empty_dataset() {
        let ds = Dataset::new(vec![]);
        assert!(ds.column_stats().is_empty());
    }

    #[test]
    fn test_municipality_serializes_lowercase() {
        let json = serde_json::to_string(&Municipality::Novomoskovsk).unwrap();
        assert_eq!(json, "\"novomoskovsk\"");
        let back: Municipality = serde_json::from_str("\"all\"").unwrap();
        assert!(back.is_all());
    }
}
