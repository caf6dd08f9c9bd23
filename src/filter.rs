//! Filter-Update Handler
//!
//! The one interactive operation: given a date range and a municipality
//! selector, filter the dataset and rebuild the two overview charts. A
//! pure, stateless transform - identical inputs always produce identical
//! specs.
//!
//! The municipality selector deserves a note: the data source carries no
//! per-municipality indicator series, so a concrete municipality does not
//! filter rows. Its only effect is the trend-chart title annotation.

use crate::chart::ChartSpec;
use crate::dataset::{Dataset, Municipality};
use crate::pages::overview;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validated filter inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FilterSelection {
    /// Range start, inclusive
    pub start: NaiveDate,
    /// Range end, inclusive
    pub end: NaiveDate,
    /// Municipality selector; `All` disables the title annotation
    #[serde(default)]
    pub municipality: Municipality,
}

impl FilterSelection {
    pub fn new(start: NaiveDate, end: NaiveDate, municipality: Municipality) -> Self {
        Self {
            start,
            end,
            municipality,
        }
    }

    /// Parse a selection from ISO 8601 date strings
    pub fn parse(
        start: &str,
        end: &str,
        municipality: Municipality,
    ) -> Result<Self, FilterError> {
        let start = parse_date("start", start)?;
        let end = parse_date("end", end)?;
        Ok(Self::new(start, end, municipality))
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FilterError> {
    value
        .parse::<NaiveDate>()
        .map_err(|_| FilterError::MalformedDate {
            field,
            value: value.to_string(),
        })
}

/// Filter validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Start date after end date
    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    /// A date string that is not ISO 8601
    #[error("malformed {field} date: {value:?}")]
    MalformedDate { field: &'static str, value: String },
}

/// The two chart specs a filter run refreshes together
///
/// The sector chart is independent of the filter and recomputes to the
/// same spec every time, but the calling convention is that all outputs
/// are replaced as one unit, so it is always returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterUpdate {
    /// Date-filtered GRP/investment trend chart
    pub trend: ChartSpec,
    /// Sector-structure chart, identical across runs
    pub sectors: ChartSpec,
}

/// Apply a filter selection and rebuild the overview charts
///
/// Rows with date in `[start, end]` inclusive are kept. An empty result
/// yields a valid trend spec with zero points rather than an error; an
/// inverted range rejects before any spec is built.
pub fn filter_update(
    dataset: &Dataset,
    selection: &FilterSelection,
) -> Result<FilterUpdate, FilterError> {
    if selection.start > selection.end {
        return Err(FilterError::InvertedRange {
            start: selection.start,
            end: selection.end,
        });
    }

    let slice = dataset.between(selection.start, selection.end);
    tracing::debug!(
        start = %selection.start,
        end = %selection.end,
        municipality = %selection.municipality,
        rows = slice.len(),
        "rebuilding filtered charts"
    );

    let mut trend = overview::trend_chart(&slice);
    if !selection.municipality.is_all() {
        trend.title = format!("{} - {}", trend.title, selection.municipality.label());
    }

    Ok(FilterUpdate {
        trend,
        sectors: overview::sector_chart(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inclusive_range_selects_expected_rows() {
        let dataset = sample::dataset();
        let selection = FilterSelection::new(
            day(2021, 1, 1),
            day(2022, 12, 31),
            Municipality::All,
        );

        let update = filter_update(&dataset, &selection).unwrap();
        // 24 monthly rows fall inside 2021-2022 inclusive
        assert_eq!(update.trend.series[0].points.len(), 24);
        assert_eq!(update.trend.series[0].points[0].category, "2021-01");
        assert_eq!(
            update.trend.series[0].points.last().unwrap().category,
            "2022-12"
        );
    }

    #[test]
    fn test_inverted_range_rejects_without_specs() {
        let dataset = sample::dataset();
        let selection = FilterSelection::new(
            day(2023, 1, 1),
            day(2021, 1, 1),
            Municipality::All,
        );

        let err = filter_update(&dataset, &selection).unwrap_err();
        assert!(matches!(err, FilterError::InvertedRange { .. }));
    }

    #[test]
    fn test_malformed_date_rejected_at_parse() {
        let err = FilterSelection::parse("2021-13-01", "2022-01-01", Municipality::All)
            .unwrap_err();
        assert!(matches!(
            err,
            FilterError::MalformedDate { field: "start", .. }
        ));

        let err =
            FilterSelection::parse("2021-01-01", "not-a-date", Municipality::All).unwrap_err();
        assert!(matches!(err, FilterError::MalformedDate { field: "end", .. }));
    }

    #[test]
    fn test_empty_result_yields_valid_empty_spec() {
        let dataset = sample::dataset();
        let selection = FilterSelection::new(
            day(2030, 1, 1),
            day(2030, 12, 31),
            Municipality::All,
        );

        let update = filter_update(&dataset, &selection).unwrap();
        assert!(update.trend.is_empty());
        // The sector chart is static and unaffected
        assert!(!update.sectors.is_empty());
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let dataset = sample::dataset();
        let selection = FilterSelection::new(
            day(2020, 6, 1),
            day(2023, 6, 30),
            Municipality::Tula,
        );

        let first = filter_update(&dataset, &selection).unwrap();
        let second = filter_update(&dataset, &selection).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_municipality_annotates_title_only() {
        let dataset = sample::dataset();
        let range = (day(2021, 1, 1), day(2022, 12, 31));

        let all = filter_update(
            &dataset,
            &FilterSelection::new(range.0, range.1, Municipality::All),
        )
        .unwrap();
        let tula = filter_update(
            &dataset,
            &FilterSelection::new(range.0, range.1, Municipality::Tula),
        )
        .unwrap();

        assert!(tula.trend.title.ends_with("- Tula"));
        assert!(!all.trend.title.contains("Tula"));
        // Same data either way; the selector never filters rows
        assert_eq!(all.trend.series, tula.trend.series);
    }

    #[test]
    fn test_sector_chart_always_returned_and_stable() {
        let dataset = sample::dataset();
        let a = filter_update(
            &dataset,
            &FilterSelection::new(day(2020, 1, 1), day(2020, 12, 31), Municipality::All),
        )
        .unwrap();
        let b = filter_update(
            &dataset,
            &FilterSelection::new(day(2024, 1, 1), day(2024, 12, 31), Municipality::Aleksin),
        )
        .unwrap();

        assert_eq!(a.sectors, b.sectors);
    }
}
