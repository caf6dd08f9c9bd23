//! Synthetic Dataset Generator
//!
//! Produces the fixed-shape sample table the dashboard runs on until a
//! real statistics feed is wired in. Generation is deterministic for a
//! given seed so renders and tests are reproducible across runs; a real
//! source would instead construct a fresh immutable snapshot off the
//! request path and swap it in atomically.

use super::types::{Dataset, IndicatorRow};
use chrono::{Months, NaiveDate};

/// Default span start, matching the original sample feed
pub const DEFAULT_START: (i32, u32) = (2020, 1);
/// Default span end (inclusive month)
pub const DEFAULT_END: (i32, u32) = (2024, 12);
const DEFAULT_SEED: u64 = 0x5eed_7157;

/// Generate the default 2020-2024 monthly sample dataset (60 rows)
pub fn dataset() -> Dataset {
    dataset_for_span(DEFAULT_START, DEFAULT_END)
}

/// Generate a monthly sample dataset over an inclusive month span
///
/// Rows are dated to the last day of each month, dates strictly
/// increasing.
pub fn dataset_for_span(start: (i32, u32), end: (i32, u32)) -> Dataset {
    let months = collect_month_ends(start, end);
    let n = months.len();
    let mut noise = Noise::new(DEFAULT_SEED);

    let rows = months
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            // Position along the span in [0, 1]
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            // Two full sine periods across the span
            let phase = 4.0 * std::f64::consts::PI * t;

            IndicatorRow {
                date,
                unemployment: 4.5 - 0.3 * phase.sin() + 0.1 * noise.gaussian(),
                salary: 35_000.0 + 5_000.0 * t + 500.0 * noise.gaussian(),
                population: 1.48e6 - 2_000.0 * t + 1_000.0 * noise.gaussian(),
                investment: 80e9 + 10e9 * t + 2e9 * noise.gaussian(),
                gdp: 500e9 + 30e9 * t + 5e9 * noise.gaussian(),
            }
        })
        .collect();

    Dataset::new(rows)
}

/// Last day of every month from `start` through `end`, inclusive
fn collect_month_ends(start: (i32, u32), end: (i32, u32)) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let mut first_of_month = NaiveDate::from_ymd_opt(start.0, start.1, 1)
        .expect("valid span start month");
    let last = NaiveDate::from_ymd_opt(end.0, end.1, 1).expect("valid span end month");

    while first_of_month <= last {
        let next = first_of_month + Months::new(1);
        months.push(next.pred_opt().expect("month end predates NaiveDate::MIN"));
        first_of_month = next;
    }

    months
}

/// Deterministic pseudo-random noise source
///
/// A 64-bit LCG with an Irwin-Hall approximation for standard-normal
/// draws. Statistical quality is irrelevant here; reproducibility is not.
struct Noise {
    state: u64,
}

impl Noise {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_uniform(&mut self) -> f64 {
        // Knuth's MMIX constants
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Approximately N(0, 1): sum of 12 uniforms minus 6
    fn gaussian(&mut self) -> f64 {
        (0..12).map(|_| self.next_uniform()).sum::<f64>() - 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_span_has_sixty_rows() {
        let ds = dataset();
        assert_eq!(ds.len(), 60);
    }

    #[test]
    fn test_dates_are_strictly_increasing_month_ends() {
        let ds = dataset();
        let rows = ds.rows();

        for pair in rows.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }

        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2020, 1, 31).unwrap());
        assert_eq!(
            rows.last().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        // February month-end in a leap year
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(dataset(), dataset());
    }

    #[test]
    fn test_series_shapes() {
        let ds = dataset();
        let first = &ds.rows()[0];
        let last = ds.latest().unwrap();

        // Linear ramps dominate the noise at span ends
        assert!(last.salary > first.salary);
        assert!(last.gdp > first.gdp);
        assert!(last.investment > first.investment);
        assert!(last.population < first.population);

        // Unemployment stays near its 4.5% baseline
        for row in ds.rows() {
            assert!(row.unemployment > 3.0 && row.unemployment < 6.0);
        }
    }

    #[test]
    fn test_single_month_span() {
        let ds = dataset_for_span((2024, 6), (2024, 6));
        assert_eq!(ds.len(), 1);
        assert_eq!(
            ds.rows()[0].date,
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
    }
}
