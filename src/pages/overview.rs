//! Overview Page
//!
//! The landing page: headline KPI cards, the GRP/investment trend chart,
//! sector structure, a comparison with neighboring regions, the indicator
//! correlation heatmap and the detail tables. The trend and sector charts
//! built here are also what the filter handler recomputes.

use crate::chart::{ChartKind, ChartSpec, Series};
use crate::dataset::{Dataset, Indicator};
use crate::document::{format_grouped, ChangeIndicator, Document, Node};
use crate::pages::RegionInfo;
use crate::stats;

/// Rows shown in the detail table
const DETAIL_TABLE_ROWS: usize = 10;

/// GRP of neighboring regions for the comparison chart, billions of
/// rubles, 2023 reference values
const REGION_COMPARISON: [(&str, f64); 5] = [
    ("Tula", 542.0),
    ("Moscow", 1250.0),
    ("Kaluga", 380.0),
    ("Ryazan", 295.0),
    ("Vladimir", 268.0),
];

/// GRP share by economic sector, percent
const SECTOR_SHARES: [(&str, f64); 6] = [
    ("Industry", 42.0),
    ("Trade", 18.0),
    ("Transport", 12.0),
    ("Construction", 10.0),
    ("Agriculture", 8.0),
    ("Services", 10.0),
];

/// Compose the overview document
pub fn compose(dataset: &Dataset, region: &RegionInfo) -> Document {
    let mut doc = Document::new("Socio-Economic Overview")
        .subtitle(format!("Key development indicators for {}", region.name));

    if let Some(latest) = dataset.latest() {
        doc = doc.child(Node::row(vec![
            Node::kpi(
                "GRP",
                format!("{} bn ₽", format_grouped(latest.gdp / 1e9)),
                ChangeIndicator::percent(4.2),
            ),
            Node::kpi(
                "Population",
                format_grouped(latest.population),
                ChangeIndicator::percent(-0.3),
            ),
            Node::kpi(
                "Average salary",
                format!("{} ₽", format_grouped(latest.salary)),
                ChangeIndicator::percent(8.5),
            ),
            Node::kpi(
                "Unemployment",
                format!("{:.1}%", latest.unemployment),
                ChangeIndicator::percent(-5.2),
            ),
        ]));
    }

    doc.child(Node::row(vec![
        Node::chart_panel("Key indicator dynamics", trend_chart(dataset)),
        Node::chart_panel("Economic structure", sector_chart()),
    ]))
    .child(Node::row(vec![
        Node::chart_panel("Regional comparison", comparison_chart(region)),
        Node::chart_panel("Indicator heatmap", correlation_heatmap(dataset)),
    ]))
    .child(detail_table(dataset))
    .child(stats_table(dataset))
}

/// GRP and investment over time, both rescaled to billions, investment on
/// the secondary axis
pub fn trend_chart(dataset: &Dataset) -> ChartSpec {
    let categories: Vec<String> = dataset
        .rows()
        .iter()
        .map(|r| r.date.format("%Y-%m").to_string())
        .collect();

    let gdp_points = categories
        .iter()
        .zip(dataset.column(Indicator::Gdp))
        .map(|(c, v)| crate::chart::SeriesPoint {
            category: c.clone(),
            value: v / 1e9,
        })
        .collect();

    let investment_points = categories
        .iter()
        .zip(dataset.column(Indicator::Investment))
        .map(|(c, v)| crate::chart::SeriesPoint {
            category: c.clone(),
            value: v / 1e9,
        })
        .collect();

    ChartSpec::new(ChartKind::Line, "GRP and investment dynamics")
        .x_axis("Date")
        .y_axis("GRP (bn ₽)")
        .secondary_y_axis("Investment (bn ₽)")
        .series(Series::new("GRP (bn ₽)", gdp_points).color("#1f77b4"))
        .series(
            Series::new("Investment (bn ₽)", investment_points)
                .color("#ff7f0e")
                .secondary_axis(),
        )
}

/// GRP structure by sector, fixed reference shares
pub fn sector_chart() -> ChartSpec {
    let points = SECTOR_SHARES
        .iter()
        .map(|(sector, share)| crate::chart::SeriesPoint {
            category: sector.to_string(),
            value: *share,
        })
        .collect();

    ChartSpec::new(ChartKind::Pie, "GRP structure by sector")
        .series(Series::new("Share of GRP", points))
        .donut()
}

/// GRP against neighboring regions, home region emphasized
pub fn comparison_chart(region: &RegionInfo) -> ChartSpec {
    let (labels, values): (Vec<&str>, Vec<f64>) = REGION_COMPARISON.iter().cloned().unzip();

    ChartSpec::new(ChartKind::Bar, "GRP compared with neighboring regions (2023)")
        .x_axis("Region")
        .y_axis("GRP (bn ₽)")
        .series(
            Series::from_values("GRP (bn ₽)", &labels, &values)
                .show_values()
                .highlight(region.short_name.clone()),
        )
        .legend(false)
}

/// Pairwise Pearson correlation across all indicator columns
pub fn correlation_heatmap(dataset: &Dataset) -> ChartSpec {
    let columns: Vec<Vec<f64>> = Indicator::all()
        .iter()
        .map(|&i| dataset.column(i))
        .collect();
    let matrix = stats::correlation_matrix(&columns);

    let mut spec = ChartSpec::new(ChartKind::Heatmap, "Indicator correlation")
        .value_range(-1.0, 1.0)
        .legend(false);

    for (i, indicator) in Indicator::all().iter().enumerate() {
        let points = Indicator::all()
            .iter()
            .enumerate()
            .map(|(j, other)| crate::chart::SeriesPoint {
                category: other.label().to_string(),
                // Rounded to two decimals for on-cell display
                value: (matrix[i][j] * 100.0).round() / 100.0,
            })
            .collect();
        spec = spec.series(Series::new(indicator.label(), points));
    }

    spec
}

/// The last N rows of the dataset, cells formatted for display
fn detail_table(dataset: &Dataset) -> Node {
    let rows = dataset
        .rows()
        .iter()
        .rev()
        .take(DETAIL_TABLE_ROWS)
        .rev()
        .map(|r| {
            vec![
                r.date.format("%Y-%m-%d").to_string(),
                format!("{:.1}", r.unemployment),
                format_grouped(r.salary),
                format_grouped(r.population),
                format!("{:.1}", r.investment / 1e9),
                format!("{:.1}", r.gdp / 1e9),
            ]
        })
        .collect();

    Node::table(
        "Detailed data",
        vec![
            "Date".to_string(),
            "Unemployment (%)".to_string(),
            "Salary (₽)".to_string(),
            "Population".to_string(),
            "Investment (bn ₽)".to_string(),
            "GRP (bn ₽)".to_string(),
        ],
        rows,
    )
}

/// Per-column mean/min/max plus trend direction arrows
fn stats_table(dataset: &Dataset) -> Node {
    let rows = dataset
        .column_stats()
        .into_iter()
        .map(|s| {
            let arrow = match s.trend {
                crate::dataset::TrendDirection::Up => "↑",
                crate::dataset::TrendDirection::Down => "↓",
            };
            vec![
                s.indicator.label().to_string(),
                format_grouped(s.mean),
                format_grouped(s.min),
                format_grouped(s.max),
                arrow.to_string(),
            ]
        })
        .collect();

    Node::table(
        "Statistics",
        vec![
            "Indicator".to_string(),
            "Mean".to_string(),
            "Min".to_string(),
            "Max".to_string(),
            "Trend".to_string(),
        ],
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample;

    #[test]
    fn test_compose_has_kpis_charts_and_tables() {
        let dataset = sample::dataset();
        let doc = compose(&dataset, &RegionInfo::default());

        assert_eq!(doc.title, "Socio-Economic Overview");
        assert_eq!(doc.chart_specs().len(), 4);

        let tables = doc
            .children
            .iter()
            .filter(|n| matches!(n, Node::Table { .. }))
            .count();
        assert_eq!(tables, 2);
    }

    #[test]
    fn test_trend_chart_rescales_to_billions() {
        let dataset = sample::dataset();
        let spec = trend_chart(&dataset);

        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].points.len(), dataset.len());
        // GRP baseline is ~500e9; rescaled values sit in the hundreds
        for p in &spec.series[0].points {
            assert!(p.value > 100.0 && p.value < 1000.0);
        }
        assert_eq!(spec.series[1].axis, crate::chart::AxisSide::Secondary);
    }

    #[test]
    fn test_trend_chart_on_empty_slice_is_empty_but_valid() {
        let dataset = sample::dataset();
        let empty = dataset.between(
            chrono::NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
        );
        let spec = trend_chart(&empty);
        assert!(spec.is_empty());
        assert_eq!(spec.series.len(), 2);
    }

    #[test]
    fn test_sector_chart_is_filter_independent() {
        assert_eq!(sector_chart(), sector_chart());
        let total: f64 = sector_chart().series[0].points.iter().map(|p| p.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_comparison_chart_highlights_home_region() {
        let spec = comparison_chart(&RegionInfo::default());
        assert_eq!(
            spec.series[0].style.highlight_category.as_deref(),
            Some("Tula")
        );
    }

    #[test]
    fn test_correlation_heatmap_is_symmetric_unit_diagonal() {
        let dataset = sample::dataset();
        let spec = correlation_heatmap(&dataset);

        assert_eq!(spec.series.len(), 5);
        for (i, series) in spec.series.iter().enumerate() {
            assert_eq!(series.points.len(), 5);
            assert!((series.points[i].value - 1.0).abs() < 1e-9);
            for (j, point) in series.points.iter().enumerate() {
                assert!(point.value >= -1.0 && point.value <= 1.0);
                assert_eq!(point.value, spec.series[j].points[i].value);
            }
        }
        assert_eq!(spec.options.value_range, Some((-1.0, 1.0)));
    }

    #[test]
    fn test_detail_table_holds_last_ten_rows() {
        let dataset = sample::dataset();
        if let Node::Table { rows, .. } = detail_table(&dataset) {
            assert_eq!(rows.len(), 10);
            assert_eq!(rows.last().unwrap()[0], "2024-12-31");
        } else {
            panic!("expected a table node");
        }
    }
}
