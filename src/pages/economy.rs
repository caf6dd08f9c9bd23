//! Economy Page
//!
//! Output, investment and industry panels: GRP dynamics with
//! year-over-year growth annotations, the GRP structure treemap, the
//! enterprise ranking and quarterly production indices.

use crate::chart::{ChartKind, ChartSpec, Series};
use crate::document::{ChangeIndicator, Document, Node};
use crate::pages::RegionInfo;
use crate::stats;

const YEARS: [&str; 6] = ["2019", "2020", "2021", "2022", "2023", "2024"];

/// Gross regional product by year, billions of rubles
const GDP_BY_YEAR: [f64; 6] = [485.0, 468.0, 502.0, 521.0, 542.0, 560.0];

/// Fixed capital investment by year, billions of rubles
const INVESTMENT_BY_YEAR: [f64; 6] = [82.0, 78.0, 85.0, 91.0, 98.0, 105.0];

/// Industrial production index, percent of previous year
const PRODUCTION_INDEX: [f64; 6] = [102.5, 98.2, 104.8, 103.2, 105.3, 106.1];

/// GRP share by activity, percent
const GRP_STRUCTURE: [(&str, f64); 10] = [
    ("Manufacturing", 32.5),
    ("Trade", 15.2),
    ("Transport", 8.8),
    ("Construction", 7.5),
    ("Agriculture", 6.2),
    ("Mining", 5.8),
    ("Energy", 5.5),
    ("Education", 4.8),
    ("Healthcare", 4.2),
    ("Other", 9.5),
];

/// Largest enterprises by revenue, billions of rubles
const TOP_ENTERPRISES: [(&str, f64); 8] = [
    ("Tulachermet", 85.2),
    ("Shchekinoazot", 72.5),
    ("Tulamashzavod", 45.8),
    ("Novomoskovsk Power Plant", 38.2),
    ("EVRAZ Vanady Tula", 32.5),
    ("Tula Cartridge Works", 28.9),
    ("Polyplast", 25.4),
    ("Kosogorsky Metallurgical Plant", 22.1),
];

/// Quarterly production indices by industry, percent of the same quarter
/// a year earlier
const QUARTERS: [&str; 6] = [
    "Q1 2023", "Q2 2023", "Q3 2023", "Q4 2023", "Q1 2024", "Q2 2024",
];
const INDUSTRY_DYNAMICS: [(&str, [f64; 6]); 5] = [
    ("Metallurgy", [102.5, 103.2, 104.1, 105.5, 106.2, 107.1]),
    ("Chemicals", [104.2, 105.1, 106.5, 107.2, 108.5, 109.8]),
    ("Machinery", [98.5, 99.2, 100.5, 101.8, 103.2, 104.5]),
    ("Food", [101.2, 101.8, 102.5, 103.1, 103.8, 104.2]),
    ("Light industry", [95.2, 96.5, 97.8, 98.5, 99.2, 100.1]),
];

/// Fixed capital investment by sector, billions of rubles
const INVESTMENT_BY_SECTOR: [(&str, f64); 8] = [
    ("Industry", 45.2),
    ("Transport", 12.8),
    ("Construction", 8.5),
    ("Agriculture", 6.2),
    ("Energy", 5.8),
    ("Trade", 4.5),
    ("IT and telecom", 3.2),
    ("Social services", 2.8),
];

/// Compose the economy document
pub fn compose(region: &RegionInfo) -> Document {
    Document::new("Economy")
        .subtitle(format!(
            "Economic indicators and development of {}",
            region.name
        ))
        .child(Node::row(vec![
            Node::kpi("GRP", "542.3 bn ₽", ChangeIndicator::percent(4.2)),
            Node::kpi("Investment", "98.5 bn ₽", ChangeIndicator::percent(12.5)),
            Node::kpi("Industrial output", "105.3%", ChangeIndicator::percent(2.1)),
        ]))
        .child(Node::row(vec![
            Node::chart_panel("GRP", gdp_chart()),
            Node::chart_panel("Investment", investment_chart()),
            Node::chart_panel("Industrial output", production_index_chart()),
        ]))
        .child(Node::row(vec![
            Node::chart_panel("Economic structure", structure_treemap()),
            Node::chart_panel("Key enterprises", top_enterprises_chart()),
        ]))
        .child(Node::chart_panel(
            "Industrial production dynamics",
            industry_dynamics_chart(),
        ))
        .child(Node::chart_panel(
            "Investment by sector",
            investment_by_sector_chart(),
        ))
}

/// GRP by year with growth-rate annotations on every year after the
/// first
pub fn gdp_chart() -> ChartSpec {
    let mut spec = ChartSpec::new(ChartKind::Line, "GRP dynamics (bn ₽)")
        .x_axis("Year")
        .y_axis("Billions of rubles")
        .series(
            Series::from_values("GRP", &YEARS, &GDP_BY_YEAR)
                .color("#1f77b4")
                .fill_area(),
        )
        .legend(false);

    for i in 1..GDP_BY_YEAR.len() {
        let growth = GDP_BY_YEAR[i] / GDP_BY_YEAR[i - 1] * 100.0 - 100.0;
        spec = spec.annotation(YEARS[i], format!("{growth:+.1}%"));
    }

    spec
}

/// Fixed capital investment by year
pub fn investment_chart() -> ChartSpec {
    ChartSpec::new(ChartKind::Bar, "Fixed capital investment")
        .x_axis("Year")
        .y_axis("Billions of rubles")
        .series(
            Series::from_values("Investment", &YEARS, &INVESTMENT_BY_YEAR)
                .color("#ff7f0e")
                .show_values(),
        )
        .legend(false)
}

/// Industrial production index with the 100% break-even line
pub fn production_index_chart() -> ChartSpec {
    ChartSpec::new(ChartKind::Line, "Industrial production index (%)")
        .x_axis("Year")
        .y_axis("% of previous year")
        .series(Series::from_values("Index", &YEARS, &PRODUCTION_INDEX).color("#2ca02c"))
        .reference_line(100.0, "100%")
        .legend(false)
}

/// GRP structure by activity
pub fn structure_treemap() -> ChartSpec {
    let (activities, shares): (Vec<&str>, Vec<f64>) = GRP_STRUCTURE.iter().cloned().unzip();

    ChartSpec::new(ChartKind::Treemap, "GRP structure by activity")
        .series(Series::from_values("Share of GRP", &activities, &shares).show_values())
        .legend(false)
}

/// Enterprises ranked by revenue, descending
pub fn top_enterprises_chart() -> ChartSpec {
    let pairs: Vec<(String, f64)> = TOP_ENTERPRISES
        .iter()
        .map(|(name, revenue)| (name.to_string(), *revenue))
        .collect();
    let ranked = stats::rank_descending(&pairs);

    let points = ranked
        .into_iter()
        .map(|(name, revenue)| crate::chart::SeriesPoint {
            category: name,
            value: revenue,
        })
        .collect();

    ChartSpec::new(ChartKind::Bar, "Largest enterprises by revenue")
        .x_axis("Revenue (bn ₽)")
        .series(Series::new("Revenue", points).show_values())
        .horizontal()
        .legend(false)
}

/// Quarterly production indices for the five leading industries
pub fn industry_dynamics_chart() -> ChartSpec {
    let mut spec = ChartSpec::new(
        ChartKind::Line,
        "Production indices by industry (%, year over year)",
    )
    .x_axis("Period")
    .y_axis("%")
    .reference_line(100.0, "100%");

    for (i, (industry, values)) in INDUSTRY_DYNAMICS.iter().enumerate() {
        spec = spec.series(
            Series::from_values(*industry, &QUARTERS, values)
                .color(crate::chart::SERIES_COLORS[i % crate::chart::SERIES_COLORS.len()]),
        );
    }

    spec
}

/// Fixed capital investment by sector
pub fn investment_by_sector_chart() -> ChartSpec {
    let (sectors, values): (Vec<&str>, Vec<f64>) = INVESTMENT_BY_SECTOR.iter().cloned().unzip();

    ChartSpec::new(ChartKind::Bar, "Investment by economic sector")
        .y_axis("Billions of rubles")
        .series(Series::from_values("Investment", &sectors, &values).show_values())
        .legend(false)
}
